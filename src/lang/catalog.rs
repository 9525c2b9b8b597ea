//! Language catalog: single source of truth for all supported languages.
//!
//! The catalog is a fixed reference table loaded once behind a `OnceLock`
//! and never mutated. Codes are ISO 639-3 style strings and serve as the
//! lookup key everywhere else in the crate.

use std::sync::OnceLock;

/// Metadata for one supported language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageInfo {
    /// ISO 639-3 style language code (e.g., "eng", "spa", "cmn")
    pub code: &'static str,

    /// Native display name (e.g., "Español", "日本語")
    pub name: &'static str,

    /// English display name (e.g., "Spanish", "Japanese")
    pub english_name: &'static str,

    /// Coarse regional classification tag (e.g., "Europe", "MENA")
    pub region: &'static str,
}

/// Global language catalog singleton.
pub struct LanguageCatalog {
    languages: &'static [LanguageInfo],
}

static CATALOG: OnceLock<LanguageCatalog> = OnceLock::new();

impl LanguageCatalog {
    /// Get the global catalog instance, initializing it on first access.
    pub fn get() -> &'static LanguageCatalog {
        CATALOG.get_or_init(|| LanguageCatalog {
            languages: SUPPORTED_LANGUAGES,
        })
    }

    /// Look up a language by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&'static LanguageInfo> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// All languages in catalog order.
    pub fn list_all(&self) -> &'static [LanguageInfo] {
        self.languages
    }

    /// All languages carrying the given region tag.
    pub fn list_by_region(&self, region: &str) -> Vec<&'static LanguageInfo> {
        self.languages
            .iter()
            .filter(|lang| lang.region == region)
            .collect()
    }

    /// Whether a code resolves in the catalog.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

const fn info(
    code: &'static str,
    name: &'static str,
    english_name: &'static str,
    region: &'static str,
) -> LanguageInfo {
    LanguageInfo {
        code,
        name,
        english_name,
        region,
    }
}

/// The full reference table. Native names are carried where they differ
/// from the English name; the rest use the English name for both.
static SUPPORTED_LANGUAGES: &[LanguageInfo] = &[
    info("afr", "Afrikaans", "Afrikaans", "Africa"),
    info("sqi", "Albanian", "Albanian", "Europe"),
    info("amh", "Amharic", "Amharic", "Africa"),
    info("arb", "العربية", "Arabic", "MENA"),
    info("hye", "Armenian", "Armenian", "Asia"),
    info("asm", "Assamese", "Assamese", "Asia"),
    info("aze", "Azerbaijani", "Azerbaijani", "Asia"),
    info("eus", "Basque", "Basque", "Europe"),
    info("bel", "Belarusian", "Belarusian", "Europe"),
    info("ben", "বাংলা", "Bengali", "Asia"),
    info("bos", "Bosnian", "Bosnian", "Europe"),
    info("bul", "Bulgarian", "Bulgarian", "Europe"),
    info("mya", "Burmese", "Burmese", "Asia"),
    info("cat", "Catalan", "Catalan", "Europe"),
    info("ceb", "Cebuano", "Cebuano", "Asia"),
    info("nya", "Chichewa", "Chichewa", "Africa"),
    info("cmn", "中文", "Chinese", "Asia"),
    info("hrv", "Croatian", "Croatian", "Europe"),
    info("ces", "Czech", "Czech", "Europe"),
    info("dan", "Danish", "Danish", "Europe"),
    info("nld", "Dutch", "Dutch", "Europe"),
    info("eng", "English", "English", "Global"),
    info("epo", "Esperanto", "Esperanto", "Global"),
    info("est", "Estonian", "Estonian", "Europe"),
    info("fin", "Finnish", "Finnish", "Europe"),
    info("fra", "Français", "French", "Europe"),
    info("glg", "Galician", "Galician", "Europe"),
    info("kat", "Georgian", "Georgian", "Asia"),
    info("deu", "German", "German", "Europe"),
    info("ell", "Ελληνικά", "Greek", "Europe"),
    info("guj", "Gujarati", "Gujarati", "Asia"),
    info("hat", "Haitian Creole", "Haitian Creole", "Americas"),
    info("hau", "Hausa", "Hausa", "Africa"),
    info("heb", "Hebrew", "Hebrew", "MENA"),
    info("hin", "हिन्दी", "Hindi", "Asia"),
    info("hmn", "Hmong", "Hmong", "Asia"),
    info("hun", "Hungarian", "Hungarian", "Europe"),
    info("isl", "Icelandic", "Icelandic", "Europe"),
    info("ibo", "Igbo", "Igbo", "Africa"),
    info("ind", "Indonesian", "Indonesian", "Asia"),
    info("gle", "Irish", "Irish", "Europe"),
    info("ita", "Italian", "Italian", "Europe"),
    info("jpn", "日本語", "Japanese", "Asia"),
    info("jav", "Javanese", "Javanese", "Asia"),
    info("kan", "Kannada", "Kannada", "Asia"),
    info("kaz", "Kazakh", "Kazakh", "Asia"),
    info("khm", "Khmer", "Khmer", "Asia"),
    info("kor", "한국어", "Korean", "Asia"),
    info("kur", "Kurdish", "Kurdish", "MENA"),
    info("kir", "Kyrgyz", "Kyrgyz", "Asia"),
    info("lao", "Lao", "Lao", "Asia"),
    info("lat", "Latin", "Latin", "Europe"),
    info("lav", "Latvian", "Latvian", "Europe"),
    info("lit", "Lithuanian", "Lithuanian", "Europe"),
    info("ltz", "Luxembourgish", "Luxembourgish", "Europe"),
    info("mkd", "Macedonian", "Macedonian", "Europe"),
    info("mlg", "Malagasy", "Malagasy", "Africa"),
    info("msa", "Malay", "Malay", "Asia"),
    info("mal", "Malayalam", "Malayalam", "Asia"),
    info("mlt", "Maltese", "Maltese", "Europe"),
    info("mri", "Maori", "Maori", "Oceania"),
    info("mar", "Marathi", "Marathi", "Asia"),
    info("mon", "Mongolian", "Mongolian", "Asia"),
    info("nep", "Nepali", "Nepali", "Asia"),
    info("nor", "Norwegian", "Norwegian", "Europe"),
    info("ori", "Odia", "Odia", "Asia"),
    info("pus", "Pashto", "Pashto", "MENA"),
    info("prs", "Persian", "Persian", "MENA"),
    info("pol", "Polish", "Polish", "Europe"),
    info("por", "Português", "Portuguese", "Americas"),
    info("pan", "Punjabi", "Punjabi", "Asia"),
    info("ron", "Romanian", "Romanian", "Europe"),
    info("rus", "Русский", "Russian", "Europe"),
    info("smo", "Samoan", "Samoan", "Oceania"),
    info("gla", "Scots Gaelic", "Scots Gaelic", "Europe"),
    info("srp", "Serbian", "Serbian", "Europe"),
    info("sna", "Shona", "Shona", "Africa"),
    info("sin", "Sinhala", "Sinhala", "Asia"),
    info("slk", "Slovak", "Slovak", "Europe"),
    info("slv", "Slovenian", "Slovenian", "Europe"),
    info("som", "Somali", "Somali", "Africa"),
    info("spa", "Español", "Spanish", "Americas"),
    info("sun", "Sundanese", "Sundanese", "Asia"),
    info("swa", "Swahili", "Swahili", "Africa"),
    info("swe", "Swedish", "Swedish", "Europe"),
    info("tgl", "Tagalog", "Tagalog", "Asia"),
    info("tgk", "Tajik", "Tajik", "Asia"),
    info("tam", "Tamil", "Tamil", "Asia"),
    info("tat", "Tatar", "Tatar", "Asia"),
    info("tel", "Telugu", "Telugu", "Asia"),
    info("tha", "ไทย", "Thai", "Asia"),
    info("tur", "Turkish", "Turkish", "Europe"),
    info("ukr", "Ukrainian", "Ukrainian", "Europe"),
    info("urd", "Urdu", "Urdu", "Asia"),
    info("uig", "Uyghur", "Uyghur", "Asia"),
    info("uzb", "Uzbek", "Uzbek", "Asia"),
    info("vie", "Vietnamese", "Vietnamese", "Asia"),
    info("cym", "Welsh", "Welsh", "Europe"),
    info("xho", "Xhosa", "Xhosa", "Africa"),
    info("yid", "Yiddish", "Yiddish", "Europe"),
    info("yor", "Yoruba", "Yoruba", "Africa"),
    info("zul", "Zulu", "Zulu", "Africa"),
];
