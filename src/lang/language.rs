//! Validated language handle and source/target resolution.

use crate::error::TranslateError;
use crate::lang::catalog::{LanguageCatalog, LanguageInfo};
use crate::lang::detect::detect_script_language;

/// Sentinel selector requesting script-based source auto-detection.
pub const AUTO: &str = "auto";

/// A language validated against the catalog.
///
/// Can only be constructed from a code that resolves in the catalog, so
/// accessors never fail once a value exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    code: &'static str,
}

impl Language {
    /// Resolve a catalog code into a validated `Language`.
    pub fn from_code(code: &str) -> Result<Language, TranslateError> {
        match LanguageCatalog::get().get_by_code(code) {
            // Use the static str owned by the catalog entry.
            Some(info) => Ok(Language { code: info.code }),
            None => Err(TranslateError::UnsupportedLanguage {
                code: code.to_string(),
            }),
        }
    }

    /// Detect the dominant script in `text` and return that script
    /// family's default language, or `None` for text with no matching
    /// script block (e.g. pure Latin).
    pub fn detect(text: &str) -> Option<Language> {
        detect_script_language(text).and_then(|code| Language::from_code(code).ok())
    }

    /// The catalog code (e.g., "eng", "jpn").
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// The full catalog entry for this language.
    pub fn info(&self) -> &'static LanguageInfo {
        // The code was validated at construction; a miss here would mean
        // the catalog changed underneath us, which it never does.
        LanguageCatalog::get()
            .get_by_code(self.code)
            .expect("validated language code must exist in catalog")
    }

    /// English display name, as embedded in backend prompts.
    pub fn english_name(&self) -> &'static str {
        self.info().english_name
    }

    /// Native display name.
    pub fn native_name(&self) -> &'static str {
        self.info().name
    }

    /// Region classification tag.
    pub fn region(&self) -> &'static str {
        self.info().region
    }
}

/// Resolve a source selector: the `"auto"` sentinel runs script
/// detection and falls back to `fallback` when no script matches; any
/// other selector must resolve in the catalog.
pub fn resolve_source(
    selector: &str,
    text: &str,
    fallback: Language,
) -> Result<Language, TranslateError> {
    if selector == AUTO {
        Ok(Language::detect(text).unwrap_or(fallback))
    } else {
        Language::from_code(selector)
    }
}
