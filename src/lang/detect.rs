//! Script-based source language detection.
//!
//! Classifies the dominant Unicode script block in a text sample and maps
//! it to the default language for that script family. Latin-script text
//! matches no range here; the caller falls back to its configured default
//! language in that case.

use std::ops::RangeInclusive;

/// Script block ranges and the catalog code each one defaults to.
/// Hiragana and Katakana both map to Japanese; kanji-only text counts
/// toward the CJK range and resolves to Chinese, matching the
/// single-default-per-script policy.
const SCRIPT_RANGES: &[(RangeInclusive<char>, &str)] = &[
    ('\u{0600}'..='\u{06FF}', "arb"), // Arabic
    ('\u{0900}'..='\u{097F}', "hin"), // Devanagari
    ('\u{0E00}'..='\u{0E7F}', "tha"), // Thai
    ('\u{0400}'..='\u{04FF}', "rus"), // Cyrillic
    ('\u{3040}'..='\u{309F}', "jpn"), // Hiragana
    ('\u{30A0}'..='\u{30FF}', "jpn"), // Katakana
    ('\u{4E00}'..='\u{9FFF}', "cmn"), // CJK Unified Ideographs
    ('\u{AC00}'..='\u{D7AF}', "kor"), // Hangul
    ('\u{0370}'..='\u{03FF}', "ell"), // Greek
];

/// Detect the dominant script in `text` and return the catalog code of
/// its default language, or `None` when no configured range matches.
pub fn detect_script_language(text: &str) -> Option<&'static str> {
    let mut counts = [0usize; SCRIPT_RANGES.len()];

    for ch in text.chars() {
        for (i, (range, _)) in SCRIPT_RANGES.iter().enumerate() {
            if range.contains(&ch) {
                counts[i] += 1;
                break;
            }
        }
    }

    // Ranges sharing a default language (Hiragana and Katakana) are
    // folded together before picking the winner, so mixed kana text is
    // not undercounted against kanji.
    let mut best: Option<(&'static str, usize)> = None;
    for &(_, code) in SCRIPT_RANGES.iter() {
        let mut combined = 0usize;
        for (j, &(_, other)) in SCRIPT_RANGES.iter().enumerate() {
            if other == code {
                combined += counts[j];
            }
        }
        if combined > 0 && best.map_or(true, |(_, n)| combined > n) {
            best = Some((code, combined));
        }
    }

    best.map(|(code, _)| code)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Single Script Tests ====================

    #[test]
    fn test_detect_arabic() {
        assert_eq!(detect_script_language("مرحبا بالعالم"), Some("arb"));
    }

    #[test]
    fn test_detect_devanagari_as_hindi() {
        assert_eq!(detect_script_language("नमस्ते दुनिया"), Some("hin"));
    }

    #[test]
    fn test_detect_thai() {
        assert_eq!(detect_script_language("สวัสดีชาวโลก"), Some("tha"));
    }

    #[test]
    fn test_detect_cyrillic_as_russian() {
        assert_eq!(detect_script_language("Привет, мир"), Some("rus"));
    }

    #[test]
    fn test_detect_hiragana_as_japanese() {
        assert_eq!(detect_script_language("こんにちはせかい"), Some("jpn"));
    }

    #[test]
    fn test_detect_katakana_as_japanese() {
        assert_eq!(detect_script_language("コンニチハ"), Some("jpn"));
    }

    #[test]
    fn test_detect_cjk_as_chinese() {
        assert_eq!(detect_script_language("你好世界"), Some("cmn"));
    }

    #[test]
    fn test_detect_hangul_as_korean() {
        assert_eq!(detect_script_language("안녕하세요 세계"), Some("kor"));
    }

    #[test]
    fn test_detect_greek() {
        assert_eq!(detect_script_language("Γειά σου Κόσμε"), Some("ell"));
    }

    // ==================== No Match Tests ====================

    #[test]
    fn test_latin_text_matches_nothing() {
        assert_eq!(detect_script_language("Hello world"), None);
    }

    #[test]
    fn test_empty_text_matches_nothing() {
        assert_eq!(detect_script_language(""), None);
    }

    #[test]
    fn test_digits_and_punctuation_match_nothing() {
        assert_eq!(detect_script_language("1234 ?! ..."), None);
    }

    // ==================== Dominance Tests ====================

    #[test]
    fn test_dominant_script_wins_over_minority() {
        // Mostly Cyrillic with a couple of Greek characters mixed in.
        assert_eq!(
            detect_script_language("Привет дорогой мир αβ"),
            Some("rus")
        );
    }

    #[test]
    fn test_latin_noise_does_not_mask_script() {
        assert_eq!(
            detect_script_language("see https://example.com: Привет"),
            Some("rus")
        );
    }

    #[test]
    fn test_kana_and_kanji_mix_counts_kana_together() {
        // Six kana (three hiragana + three katakana, folded) outweigh
        // the five kanji, so the sample resolves to Japanese.
        assert_eq!(detect_script_language("これはテスト 日本語文章"), Some("jpn"));
    }
}
