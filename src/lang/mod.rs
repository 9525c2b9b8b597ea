//! Language support: catalog, validated language handles, and
//! script-based auto-detection.
//!
//! - `catalog`: immutable reference table of supported languages
//! - `language`: validated `Language` type and selector resolution
//! - `detect`: dominant-script classification for the `"auto"` selector

mod catalog;
mod detect;
mod language;

pub use catalog::{LanguageCatalog, LanguageInfo};
pub use detect::detect_script_language;
pub use language::{resolve_source, Language, AUTO};
