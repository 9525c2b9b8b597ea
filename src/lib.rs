//! Chunked text translation engine.
//!
//! Translates arbitrarily long text by resolving source/target languages,
//! splitting the input into size-bounded, word-aligned chunks, dispatching
//! one concurrent backend call per chunk, and reassembling the results in
//! original order. The whole operation is all-or-nothing: the first failing
//! chunk aborts the batch and no partial output is returned.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use linguopro::backend::mock::{MockBackend, MockMode};
//! use linguopro::lang::Language;
//! use linguopro::translator::{TranslateOptions, Translator};
//!
//! let backend = Arc::new(MockBackend::new(MockMode::Uppercase));
//! let translator = Translator::new(backend, 1000, 0.3, Language::from_code("eng")?);
//! let out = translator
//!     .translate("Hello world", "auto", "spa", &TranslateOptions::default())
//!     .await?;
//! ```

pub mod backend;
pub mod chunk;
pub mod config;
pub mod error;
pub mod lang;
pub mod translator;

pub use backend::{TranslationBackend, TranslationRequest};
pub use chunk::{split_into_chunks, Chunk};
pub use config::Config;
pub use error::TranslateError;
pub use lang::{Language, LanguageCatalog, LanguageInfo};
pub use translator::{TranslateOptions, Translator};
