//! Error taxonomy for the translation engine.
//!
//! Validation failures (`UnsupportedLanguage`) are detected synchronously
//! and never reach the concurrent dispatch stage. Backend failures carry
//! the index of the failing chunk and abort the whole batch.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslateError {
    /// The requested language code does not resolve in the catalog.
    /// Raised before any chunking or network dispatch.
    #[error("unsupported language code '{code}'")]
    UnsupportedLanguage { code: String },

    /// A chunk's backend call failed (network, rate limit, malformed
    /// response). Aborts the whole translation; sibling chunks that
    /// already succeeded are discarded.
    #[error("translation backend failed for chunk {chunk_index}: {message}")]
    Backend { chunk_index: usize, message: String },

    /// Orchestration fault that should never occur in practice (aborted
    /// join handle, missing result slot). Not part of the caller-facing
    /// recovery contract.
    #[error("internal translation error: {0}")]
    Internal(String),
}

impl TranslateError {
    /// Index of the failing chunk, if this error originated in a backend call.
    pub fn chunk_index(&self) -> Option<usize> {
        match self {
            TranslateError::Backend { chunk_index, .. } => Some(*chunk_index),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_language_display() {
        let err = TranslateError::UnsupportedLanguage {
            code: "xx".to_string(),
        };
        assert_eq!(err.to_string(), "unsupported language code 'xx'");
    }

    #[test]
    fn test_backend_error_display_includes_chunk_index() {
        let err = TranslateError::Backend {
            chunk_index: 4,
            message: "connection refused".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("chunk 4"));
        assert!(text.contains("connection refused"));
    }

    #[test]
    fn test_chunk_index_accessor() {
        let backend = TranslateError::Backend {
            chunk_index: 2,
            message: "boom".to_string(),
        };
        assert_eq!(backend.chunk_index(), Some(2));

        let unsupported = TranslateError::UnsupportedLanguage {
            code: "zz".to_string(),
        };
        assert_eq!(unsupported.chunk_index(), None);
    }
}
