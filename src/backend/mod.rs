//! Translation backend abstraction.
//!
//! The orchestrator talks to a `TranslationBackend` and never to a wire
//! protocol directly, so production code can run against the OpenAI
//! adapter while tests run against the deterministic mock.

pub mod mock;
pub mod openai;

use crate::error::TranslateError;
use async_trait::async_trait;

pub use openai::OpenAiBackend;

/// One chunk's worth of translation work, fully self-contained: the
/// chunk text, the resolved language names, and the sampling parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationRequest {
    /// Index of the originating chunk, carried through for diagnostics.
    pub chunk_index: usize,
    /// The literal chunk text.
    pub text: String,
    /// English name of the source language (e.g., "Spanish").
    pub source_language: String,
    /// English name of the target language.
    pub target_language: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Completion token budget for this chunk.
    pub max_tokens: u32,
}

/// Stateless adapter translating one chunk per call.
///
/// Implementations issue exactly one backend call per invocation and
/// perform no retries; transient failures surface as
/// [`TranslateError::Backend`] carrying the chunk index.
#[async_trait]
pub trait TranslationBackend: Send + Sync {
    /// Translate a single chunk.
    ///
    /// A backend response with no content is an empty string, not an
    /// error.
    async fn translate_chunk(&self, request: &TranslationRequest)
        -> Result<String, TranslateError>;

    /// Identifier for logging.
    fn name(&self) -> &str;
}

/// Default completion budget for a chunk: twice its word count, capped
/// at 1000 tokens.
pub fn default_max_tokens(text: &str) -> u32 {
    let words = text.split_whitespace().count() as u32;
    (words * 2).min(1000)
}
