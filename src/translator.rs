//! Orchestrator: resolves languages, chunks the input, fans out one
//! concurrent backend call per chunk, and joins the results in original
//! order.
//!
//! The fan-in is all-or-nothing: the first failing chunk aborts the
//! whole operation, in-flight siblings are cancelled, and results from
//! chunks that already succeeded are discarded. There is no retry path.

use crate::backend::{default_max_tokens, OpenAiBackend, TranslationBackend, TranslationRequest};
use crate::chunk::split_into_chunks;
use crate::config::Config;
use crate::error::TranslateError;
use crate::lang::{resolve_source, Language};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Per-call overrides for the sampling parameters. Unset fields fall
/// back to the translator's defaults.
#[derive(Debug, Clone, Default)]
pub struct TranslateOptions {
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

/// Translation orchestrator.
///
/// Holds the backend plus the policy knobs resolved at construction
/// time; `translate` is the single entry point.
pub struct Translator {
    backend: Arc<dyn TranslationBackend>,
    max_chunk_size: usize,
    default_temperature: f32,
    fallback_language: Language,
}

impl Translator {
    pub fn new(
        backend: Arc<dyn TranslationBackend>,
        max_chunk_size: usize,
        default_temperature: f32,
        fallback_language: Language,
    ) -> Self {
        Self {
            backend,
            max_chunk_size,
            default_temperature,
            fallback_language,
        }
    }

    /// Wire up an OpenAI backend from the environment configuration.
    pub fn from_config(config: &Config) -> Result<Self, TranslateError> {
        let fallback = Language::from_code(&config.fallback_language)?;
        Ok(Self::new(
            Arc::new(OpenAiBackend::from_config(config)),
            config.max_chunk_size,
            config.temperature,
            fallback,
        ))
    }

    /// Translate `text` from `source_selector` (a catalog code or
    /// `"auto"`) to `target_selector` (a catalog code).
    ///
    /// The target is resolved first and an unsupported code fails the
    /// call before any chunking or network dispatch happens. Empty or
    /// whitespace-only input returns an empty string without touching
    /// the backend.
    pub async fn translate(
        &self,
        text: &str,
        source_selector: &str,
        target_selector: &str,
        options: &TranslateOptions,
    ) -> Result<String, TranslateError> {
        // Fail fast on an invalid target before doing any work.
        let target = Language::from_code(target_selector)?;
        let source = resolve_source(source_selector, text, self.fallback_language)?;

        debug!(
            source = source.english_name(),
            target = target.english_name(),
            "resolved translation languages"
        );

        let chunks = split_into_chunks(text, self.max_chunk_size);
        if chunks.is_empty() {
            return Ok(String::new());
        }

        let chunk_count = chunks.len();
        info!(
            chunk_count,
            backend = self.backend.name(),
            "dispatching translation"
        );

        let temperature = options.temperature.unwrap_or(self.default_temperature);

        let mut tasks: JoinSet<(usize, Result<String, TranslateError>)> = JoinSet::new();
        for chunk in chunks {
            let request = TranslationRequest {
                chunk_index: chunk.index,
                source_language: source.english_name().to_string(),
                target_language: target.english_name().to_string(),
                temperature,
                max_tokens: options
                    .max_tokens
                    .unwrap_or_else(|| default_max_tokens(&chunk.text)),
                text: chunk.text,
            };
            let backend = Arc::clone(&self.backend);
            tasks.spawn(async move {
                let result = backend.translate_chunk(&request).await;
                (request.chunk_index, result)
            });
        }

        // Collect keyed by chunk index; completion order is irrelevant.
        let mut translated: Vec<Option<String>> = vec![None; chunk_count];
        while let Some(joined) = tasks.join_next().await {
            let (index, result) = joined
                .map_err(|e| TranslateError::Internal(format!("translation task failed: {}", e)))?;
            match result {
                Ok(text) => translated[index] = Some(text),
                Err(err) => {
                    warn!(chunk_index = index, error = %err, "chunk translation failed");
                    // Cancel in-flight siblings; their results are
                    // discarded along with any already collected.
                    tasks.abort_all();
                    return Err(err);
                }
            }
        }

        let mut pieces = Vec::with_capacity(chunk_count);
        for (index, slot) in translated.into_iter().enumerate() {
            match slot {
                Some(text) => pieces.push(text),
                None => {
                    return Err(TranslateError::Internal(format!(
                        "missing result for chunk {}",
                        index
                    )))
                }
            }
        }

        Ok(pieces.join(" "))
    }
}
