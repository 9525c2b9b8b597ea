//! Deterministic, API-free backend for tests and offline runs.
//!
//! Each mode simulates a different backend behavior without network
//! access; the call counter lets tests assert that validation failures
//! never reach the dispatch stage.

use crate::backend::{TranslationBackend, TranslationRequest};
use crate::error::TranslateError;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Behaviors the mock backend can simulate.
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Return the chunk text uppercased.
    Uppercase,

    /// Append the target language's name: "hola" -> "hola [English]".
    Suffix,

    /// Prefix the resolved language pair: "[Spanish->English] hola".
    /// Lets tests observe which languages the orchestrator resolved.
    Languages,

    /// Fail for the chunk at the given index, succeed (uppercased) for
    /// all others.
    FailAt(usize),

    /// Return the chunk text unchanged.
    Echo,
}

/// Mock translation backend with call counting and optional staggered
/// completion delays.
pub struct MockBackend {
    mode: MockMode,
    calls: AtomicUsize,
    /// When set, chunk `i` sleeps `(8 - i) * stagger_ms` before
    /// responding, so earlier chunks finish later than later ones.
    stagger_ms: u64,
}

impl MockBackend {
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode,
            calls: AtomicUsize::new(0),
            stagger_ms: 0,
        }
    }

    /// Delay responses so completion order is the reverse of dispatch
    /// order, exercising index-based reassembly.
    pub fn with_staggered_delay(mut self, stagger_ms: u64) -> Self {
        self.stagger_ms = stagger_ms;
        self
    }

    /// Number of `translate_chunk` calls observed so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranslationBackend for MockBackend {
    async fn translate_chunk(
        &self,
        request: &TranslationRequest,
    ) -> Result<String, TranslateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.stagger_ms > 0 {
            let factor = 8usize.saturating_sub(request.chunk_index) as u64;
            tokio::time::sleep(Duration::from_millis(factor * self.stagger_ms)).await;
        }

        match &self.mode {
            MockMode::Uppercase => Ok(request.text.to_uppercase()),
            MockMode::Suffix => Ok(format!("{} [{}]", request.text, request.target_language)),
            MockMode::Languages => Ok(format!(
                "[{}->{}] {}",
                request.source_language, request.target_language, request.text
            )),
            MockMode::FailAt(index) => {
                if request.chunk_index == *index {
                    Err(TranslateError::Backend {
                        chunk_index: request.chunk_index,
                        message: "simulated backend failure".to_string(),
                    })
                } else {
                    Ok(request.text.to_uppercase())
                }
            }
            MockMode::Echo => Ok(request.text.clone()),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
