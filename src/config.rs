use crate::lang::Language;
use anyhow::{Context, Result};

pub const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 1000;
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

#[derive(Debug, Clone)]
pub struct Config {
    // OpenAI
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_api_url: String,

    // Chunking
    pub max_chunk_size: usize,

    // Sampling
    pub temperature: f32,

    // Language assumed when auto-detection matches no known script
    pub fallback_language: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let config = Self {
            // OpenAI
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .context("OPENAI_API_KEY not set")?,
            openai_model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            openai_api_url: std::env::var("OPENAI_API_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_API_URL.to_string()),

            // Chunking
            max_chunk_size: std::env::var("MAX_CHUNK_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_CHUNK_SIZE),

            // Sampling
            temperature: std::env::var("TRANSLATION_TEMPERATURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TEMPERATURE),

            // Detection fallback
            fallback_language: std::env::var("FALLBACK_LANGUAGE")
                .unwrap_or_else(|_| "eng".to_string()),
        };

        // The fallback policy must be resolvable at construction time,
        // not discovered mid-translation.
        Language::from_code(&config.fallback_language).with_context(|| {
            format!(
                "FALLBACK_LANGUAGE '{}' is not a supported language code",
                config.fallback_language
            )
        })?;

        if config.max_chunk_size == 0 {
            anyhow::bail!("MAX_CHUNK_SIZE must be greater than zero");
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            openai_api_key: "test-key".to_string(),
            openai_model: "gpt-4o-mini".to_string(),
            openai_api_url: DEFAULT_OPENAI_API_URL.to_string(),
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
            temperature: DEFAULT_TEMPERATURE,
            fallback_language: "eng".to_string(),
        }
    }

    #[test]
    fn test_defaults() {
        let config = test_config();
        assert_eq!(config.max_chunk_size, 1000);
        assert!((config.temperature - 0.3).abs() < f32::EPSILON);
        assert_eq!(config.fallback_language, "eng");
    }

    #[test]
    fn test_fallback_language_resolves() {
        let config = test_config();
        assert!(Language::from_code(&config.fallback_language).is_ok());
    }
}
