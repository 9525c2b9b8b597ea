//! OpenAI-compatible chat-completions backend.
//!
//! Builds a role-separated prompt (system instruction establishing
//! translation fidelity goals, user instruction carrying the literal
//! chunk text) and issues exactly one HTTP call per chunk. No retries:
//! the first failure is surfaced to the orchestrator, which aborts the
//! whole batch.

use crate::backend::{TranslationBackend, TranslationRequest};
use crate::config::Config;
use crate::error::TranslateError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Chat Completion request for one chunk.
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

/// Build the system prompt establishing translation fidelity goals.
fn build_system_prompt(source_language: &str, target_language: &str) -> String {
    format!(
        r#"You are an advanced AI language translator. Your task is to accurately translate text from {} to {}, preserving the meaning and style of the original text as much as possible.

Key objectives:
1. Provide an accurate and fluent translation.
2. Maintain the original text style, including formality, tone, and structure.
3. Preserve idiomatic expressions and cultural nuances when possible, or provide suitable equivalents in the target language.
4. Ensure proper grammar, spelling, and punctuation in the target language.
5. If certain terms are untranslatable or require explanation, provide a brief note in parentheses."#,
        source_language, target_language
    )
}

/// Build the user prompt carrying the literal chunk text.
fn build_user_prompt(text: &str, source_language: &str, target_language: &str) -> String {
    format!(
        r#"Please translate the following text from {} to {}:

{}

Guidelines:
1. Translate the text accurately, preserving the original meaning and intent.
2. Maintain the style of the original text (formal, casual, technical, etc.).
3. If there are culture-specific references or idioms, translate them appropriately or provide explanations if necessary.
4. Ensure the translation reads naturally in the target language.

Please provide the translation now:"#,
        source_language, target_language, text
    )
}

/// Stateless reqwest-based adapter for OpenAI-compatible APIs.
pub struct OpenAiBackend {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl OpenAiBackend {
    pub fn new(client: reqwest::Client, api_url: String, api_key: String, model: String) -> Self {
        Self {
            client,
            api_url,
            api_key,
            model,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            reqwest::Client::new(),
            config.openai_api_url.clone(),
            config.openai_api_key.clone(),
            config.openai_model.clone(),
        )
    }

    fn backend_error(request: &TranslationRequest, message: String) -> TranslateError {
        TranslateError::Backend {
            chunk_index: request.chunk_index,
            message,
        }
    }
}

#[async_trait]
impl TranslationBackend for OpenAiBackend {
    async fn translate_chunk(
        &self,
        request: &TranslationRequest,
    ) -> Result<String, TranslateError> {
        let chat_request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: build_system_prompt(
                        &request.source_language,
                        &request.target_language,
                    ),
                },
                Message {
                    role: "user".to_string(),
                    content: build_user_prompt(
                        &request.text,
                        &request.source_language,
                        &request.target_language,
                    ),
                },
            ],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        debug!(
            chunk_index = request.chunk_index,
            max_tokens = request.max_tokens,
            "dispatching chunk to chat completions API"
        );

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| Self::backend_error(request, format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            return Err(Self::backend_error(
                request,
                format!("API error ({}): {}", status, body),
            ));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| Self::backend_error(request, format!("malformed response: {}", e)))?;

        // A response with no choices is an empty translation, not an error.
        Ok(chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default())
    }

    fn name(&self) -> &str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{body_string_contains, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn test_request(text: &str) -> TranslationRequest {
        TranslationRequest {
            chunk_index: 0,
            text: text.to_string(),
            source_language: "Spanish".to_string(),
            target_language: "English".to_string(),
            temperature: 0.3,
            max_tokens: 100,
        }
    }

    fn test_backend(api_url: String) -> OpenAiBackend {
        OpenAiBackend::new(
            reqwest::Client::new(),
            api_url,
            "test-openai-key".to_string(),
            "gpt-4o-mini".to_string(),
        )
    }

    fn chat_completion_response(content: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "choices": [
                {
                    "index": 0,
                    "message": { "role": "assistant", "content": content },
                    "finish_reason": "stop"
                }
            ]
        })
    }

    // ==================== Prompt Tests ====================

    #[test]
    fn test_system_prompt_embeds_both_languages() {
        let prompt = build_system_prompt("Spanish", "English");
        assert!(prompt.contains("from Spanish to English"));
        assert!(prompt.contains("accurate and fluent translation"));
        assert!(prompt.contains("grammar, spelling, and punctuation"));
    }

    #[test]
    fn test_user_prompt_embeds_literal_text() {
        let prompt = build_user_prompt("hola mundo", "Spanish", "English");
        assert!(prompt.contains("from Spanish to English"));
        assert!(prompt.contains("hola mundo"));
        assert!(prompt.contains("Please provide the translation now:"));
    }

    // ==================== Serialization Tests ====================

    #[test]
    fn test_chat_request_serialization() {
        let request = ChatRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: "Translate.".to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: "Hello".to_string(),
                },
            ],
            max_tokens: 42,
            temperature: 0.3,
        };

        let json = serde_json::to_string(&request).expect("should serialize");
        assert!(json.contains("gpt-4o-mini"));
        assert!(json.contains("\"max_tokens\":42"));
        assert!(json.contains("0.3"));
        assert!(json.contains("system"));
        assert!(json.contains("user"));
    }

    #[test]
    fn test_chat_response_deserialization() {
        let json = r#"{"choices":[{"message":{"role":"assistant","content":"Hola"}}]}"#;
        let response: ChatResponse = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(response.choices.len(), 1);
        assert_eq!(response.choices[0].message.content, "Hola");
    }

    // ==================== Wiremock Tests ====================

    #[tokio::test]
    async fn test_translate_chunk_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("Authorization", "Bearer test-openai-key"))
            .and(header("Content-Type", "application/json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(chat_completion_response("hello world")),
            )
            .mount(&mock_server)
            .await;

        let backend = test_backend(format!("{}/v1/chat/completions", mock_server.uri()));
        let result = backend
            .translate_chunk(&test_request("hola mundo"))
            .await
            .expect("should succeed");

        assert_eq!(result, "hello world");
    }

    #[tokio::test]
    async fn test_translate_chunk_sends_chunk_text_in_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_string_contains("hola mundo"))
            .and(body_string_contains("Spanish"))
            .and(body_string_contains("English"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(chat_completion_response("ok")),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let backend = test_backend(format!("{}/v1/chat/completions", mock_server.uri()));
        backend
            .translate_chunk(&test_request("hola mundo"))
            .await
            .expect("should succeed");
    }

    #[tokio::test]
    async fn test_translate_chunk_api_error_carries_chunk_index() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&mock_server)
            .await;

        let backend = test_backend(format!("{}/v1/chat/completions", mock_server.uri()));
        let mut request = test_request("hola");
        request.chunk_index = 7;

        let err = backend.translate_chunk(&request).await.unwrap_err();
        assert_eq!(err.chunk_index(), Some(7));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_translate_chunk_single_call_no_retry() {
        let mock_server = MockServer::start().await;

        // Exactly one request even on failure; retries are a non-goal.
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let backend = test_backend(format!("{}/v1/chat/completions", mock_server.uri()));
        assert!(backend.translate_chunk(&test_request("hola")).await.is_err());
    }

    #[tokio::test]
    async fn test_translate_chunk_empty_choices_is_empty_string() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "choices": [] })),
            )
            .mount(&mock_server)
            .await;

        let backend = test_backend(format!("{}/v1/chat/completions", mock_server.uri()));
        let result = backend
            .translate_chunk(&test_request("hola"))
            .await
            .expect("empty choices should not be an error");

        assert_eq!(result, "");
    }

    #[tokio::test]
    async fn test_translate_chunk_malformed_body_is_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let backend = test_backend(format!("{}/v1/chat/completions", mock_server.uri()));
        let err = backend.translate_chunk(&test_request("hola")).await.unwrap_err();
        assert!(err.to_string().contains("malformed response"));
    }
}
