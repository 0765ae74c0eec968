//! DeepSeek provider implementation

use super::{CompletionService, LlmError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const API_URL: &str = "https://api.deepseek.com/chat/completions";
const MODEL: &str = "deepseek-chat";

const SYSTEM_PROMPT: &str =
    "Você é o Vexus, um assistente pessoal útil e amigável. Seja direto e prático.";

/// Response-length budget per completion
const MAX_TOKENS: u32 = 300;
const TEMPERATURE: f32 = 0.7;

/// Bounded wait for the single remote attempt
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// DeepSeek chat-completion client. One attempt per call, no retry.
pub struct DeepSeekService {
    client: Client,
    api_key: String,
}

impl DeepSeekService {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, api_key }
    }

    fn build_request(message: &str) -> DeepSeekRequest {
        DeepSeekRequest {
            model: MODEL.to_string(),
            messages: vec![
                DeepSeekMessage {
                    role: "system".to_string(),
                    content: Some(SYSTEM_PROMPT.to_string()),
                },
                DeepSeekMessage {
                    role: "user".to_string(),
                    content: Some(message.to_string()),
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        }
    }

    fn extract_text(resp: DeepSeekResponse) -> Result<String, LlmError> {
        let choice = resp
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::unknown("No choices in response"))?;

        match choice.message.content {
            Some(text) if !text.is_empty() => Ok(text),
            _ => Err(LlmError::unknown("Empty completion text")),
        }
    }
}

#[async_trait]
impl CompletionService for DeepSeekService {
    async fn complete(&self, message: &str) -> Result<String, LlmError> {
        let request = Self::build_request(message);

        let response = self
            .client
            .post(API_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::network(format!("Request timeout: {e}"))
                } else if e.is_connect() {
                    LlmError::network(format!("Connection failed: {e}"))
                } else {
                    LlmError::unknown(format!("Request failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LlmError::network(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            if let Ok(error_resp) = serde_json::from_str::<DeepSeekErrorResponse>(&body) {
                let message = error_resp.error.message;
                return Err(match status.as_u16() {
                    401 | 403 => LlmError::auth(format!("Authentication failed: {message}")),
                    429 => LlmError::rate_limit(format!("Rate limit exceeded: {message}")),
                    400 => LlmError::invalid_request(format!("Invalid request: {message}")),
                    500..=599 => LlmError::server_error(format!("Server error: {message}")),
                    _ => LlmError::unknown(format!("HTTP {status}: {message}")),
                });
            }
            return Err(LlmError::unknown(format!("HTTP {status} error: {body}")));
        }

        let deepseek_response: DeepSeekResponse = serde_json::from_str(&body)
            .map_err(|e| LlmError::unknown(format!("Failed to parse response: {e}")))?;

        Self::extract_text(deepseek_response)
    }

    fn provider(&self) -> &str {
        "deepseek"
    }
}

// DeepSeek API types (OpenAI-compatible chat completions)

#[derive(Debug, Serialize)]
struct DeepSeekRequest {
    model: String,
    messages: Vec<DeepSeekMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct DeepSeekMessage {
    role: String,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DeepSeekResponse {
    choices: Vec<DeepSeekChoice>,
}

#[derive(Debug, Deserialize)]
struct DeepSeekChoice {
    message: DeepSeekMessage,
}

#[derive(Debug, Deserialize)]
struct DeepSeekErrorResponse {
    error: DeepSeekError,
}

#[derive(Debug, Deserialize)]
struct DeepSeekError {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_carries_raw_message() {
        // The relay normalizes for the local lookup only; the remote call
        // gets the message as typed.
        let request = DeepSeekService::build_request("  Oi, Vexus!  ");
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert_eq!(request.messages[1].role, "user");
        assert_eq!(request.messages[1].content.as_deref(), Some("  Oi, Vexus!  "));
        assert_eq!(request.max_tokens, 300);
    }

    #[test]
    fn test_extract_text_takes_first_choice() {
        let resp = DeepSeekResponse {
            choices: vec![DeepSeekChoice {
                message: DeepSeekMessage {
                    role: "assistant".to_string(),
                    content: Some("Hello".to_string()),
                },
            }],
        };
        assert_eq!(DeepSeekService::extract_text(resp).unwrap(), "Hello");
    }

    #[test]
    fn test_extract_text_rejects_empty_choices() {
        let resp = DeepSeekResponse { choices: vec![] };
        assert!(DeepSeekService::extract_text(resp).is_err());
    }

    #[test]
    fn test_extract_text_rejects_missing_content() {
        let resp = DeepSeekResponse {
            choices: vec![DeepSeekChoice {
                message: DeepSeekMessage {
                    role: "assistant".to_string(),
                    content: None,
                },
            }],
        };
        assert!(DeepSeekService::extract_text(resp).is_err());
    }
}
