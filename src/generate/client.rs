//! OpenAI-compatible chat completion client.
//!
//! Works against any endpoint speaking the `/chat/completions` protocol
//! (OpenAI, vLLM, SGLang, text-generation-inference, ...). Non-streaming;
//! the pipeline needs the whole array before it can parse anything.

use super::TextGenerator;
use crate::config::LlmSettings;
use crate::error::{Result, StorycraftError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    json_schema: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// HTTP client for the configured chat-completion endpoint.
pub struct ChatClient {
    client: Client,
    settings: LlmSettings,
}

impl ChatClient {
    pub fn new(settings: &LlmSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(settings.timeout_ms))
            .build()?;
        Ok(Self {
            client,
            settings: settings.clone(),
        })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.settings.endpoint.trim_end_matches('/')
        )
    }

    fn api_key(&self) -> Option<String> {
        self.settings
            .api_key_env
            .as_deref()
            .and_then(|var| std::env::var(var).ok())
            .filter(|key| !key.is_empty())
    }
}

#[async_trait]
impl TextGenerator for ChatClient {
    async fn generate(
        &self,
        system_instruction: &str,
        user_instruction: &str,
        schema: Option<&serde_json::Value>,
    ) -> Result<String> {
        let response_format = schema.map(|schema| ResponseFormat {
            format_type: "json_schema".to_string(),
            json_schema: Some(schema.clone()),
        });

        let request = ChatCompletionRequest {
            model: self.settings.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_instruction.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_instruction.to_string(),
                },
            ],
            max_tokens: Some(self.settings.max_tokens),
            temperature: Some(self.settings.temperature),
            response_format,
            stream: false,
        };

        let mut builder = self.client.post(self.completions_url()).json(&request);
        if let Some(key) = self.api_key() {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StorycraftError::Generation(format!(
                "chat completion failed: HTTP {} - {}",
                status.as_u16(),
                body
            )));
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default();

        if content.is_empty() {
            return Err(StorycraftError::Generation(
                "chat completion returned no content".to_string(),
            ));
        }

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> LlmSettings {
        // Tests bypass main(), which normally installs the TLS provider.
        let _ = rustls::crypto::ring::default_provider().install_default();
        LlmSettings {
            endpoint: "http://localhost:8000/v1/".to_string(),
            model: "test-model".to_string(),
            timeout_ms: 1000,
            max_tokens: 4096,
            temperature: 0.7,
            api_key_env: None,
        }
    }

    #[test]
    fn test_completions_url_trims_trailing_slash() {
        let client = ChatClient::new(&settings()).unwrap();
        assert_eq!(
            client.completions_url(),
            "http://localhost:8000/v1/chat/completions"
        );
    }

    #[test]
    fn test_request_serialization_skips_absent_fields() {
        let request = ChatCompletionRequest {
            model: "m".to_string(),
            messages: vec![],
            max_tokens: None,
            temperature: None,
            response_format: None,
            stream: false,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("max_tokens"));
        assert!(!json.contains("response_format"));
    }

    #[test]
    fn test_api_key_absent_without_env_setting() {
        let client = ChatClient::new(&settings()).unwrap();
        assert!(client.api_key().is_none());
    }
}
