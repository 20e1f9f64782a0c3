//! REST client for an OpenAI-compatible chat-completions endpoint.
//!
//! Wraps `POST {base_url}/chat/completions` using [`reqwest`], with a bearer
//! token and a single fixed timeout per call. No retries.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use crate::config::LlmConfig;
use crate::error::LlmError;
use crate::messages::{ChatMessage, ChatRequest, ChatResponse, ResponseFormat};

/// HTTP client for a chat-completions API.
#[derive(Debug, Clone)]
pub struct ChatClient {
    client: reqwest::Client,
    completions_url: String,
    model: String,
    temperature: f32,
}

impl ChatClient {
    /// Build a client from configuration.
    ///
    /// Fails if the API key is not a valid header value or the underlying
    /// [`reqwest::Client`] cannot be constructed.
    pub fn new(config: &LlmConfig) -> Result<Self, LlmError> {
        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| LlmError::InvalidApiKey)?;
        headers.insert(AUTHORIZATION, bearer);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            completions_url: format!(
                "{}/chat/completions",
                config.base_url.trim_end_matches('/')
            ),
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Run one completion in JSON mode and return the raw message content.
    ///
    /// The content is not parsed here; callers decide what shape they expect.
    pub async fn complete_json(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
    ) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage::system(system_prompt),
                ChatMessage::user(user_prompt),
            ],
            temperature: self.temperature,
            max_tokens,
            response_format: ResponseFormat::json_object(),
        };

        let response = self
            .client
            .post(&self.completions_url)
            .json(&request)
            .send()
            .await?;

        let completion: ChatResponse = Self::parse_response(response).await?;
        completion
            .into_first_content()
            .ok_or(LlmError::EmptyResponse)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`LlmError::ApiError`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, LlmError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(LlmError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, LlmError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn strips_trailing_slash_from_base_url() {
        let mut config = LlmConfig::new("sk-test");
        config.base_url = "http://localhost:9999/v1/".to_string();

        let client = ChatClient::new(&config).unwrap();
        assert_eq!(
            client.completions_url,
            "http://localhost:9999/v1/chat/completions"
        );
    }

    #[test]
    fn rejects_api_key_with_newline() {
        let config = LlmConfig::new("sk-bad\nkey");
        assert_matches!(ChatClient::new(&config), Err(LlmError::InvalidApiKey));
    }
}
