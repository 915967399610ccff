use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use tracing::{debug, warn};

use crate::error::GeminiError;
use crate::types::{ApiErrorResponse, GenerateContentRequest, GenerateContentResponse};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Google Gemini API client
pub struct GeminiClient {
    api_key: String,
    base_url: String,
    http_client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, GeminiError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(GeminiError::authentication("API key cannot be empty"));
        }

        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(300))
            .build()
            .map_err(|e| GeminiError::Network { source: e })?;

        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            http_client,
        })
    }

    /// Point the client at a different host, e.g. a local mock server.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Start building a stateful chat session backed by this client.
    pub fn start_chat(self) -> crate::chat::ChatBuilder {
        crate::chat::ChatBuilder::new(self)
    }

    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, model);

        let mut headers = HeaderMap::new();
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(&self.api_key).map_err(|e| {
                GeminiError::authentication(format!("Invalid API key format: {}", e))
            })?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        debug!(model, turns = request.contents.len(), "sending generateContent request");

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(request)
            .send()
            .await
            .map_err(|e| GeminiError::Network { source: e })?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());

            warn!(status = status.as_u16(), "generateContent request failed");

            if let Ok(envelope) = serde_json::from_str::<ApiErrorResponse>(&error_body) {
                return Err(Self::map_error(
                    envelope.error.code,
                    envelope.error.message,
                ));
            }

            return Err(GeminiError::api_error(status.as_u16(), error_body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GeminiError::Network { source: e })?;
        let generate_response: GenerateContentResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &generate_response.usage_metadata {
            debug!(
                prompt_tokens = usage.prompt_token_count,
                reply_tokens = usage.candidates_token_count,
                "generateContent usage"
            );
        }

        Ok(generate_response)
    }

    fn map_error(status: u16, message: String) -> GeminiError {
        match status {
            400 => GeminiError::invalid_request(message),
            401 | 403 => GeminiError::Authentication { message },
            429 => GeminiError::rate_limit(message, None),
            _ => GeminiError::api_error(status, message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = GeminiClient::new("test-key");
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_creation_empty_key() {
        let client = GeminiClient::new("");
        assert!(client.is_err());
    }

    #[test]
    fn test_error_mapping() {
        assert!(matches!(
            GeminiClient::map_error(400, "bad".into()),
            GeminiError::InvalidRequest { .. }
        ));
        assert!(matches!(
            GeminiClient::map_error(403, "denied".into()),
            GeminiError::Authentication { .. }
        ));
        assert!(matches!(
            GeminiClient::map_error(429, "slow down".into()),
            GeminiError::RateLimit { .. }
        ));
        assert!(matches!(
            GeminiClient::map_error(503, "overloaded".into()),
            GeminiError::Api { status: 503, .. }
        ));
    }
}
