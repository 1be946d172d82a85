use futures_util::Stream;
use reqwest::Client;
use serde::Serialize;
use std::borrow::Cow;
use std::pin::Pin;

use super::error::{GenerateError, classify_http_error};
use super::sse_parser::sse_to_text_stream;

/// Default Gemini REST endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// A stream of generated text chunks.
pub type TextStream = Pin<Box<dyn Stream<Item = Result<String, GenerateError>> + Send>>;

/// A backend able to generate text for a prompt with a named model.
///
/// Opening the stream fails with [`GenerateError::QuotaExhausted`] when the
/// model's quota is used up; the fallback executor relies on that distinction.
#[allow(async_fn_in_trait)]
pub trait Generate {
    async fn generate(&self, model: &str, prompt: &str) -> Result<TextStream, GenerateError>;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: Cow<'a, str>,
}

/// Client for the Gemini `streamGenerateContent` API.
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }

    fn stream_url(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{model}:streamGenerateContent?alt=sse",
            self.endpoint.trim_end_matches('/')
        )
    }
}

impl Generate for GeminiClient {
    async fn generate(&self, model: &str, prompt: &str) -> Result<TextStream, GenerateError> {
        let url = self.stream_url(model);

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: Cow::Borrowed(prompt),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(classify_http_error(model, status, &body));
        }

        Ok(Box::pin(sse_to_text_stream(
            model.to_string(),
            response.bytes_stream(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_url() {
        let client = GeminiClient::new(DEFAULT_ENDPOINT.to_string(), "key".to_string());
        assert_eq!(
            client.stream_url("gemini-2.5-flash"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:streamGenerateContent?alt=sse"
        );
    }

    #[test]
    fn test_stream_url_trims_trailing_slash() {
        let client = GeminiClient::new("http://localhost:8080/".to_string(), "key".to_string());
        assert!(client.stream_url("m").starts_with("http://localhost:8080/v1beta/"));
    }

    #[test]
    fn test_request_body_shape() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: Cow::Borrowed("Hello"),
                }],
            }],
        };
        let json = serde_json::to_value(&request).unwrap_or_default();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "Hello");
    }
}
