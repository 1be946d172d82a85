//! Error types for remote generation and model fallback.

use serde::Deserialize;
use thiserror::Error;

/// Status string the API uses for quota and rate-limit failures.
const RESOURCE_EXHAUSTED: &str = "RESOURCE_EXHAUSTED";

/// Errors raised by a single generation call against one model.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// The model's quota or rate limit is exhausted. Retryable on another model.
    #[error("Quota exhausted for model '{model}': {message}")]
    QuotaExhausted { model: String, message: String },

    /// The API rejected the request for any other reason.
    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    /// The prompt was blocked by the API's safety filters.
    #[error("Prompt was blocked by the API: {0}")]
    Blocked(String),

    /// Network or HTTP-level failure.
    #[error("Failed to reach the API endpoint: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response could not be interpreted.
    #[error("Invalid response from the API: {0}")]
    InvalidResponse(String),
}

impl GenerateError {
    /// Returns `true` if another model may succeed where this one failed.
    pub const fn is_quota_exhausted(&self) -> bool {
        matches!(self, Self::QuotaExhausted { .. })
    }
}

/// Errors raised by [`FallbackExecutor`](super::FallbackExecutor).
#[derive(Error, Debug)]
pub enum FallbackError {
    /// The model priority list is empty.
    #[error("No candidate models configured")]
    NoCandidates,

    /// Every model in the priority list reported quota exhaustion.
    #[error("All candidate models exhausted their quota ({}). Last error: {last}", tried.join(", "))]
    Exhausted {
        tried: Vec<String>,
        last: GenerateError,
    },

    /// A non-retryable failure, surfaced unmodified.
    #[error(transparent)]
    Generate(GenerateError),
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Classifies a failed HTTP response into a [`GenerateError`].
///
/// HTTP 429 and `RESOURCE_EXHAUSTED` bodies are quota errors; anything else
/// becomes [`GenerateError::Api`] carrying the API's message when the body
/// parses, or the raw body otherwise.
pub(crate) fn classify_http_error(model: &str, status: u16, body: &str) -> GenerateError {
    let parsed = serde_json::from_str::<ErrorEnvelope>(body).ok();

    let is_quota = status == 429
        || parsed
            .as_ref()
            .and_then(|e| e.error.status.as_deref())
            .is_some_and(|s| s == RESOURCE_EXHAUSTED);

    let message = parsed.map_or_else(|| body.trim().to_string(), |e| e.error.message);

    if is_quota {
        GenerateError::QuotaExhausted {
            model: model.to_string(),
            message,
        }
    } else {
        GenerateError::Api { status, message }
    }
}

/// Classifies an error object delivered inside the event stream.
pub(crate) fn classify_stream_error(model: &str, body: ApiErrorBody) -> GenerateError {
    let status = body.code.unwrap_or(500);
    if status == 429 || body.status.as_deref() == Some(RESOURCE_EXHAUSTED) {
        GenerateError::QuotaExhausted {
            model: model.to_string(),
            message: body.message,
        }
    } else {
        GenerateError::Api {
            status,
            message: body.message,
        }
    }
}
