//! Ordered model fallback.
//!
//! Models are tried strictly in priority order. Quota exhaustion moves on to
//! the next model; every other failure aborts immediately.

use futures_util::StreamExt;
use tracing::Level;

use super::client::Generate;
use super::error::{FallbackError, GenerateError};

/// Level of the event logged when a model's quota sends the request on.
/// Hidden by the default filter so the session only shows the result.
pub(crate) const FALLBACK_LOG_LEVEL: Level = Level::INFO;

/// A completed generation and the model that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub text: String,
    pub model: String,
}

/// Runs prompts against a priority list of models.
pub struct FallbackExecutor<G> {
    generator: G,
    models: Vec<String>,
}

impl<G: Generate> FallbackExecutor<G> {
    pub const fn new(generator: G, models: Vec<String>) -> Self {
        Self { generator, models }
    }

    pub fn models(&self) -> &[String] {
        &self.models
    }

    pub const fn generator(&self) -> &G {
        &self.generator
    }

    /// Executes `prompt`, forwarding streamed chunks to `on_chunk`.
    ///
    /// A quota error raised mid-stream only falls through to the next model
    /// if nothing has been forwarded yet.
    pub async fn execute<F>(&self, prompt: &str, mut on_chunk: F) -> Result<Generation, FallbackError>
    where
        F: FnMut(&str),
    {
        let mut tried = Vec::with_capacity(self.models.len());
        let mut last_quota_error = None;

        for model in &self.models {
            tracing::debug!(model = %model, "requesting generation");
            tried.push(model.clone());

            match self.attempt(model, prompt, &mut on_chunk).await {
                Ok(text) => {
                    return Ok(Generation {
                        text,
                        model: model.clone(),
                    });
                }
                Err(AttemptError::Retryable(e)) => {
                    tracing::event!(FALLBACK_LOG_LEVEL, model = %model, error = %e, "quota exhausted, trying next model");
                    last_quota_error = Some(e);
                }
                Err(AttemptError::Fatal(e)) => return Err(FallbackError::Generate(e)),
            }
        }

        match last_quota_error {
            Some(last) => Err(FallbackError::Exhausted { tried, last }),
            None => Err(FallbackError::NoCandidates),
        }
    }

    async fn attempt<F>(&self, model: &str, prompt: &str, on_chunk: &mut F) -> Result<String, AttemptError>
    where
        F: FnMut(&str),
    {
        let mut stream = self
            .generator
            .generate(model, prompt)
            .await
            .map_err(AttemptError::classify)?;
        let mut text = String::new();

        while let Some(chunk) = stream.next().await {
            match chunk {
                Ok(chunk) => {
                    on_chunk(&chunk);
                    text.push_str(&chunk);
                }
                // Output already reached the caller, another model would splice two answers
                Err(e) if !text.is_empty() => return Err(AttemptError::Fatal(e)),
                Err(e) => return Err(AttemptError::classify(e)),
            }
        }

        Ok(text)
    }
}

enum AttemptError {
    Retryable(GenerateError),
    Fatal(GenerateError),
}

impl AttemptError {
    fn classify(error: GenerateError) -> Self {
        if error.is_quota_exhausted() {
            Self::Retryable(error)
        } else {
            Self::Fatal(error)
        }
    }
}
