//! Remote text generation with ordered model fallback.

mod client;
mod error;
mod fallback;
mod sse_parser;

pub use client::{DEFAULT_ENDPOINT, GeminiClient, Generate, TextStream};
pub use error::{FallbackError, GenerateError};
pub use fallback::{FallbackExecutor, Generation};

#[cfg(test)]
pub(crate) use fallback::FALLBACK_LOG_LEVEL;
#[cfg(test)]
pub(crate) use fallback::tests::{Outcome, ScriptedGenerator};
