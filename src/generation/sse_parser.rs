//! Server-Sent Events (SSE) parser for Gemini `streamGenerateContent` responses.

use bytes::Bytes;
use futures_util::Stream;
use serde::Deserialize;

use super::error::{ApiErrorBody, GenerateError, classify_stream_error};

/// One streamed `GenerateContentResponse` (or an error object).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StreamResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
    #[serde(default)]
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

/// Converts a raw SSE byte stream into a stream of text chunks.
///
/// Handles buffering across network chunks, CRLF line endings and
/// error objects embedded in the stream. The stream ends when the
/// underlying body ends.
pub fn sse_to_text_stream(
    model: String,
    byte_stream: impl Stream<Item = reqwest::Result<Bytes>> + Send + 'static,
) -> impl Stream<Item = Result<String, GenerateError>> + Send {
    async_stream::stream! {
        use futures_util::StreamExt;

        let mut byte_stream = std::pin::pin!(byte_stream);
        // Raw bytes: a multi-byte character may straddle two network chunks
        let mut buffer: Vec<u8> = Vec::new();

        while let Some(chunk_result) = byte_stream.next().await {
            let chunk = match chunk_result {
                Ok(c) => c,
                Err(e) => {
                    yield Err(GenerateError::Transport(e));
                    return;
                }
            };

            buffer.extend_from_slice(&chunk);

            while let Some(line_end) = buffer.iter().position(|&b| b == b'\n') {
                let line: Vec<u8> = buffer.drain(..=line_end).collect();
                let line = String::from_utf8_lossy(&line);

                match parse_sse_line(&model, line.trim()) {
                    Some(Ok(content)) => yield Ok(content),
                    Some(Err(e)) => {
                        yield Err(e);
                        return;
                    }
                    None => {}
                }
            }
        }

        // A final event without a trailing newline
        if let Some(item) = parse_sse_line(&model, String::from_utf8_lossy(&buffer).trim()) {
            yield item;
        }
    }
}

/// Parses a single SSE line.
///
/// Returns `None` for non-data lines, unparsable JSON and events without
/// text, `Some(Ok(text))` for content and `Some(Err(..))` for error or
/// block events.
fn parse_sse_line(model: &str, line: &str) -> Option<Result<String, GenerateError>> {
    let json_str = line.strip_prefix("data:")?.trim_start();

    let response = serde_json::from_str::<StreamResponse>(json_str).ok()?;

    if let Some(error) = response.error {
        return Some(Err(classify_stream_error(model, error)));
    }

    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Some(Err(GenerateError::Blocked(reason)));
    }

    let content: String = response
        .candidates
        .into_iter()
        .filter_map(|c| c.content)
        .flat_map(|c| c.parts)
        .filter_map(|p| p.text)
        .collect();

    if content.is_empty() {
        None
    } else {
        Some(Ok(content))
    }
}
