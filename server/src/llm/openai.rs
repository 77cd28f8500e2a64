//! OpenAI-compatible chat completions client with streamed output.
//!
//! Talks to `{base_url}/chat/completions` with `stream: true` and turns the
//! server-sent-events body into a [`TextStream`] of content deltas.

use std::time::Duration;

use futures::{Stream, StreamExt};
use serde::Serialize;
use serde_json::Value;

use super::config::{LlmConfig, Sampling};
use super::types::{LlmChat, LlmError, Message, TextStream};

pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    sampling: Sampling,
}

impl OpenAiClient {
    /// Build a client from parsed config.
    ///
    /// `timeouts.request_secs` bounds each read, not the whole response, so a
    /// completion may stream for as long as deltas keep arriving.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .read_timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            api_key: config.api_key,
            base_url: config.base_url,
            model: config.model,
            sampling: config.sampling,
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl LlmChat for OpenAiClient {
    async fn stream_chat(&self, system: &str, messages: &[Message]) -> Result<TextStream, LlmError> {
        let msgs = build_messages(system, messages);
        let body = CcRequest {
            model: &self.model,
            messages: &msgs,
            temperature: self.sampling.temperature,
            top_p: self.sampling.top_p,
            max_tokens: self.sampling.max_tokens,
            stream: true,
        };

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::ApiResponse { status: status.as_u16(), body });
        }

        let bytes = response.bytes_stream();
        Ok(text_stream(async_stream::try_stream! {
            let mut decoder = SseDecoder::default();
            futures::pin_mut!(bytes);
            'read: while let Some(chunk) = bytes.next().await {
                let chunk = chunk.map_err(|e| LlmError::ApiRequest(e.to_string()))?;
                for data in decoder.push(&chunk) {
                    match parse_data(&data)? {
                        StreamEvent::Delta(text) => yield text,
                        StreamEvent::Done => break 'read,
                        StreamEvent::Empty => {}
                    }
                }
            }
        }))
    }
}

fn text_stream<S>(stream: S) -> TextStream
where
    S: Stream<Item = Result<String, LlmError>> + Send + 'static,
{
    Box::pin(stream)
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct CcRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
    stream: bool,
}

fn build_messages(system: &str, messages: &[Message]) -> Vec<Message> {
    let mut out = Vec::with_capacity(messages.len() + 1);
    if !system.trim().is_empty() {
        out.push(Message::system(system));
    }
    out.extend_from_slice(messages);
    out
}

// =============================================================================
// SSE DECODING
// =============================================================================

/// Reassembles server-sent-event frames across network chunk boundaries.
#[derive(Debug, Default)]
pub(crate) struct SseDecoder {
    buf: Vec<u8>,
}

impl SseDecoder {
    /// Feed raw bytes; returns the `data:` payloads of every frame completed
    /// by this chunk, in order. Partial frames stay buffered.
    pub(crate) fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buf.extend_from_slice(chunk);
        let mut out = Vec::new();
        while let Some((pos, sep_len)) = find_frame_end(&self.buf) {
            let frame = self.buf.drain(..pos + sep_len).collect::<Vec<_>>();
            let text = String::from_utf8_lossy(&frame[..pos]);
            for line in text.lines() {
                if let Some(data) = line.trim().strip_prefix("data:") {
                    out.push(data.trim().to_owned());
                }
            }
        }
        out
    }
}

/// Position and length of the first blank-line frame separator.
fn find_frame_end(buf: &[u8]) -> Option<(usize, usize)> {
    let lf = buf.windows(2).position(|w| w == b"\n\n").map(|pos| (pos, 2));
    let crlf = buf.windows(4).position(|w| w == b"\r\n\r\n").map(|pos| (pos, 4));
    match (lf, crlf) {
        (Some(a), Some(b)) => Some(if a.0 <= b.0 { a } else { b }),
        (a, b) => a.or(b),
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum StreamEvent {
    Delta(String),
    Done,
    Empty,
}

/// Decode one `data:` payload of a chat completions stream.
pub(crate) fn parse_data(data: &str) -> Result<StreamEvent, LlmError> {
    if data == "[DONE]" {
        return Ok(StreamEvent::Done);
    }
    let root: Value = serde_json::from_str(data).map_err(|e| LlmError::StreamParse(e.to_string()))?;
    if let Some(err) = root.get("error") {
        let message = err
            .get("message")
            .and_then(Value::as_str)
            .map_or_else(|| err.to_string(), str::to_owned);
        return Err(LlmError::StreamParse(format!("provider error: {message}")));
    }
    let text = root
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|arr| arr.first())
        .and_then(|choice| choice.get("delta"))
        .and_then(|delta| delta.get("content"))
        .and_then(Value::as_str)
        .unwrap_or_default();
    if text.is_empty() {
        Ok(StreamEvent::Empty)
    } else {
        Ok(StreamEvent::Delta(text.to_owned()))
    }
}

#[cfg(test)]
#[path = "openai_test.rs"]
mod tests;
