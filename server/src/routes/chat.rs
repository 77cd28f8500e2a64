//! `/chat` responder: streams an LLM completion back as plain text.
//!
//! Provider failures never become HTTP errors here. They are logged and
//! turned into a reply line, so the caller always receives a 200 with text.

use std::convert::Infallible;
use std::fmt::Display;
use std::sync::Arc;

use axum::Json;
use axum::body::Body;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use futures::{Stream, StreamExt};
use serde::Deserialize;

use crate::llm::{LlmChat, LlmError, Message};
use crate::state::AppState;

pub const ERROR_REPLY_PREFIX: &str = "Sorry, there was an error connecting to the AI service.";
pub const EMPTY_REPLY: &str = "Sorry, no response.";

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Reply line for a failed completion.
pub fn error_reply(err: &impl Display) -> String {
    format!("{ERROR_REPLY_PREFIX} ({err})")
}

/// `POST /chat`
pub async fn chat(State(state): State<AppState>, Json(req): Json<ChatRequest>) -> Response {
    tracing::debug!(chars = req.message.len(), "chat request");
    let stream = reply_stream(state.llm.clone(), state.system_prompt.clone(), req.message);
    let body = Body::from_stream(stream.map(Ok::<_, Infallible>));
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response()
}

/// Text chunks for one `/chat` reply, in order.
///
/// Non-empty deltas are forwarded as they arrive. The first provider error
/// ends the reply with [`error_reply`]; a completion with no text yields
/// [`EMPTY_REPLY`].
pub fn reply_stream(
    llm: Option<Arc<dyn LlmChat>>,
    system_prompt: Arc<str>,
    message: String,
) -> impl Stream<Item = String> + Send + 'static {
    async_stream::stream! {
        let mut sent = false;
        match llm {
            None => {
                tracing::warn!("chat request received but LLM is not configured");
                yield error_reply(&LlmError::NotConfigured);
                sent = true;
            }
            Some(llm) => {
                let messages = [Message::user(message)];
                match llm.stream_chat(&system_prompt, &messages).await {
                    Err(e) => {
                        tracing::error!(error = %e, "chat completion failed to start");
                        yield error_reply(&e);
                        sent = true;
                    }
                    Ok(mut deltas) => {
                        while let Some(item) = deltas.next().await {
                            match item {
                                Ok(text) if text.is_empty() => {}
                                Ok(text) => {
                                    sent = true;
                                    yield text;
                                }
                                Err(e) => {
                                    tracing::error!(error = %e, "chat completion stream failed");
                                    yield error_reply(&e);
                                    sent = true;
                                    break;
                                }
                            }
                        }
                    }
                }
            }
        }
        if !sent {
            yield EMPTY_REPLY.to_owned();
        }
    }
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
