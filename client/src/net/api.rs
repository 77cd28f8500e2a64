//! HTTP helper for the chat responder.
//!
//! Client-side (hydrate): a real `POST` via `gloo-net`.
//! Server-side (SSR): a stub that reports the exchange as failed, since the
//! composer only submits from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode (transport, non-2xx status, unreadable body) is an
//! `ExchangeError`. The transcript collapses all of them into one fixed
//! message, so callers never need to branch on the variant.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use super::types::ChatRequest;

/// Endpoint used when `CHANNA_CHAT_ENDPOINT` is not set at build time.
pub const DEFAULT_CHAT_ENDPOINT: &str = "http://localhost:8000/chat";

/// Errors produced by a single chat exchange.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExchangeError {
    /// The request could not be built or sent.
    #[error("chat request failed: {0}")]
    Request(String),

    /// The responder answered with a non-2xx status.
    #[error("chat request failed: {0}")]
    Status(u16),

    /// The response body could not be read.
    #[error("chat response unreadable: {0}")]
    Body(String),
}

/// Resolve the chat endpoint, preferring the build-time override.
pub fn chat_endpoint() -> &'static str {
    option_env!("CHANNA_CHAT_ENDPOINT").unwrap_or(DEFAULT_CHAT_ENDPOINT)
}

#[cfg(any(test, feature = "hydrate"))]
fn chat_request_body(message: &str) -> ChatRequest {
    ChatRequest { message: message.to_owned() }
}

/// Turn a successful response body into transcript text.
///
/// JSON string bodies are unwrapped, any other JSON value is re-serialized
/// compactly, and bodies that are not JSON are used verbatim.
pub fn reply_text(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::String(text)) => text,
        Ok(value) => value.to_string(),
        Err(_) => body.to_owned(),
    }
}

/// Send one message to the responder and return the reply text.
///
/// # Errors
///
/// Returns an [`ExchangeError`] if the request fails, the responder answers
/// with a non-OK status, or the body cannot be read.
pub async fn send_chat_message(message: &str) -> Result<String, ExchangeError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = chat_request_body(message);
        let resp = gloo_net::http::Request::post(chat_endpoint())
            .header("Content-Type", "application/json")
            .json(&payload)
            .map_err(|e| ExchangeError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ExchangeError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(ExchangeError::Status(resp.status()));
        }
        let body = resp.text().await.map_err(|e| ExchangeError::Body(e.to_string()))?;
        Ok(reply_text(&body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        Err(ExchangeError::Request("not available on server".to_owned()))
    }
}
