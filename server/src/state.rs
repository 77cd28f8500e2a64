//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the optional LLM client and the system prompt used for every
//! `/chat` completion. No conversation state lives on the server.

use std::sync::Arc;

use crate::llm::LlmChat;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    /// Optional LLM client. `None` if LLM env vars are not configured.
    pub llm: Option<Arc<dyn LlmChat>>,
    pub system_prompt: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn LlmChat>>, system_prompt: impl Into<Arc<str>>) -> Self {
        Self { llm, system_prompt: system_prompt.into() }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Mutex;

    use super::*;
    use crate::llm::types::TextStream;
    use crate::llm::{LlmError, Message};

    /// Scripted LLM: records each call and replays fixed deltas.
    #[derive(Default)]
    pub struct MockLlm {
        /// Fail before streaming with `ApiRequest(start_error)`.
        pub start_error: Option<String>,
        /// Deltas to stream; `Err` entries become `ApiRequest` errors.
        pub chunks: Vec<Result<String, String>>,
        pub calls: Mutex<Vec<(String, Vec<Message>)>>,
    }

    impl MockLlm {
        #[must_use]
        pub fn streaming(chunks: &[&str]) -> Self {
            Self { chunks: chunks.iter().map(|c| Ok((*c).to_owned())).collect(), ..Self::default() }
        }

        #[must_use]
        pub fn failing(error: &str) -> Self {
            Self { start_error: Some(error.to_owned()), ..Self::default() }
        }
    }

    #[async_trait::async_trait]
    impl LlmChat for MockLlm {
        async fn stream_chat(&self, system: &str, messages: &[Message]) -> Result<TextStream, LlmError> {
            self.calls
                .lock()
                .unwrap()
                .push((system.to_owned(), messages.to_vec()));
            if let Some(error) = &self.start_error {
                return Err(LlmError::ApiRequest(error.clone()));
            }
            let items: Vec<Result<String, LlmError>> = self
                .chunks
                .iter()
                .cloned()
                .map(|c| c.map_err(LlmError::ApiRequest))
                .collect();
            Ok(Box::pin(futures::stream::iter(items)))
        }
    }

    /// App state without an LLM client.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(None, "You are a test bot.")
    }

    /// App state backed by a mock LLM.
    #[must_use]
    pub fn test_app_state_with_llm(llm: Arc<dyn LlmChat>) -> AppState {
        AppState::new(Some(llm), "You are a test bot.")
    }
}
