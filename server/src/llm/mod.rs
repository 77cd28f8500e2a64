//! LLM: streamed chat completions against an OpenAI-compatible API.
//!
//! DESIGN
//! ======
//! Configuration comes from environment variables. Handlers depend on the
//! [`LlmChat`] trait, so tests swap in a scripted mock for
//! [`openai::OpenAiClient`].

pub mod config;
pub mod openai;
pub mod types;

pub use config::LlmConfig;
pub use openai::OpenAiClient;
pub use types::{LlmChat, LlmError, Message};
