//! Chat transcript and the per-submission exchange state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! The transcript is append-only and ordered by insertion. Each submission
//! moves `Idle -> Sending -> {Delivered, Failed}`: the user message is
//! appended when sending starts and exactly one assistant message (reply or
//! fixed error text) is appended when it finishes.
//!
//! Overlapping submissions are allowed. Replies land in completion order and
//! the "responding" indicator stays up while any exchange is in flight.
//! Logout replaces the whole transcript; replies still in flight for the old
//! one are discarded.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::api::ExchangeError;
use crate::util::clock::now_ms;

/// Greeting that seeds every new transcript.
pub const GREETING_TEXT: &str =
    "Hello! I'm Channa AI, your intelligent conversation companion. How can I help you today?";

/// Assistant text appended in place of a reply when an exchange fails.
pub const EXCHANGE_FAILED_TEXT: &str = "Sorry, there was an error connecting to the AI service.";

/// Who authored a transcript message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    /// Creation time in milliseconds since the Unix epoch.
    pub timestamp: f64,
}

impl ChatMessage {
    fn new(role: Role, content: String) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), role, content, timestamp: now_ms() }
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

/// Where a submission is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExchangePhase {
    #[default]
    Idle,
    Sending,
    Delivered,
    Failed,
}

/// A submission accepted by [`ChatState::begin_exchange`], ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    /// Raw composer text, exactly as typed.
    pub message: String,
    /// Transcript the reply belongs to.
    pub transcript_id: String,
}

/// Transcript plus the bookkeeping for exchanges in flight.
#[derive(Clone, Debug)]
pub struct ChatState {
    /// Fresh for every transcript, so replies to a discarded one are dropped.
    pub transcript_id: String,
    pub messages: Vec<ChatMessage>,
    /// Exchanges still awaiting a reply.
    pub in_flight: usize,
    /// `Sending` while anything is in flight, else the last outcome.
    pub phase: ExchangePhase,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            transcript_id: uuid::Uuid::new_v4().to_string(),
            messages: vec![ChatMessage::new(Role::Assistant, GREETING_TEXT.to_owned())],
            in_flight: 0,
            phase: ExchangePhase::Idle,
        }
    }
}

impl ChatState {
    /// Start an exchange for `input`.
    ///
    /// Returns `None` (and changes nothing) when the trimmed input is empty.
    /// Otherwise appends the untrimmed text as a user message, marks the
    /// exchange in flight and hands back the text to send.
    pub fn begin_exchange(&mut self, input: &str) -> Option<Submission> {
        if input.trim().is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::new(Role::User, input.to_owned()));
        self.in_flight += 1;
        self.phase = ExchangePhase::Sending;
        Some(Submission { message: input.to_owned(), transcript_id: self.transcript_id.clone() })
    }

    /// Finish an exchange with the responder's outcome.
    pub fn finish_exchange(&mut self, outcome: Result<String, ExchangeError>) -> ExchangePhase {
        self.in_flight = self.in_flight.saturating_sub(1);
        let (content, phase) = match outcome {
            Ok(reply) => (reply, ExchangePhase::Delivered),
            Err(_) => (EXCHANGE_FAILED_TEXT.to_owned(), ExchangePhase::Failed),
        };
        self.messages.push(ChatMessage::new(Role::Assistant, content));
        self.phase = if self.is_responding() { ExchangePhase::Sending } else { phase };
        phase
    }

    /// Whether `submission` was started on this transcript.
    pub fn accepts(&self, submission: &Submission) -> bool {
        submission.transcript_id == self.transcript_id
    }

    /// Whether the "remote is responding" indicator should show.
    pub fn is_responding(&self) -> bool {
        self.in_flight > 0
    }
}
