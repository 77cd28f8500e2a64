//! Shared DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! `ChatRequest` mirrors the body accepted by the server's `POST /chat`
//! handler, so both sides agree on the field name without a shared crate.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in user held by the session holder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User identifier. Mocked sessions always use `"1"`.
    pub id: String,
    /// Display name shown in the header and side panel.
    pub name: String,
    /// Email address as entered on the auth form.
    pub email: String,
}

/// Body of `POST /chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Raw composer text, untrimmed.
    pub message: String,
}
