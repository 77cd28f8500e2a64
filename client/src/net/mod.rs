//! Networking modules for the chat responder.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single outbound HTTP exchange per chat submission and
//! `types` defines the shared wire schema.

pub mod api;
pub mod types;
