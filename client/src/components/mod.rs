//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat shell chrome and read/write shared state from
//! Leptos context providers.

pub mod chat_area;
pub mod sidebar;
