//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `chat`, `ui`) so individual
//! components can depend on small focused models. The root component wraps
//! each in an `RwSignal` and provides it as context.

pub mod chat;
pub mod session;
pub mod ui;
