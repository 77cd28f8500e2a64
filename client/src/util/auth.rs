//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The chat shell and the auth page mirror each other: the shell sends
//! signed-out visitors to `/login`, and the auth page sends signed-in users
//! back to `/`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// True once no login is in flight and nobody is signed in.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.loading && state.user.is_none()
}

/// True when a user is present and the auth page should step aside.
pub fn should_redirect_authed(state: &SessionState) -> bool {
    state.user.is_some()
}

/// Redirect to `/login` whenever the session is settled and empty.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Redirect to the chat shell as soon as a user is signed in.
pub fn install_authed_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_authed(&session.get()) {
            navigate("/", NavigateOptions::default());
        }
    });
}
