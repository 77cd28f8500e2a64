//! Session holder for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authentication is mocked: login and signup always succeed after a fixed
//! artificial delay, and nothing is persisted. Route guards read this state
//! to decide between the auth view and the chat shell.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::time::Duration;

use crate::net::types::User;
use crate::util::clock::simulate_latency;

/// Identifier assigned to every mocked user.
pub const MOCK_USER_ID: &str = "1";

/// Artificial delay applied to login and signup.
pub const MOCK_AUTH_DELAY: Duration = Duration::from_millis(1000);

/// The signed-in user, if any, and whether a login is in flight.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl SessionState {
    /// Mark a login/signup as in flight.
    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// Store the authenticated user and clear the busy flag.
    pub fn sign_in(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
    }

    /// Drop the current user.
    pub fn sign_out(&mut self) {
        self.user = None;
        self.loading = false;
    }
}

/// Derive a display name from an email address.
///
/// Takes the text before the first `@` (or the whole input when there is
/// none) and upper-cases its first character.
pub fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    let mut chars = local.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Build the user produced by a mocked login. The password is ignored.
pub fn mock_login_user(email: &str, _password: &str) -> User {
    User { id: MOCK_USER_ID.to_owned(), name: display_name_from_email(email), email: email.to_owned() }
}

/// Build the user produced by a mocked signup. The name is kept verbatim.
pub fn mock_signup_user(name: &str, email: &str, _password: &str) -> User {
    User { id: MOCK_USER_ID.to_owned(), name: name.to_owned(), email: email.to_owned() }
}

/// Log in after the simulated round-trip. Never fails.
pub async fn login(email: &str, password: &str) -> User {
    simulate_latency(MOCK_AUTH_DELAY).await;
    mock_login_user(email, password)
}

/// Sign up after the simulated round-trip. Never fails.
pub async fn signup(name: &str, email: &str, password: &str) -> User {
    simulate_latency(MOCK_AUTH_DELAY).await;
    mock_signup_user(name, email, password)
}
