//! Local UI chrome state for the chat shell.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`session`,
//! `chat`) so the shell can evolve independently of the exchange logic.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Shell chrome state. The side panel starts collapsed.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub sidebar_open: bool,
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }
}

/// Which field set the auth page shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Signup,
            Self::Signup => Self::Login,
        }
    }

    /// Label of the submit button.
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Signup => "Create Account",
        }
    }

    /// Prompt and link text offering the other mode.
    pub fn switch_prompt(self) -> (&'static str, &'static str) {
        match self {
            Self::Login => ("Don't have an account?", "Sign up"),
            Self::Signup => ("Already have an account?", "Login"),
        }
    }
}
