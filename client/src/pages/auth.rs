//! Auth page with login and signup forms against the mocked session holder.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::User;
use crate::state::session::{self, SessionState};
use crate::state::ui::AuthMode;
use crate::util::auth::install_authed_redirect;

/// A filled-in auth form, ready to hand to the session holder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthRequest {
    Login { email: String, password: String },
    Signup { name: String, email: String, password: String },
}

impl AuthRequest {
    /// Pick the field set that matches `mode`. Values are passed through
    /// untouched; the browser's `required` checks are the only validation.
    pub fn from_form(mode: AuthMode, name: String, email: String, password: String) -> Self {
        match mode {
            AuthMode::Login => Self::Login { email, password },
            AuthMode::Signup => Self::Signup { name, email, password },
        }
    }

    /// Run the mocked login or signup.
    pub async fn perform(self) -> User {
        match self {
            Self::Login { email, password } => session::login(&email, &password).await,
            Self::Signup { name, email, password } => session::signup(&name, &email, &password).await,
        }
    }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_authed_redirect(session, use_navigate());

    let mode = RwSignal::new(AuthMode::default());
    let show_password = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.get_untracked().loading {
            return;
        }
        let request =
            AuthRequest::from_form(mode.get_untracked(), name.get_untracked(), email.get_untracked(), password.get_untracked());
        session.update(SessionState::begin);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let user = request.perform().await;
            log::info!("signed in as {}", user.email);
            session.update(|s| s.sign_in(user));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let busy = move || session.get().loading;
    let is_signup = move || mode.get() == AuthMode::Signup;

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__brand">
                    <div class="auth-card__logo" aria-hidden="true">"✦"</div>
                    <h1>"Channa AI"</h1>
                    <p class="auth-card__subtitle">"Your intelligent conversation companion"</p>
                </div>

                <div class="auth-tabs">
                    <button
                        type="button"
                        class="auth-tabs__tab"
                        class:auth-tabs__tab--active=move || mode.get() == AuthMode::Login
                        on:click=move |_| mode.set(AuthMode::Login)
                    >
                        "Login"
                    </button>
                    <button
                        type="button"
                        class="auth-tabs__tab"
                        class:auth-tabs__tab--active=is_signup
                        on:click=move |_| mode.set(AuthMode::Signup)
                    >
                        "Sign Up"
                    </button>
                </div>

                <form class="auth-form" on:submit=on_submit>
                    <Show when=is_signup>
                        <label class="auth-form__label">
                            "Full Name"
                            <input
                                class="auth-form__input"
                                type="text"
                                required
                                placeholder="Enter your full name"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
                    </Show>

                    <label class="auth-form__label">
                        "Email Address"
                        <input
                            class="auth-form__input"
                            type="email"
                            required
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="auth-form__label">
                        "Password"
                        <div class="auth-form__password">
                            <input
                                class="auth-form__input"
                                type=move || if show_password.get() { "text" } else { "password" }
                                required
                                placeholder="Enter your password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="auth-form__reveal"
                                on:click=move |_| show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </label>

                    <button class="auth-form__submit" type="submit" disabled=busy>
                        <Show
                            when=busy
                            fallback=move || mode.get().submit_label()
                        >
                            <span class="auth-form__spinner" aria-label="Working"></span>
                        </Show>
                    </button>
                </form>

                <p class="auth-card__switch">
                    {move || mode.get().switch_prompt().0}
                    " "
                    <button type="button" class="auth-card__switch-link" on:click=move |_| mode.update(|m| *m = m.toggled())>
                        {move || mode.get().switch_prompt().1}
                    </button>
                </p>
            </div>
        </div>
    }
}
