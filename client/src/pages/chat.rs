//! Chat shell: side panel, greeting header and the conversation area.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Signed-out visitors are sent to
//! `/login`; logging out from the side panel triggers the same redirect and
//! discards the transcript.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::chat_area::ChatArea;
use crate::components::sidebar::Sidebar;
use crate::state::chat::ChatState;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::auth::install_unauth_redirect;

/// Sign out and start the next session from a clean shell: a freshly
/// seeded transcript and a closed side panel.
pub fn log_out(session: &mut SessionState, chat: &mut ChatState, ui: &mut UiState) {
    ui.close_sidebar();
    *chat = ChatState::default();
    session.sign_out();
}

/// Header greeting for the signed-in user.
pub fn welcome_line(name: &str) -> String {
    format!("Welcome back, {name}!")
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    install_unauth_redirect(session, use_navigate());

    let on_logout = Callback::new(move |()| {
        ui.update(|u| chat.update(|c| session.update(|s| log_out(s, c, u))));
    });

    let greeting = move || {
        session
            .get()
            .user
            .map(|u| welcome_line(&u.name))
            .unwrap_or_default()
    };

    view! {
        <Show
            when=move || session.get().user.is_some()
            fallback=|| view! { <div class="chat-page chat-page--empty"><p>"Redirecting to login..."</p></div> }
        >
            <div class="chat-page">
                <Sidebar on_logout/>

                <Show when=move || ui.get().sidebar_open>
                    <div class="chat-page__overlay" on:click=move |_| ui.update(UiState::close_sidebar)></div>
                </Show>

                <div class="chat-page__main">
                    <header class="chat-page__header">
                        <button
                            class="chat-page__menu"
                            title="Toggle sidebar"
                            on:click=move |_| ui.update(UiState::toggle_sidebar)
                        >
                            {move || if ui.get().sidebar_open { "✕" } else { "☰" }}
                        </button>
                        <div>
                            <h1 class="chat-page__title">{greeting}</h1>
                            <p class="chat-page__subtitle">"How can I assist you today?"</p>
                        </div>
                    </header>

                    <ChatArea/>
                </div>
            </div>
        </Show>
    }
}
