//! Slide-out side panel with the user card, canned navigation and logout.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::state::ui::UiState;

/// Placeholder entries for the "Recent Chats" list. They have no behavior.
pub const RECENT_CHATS: [&str; 3] = ["AI Writing Assistant", "Project Planning", "Learning JavaScript"];

/// Single-letter avatar for a display name.
pub fn avatar_initial(name: &str) -> String {
    name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
}

/// Side panel. `on_logout` fires when the Logout entry is activated.
#[component]
pub fn Sidebar(on_logout: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let user_name = move || session.get().user.map(|u| u.name).unwrap_or_default();
    let user_email = move || session.get().user.map(|u| u.email).unwrap_or_default();

    view! {
        <aside class="sidebar" class:sidebar--open=move || ui.get().sidebar_open>
            <div class="sidebar__user">
                <div class="sidebar__avatar">{move || avatar_initial(&user_name())}</div>
                <div class="sidebar__identity">
                    <p class="sidebar__name">{user_name}</p>
                    <p class="sidebar__email">{user_email}</p>
                </div>
            </div>

            <button class="sidebar__new-chat" type="button">"+ New Chat"</button>

            <nav class="sidebar__recent">
                <h2 class="sidebar__heading">"Recent Chats"</h2>
                {RECENT_CHATS
                    .iter()
                    .map(|title| view! { <button class="sidebar__item" type="button">{*title}</button> })
                    .collect::<Vec<_>>()}
            </nav>

            <div class="sidebar__footer">
                <button class="sidebar__item" type="button">"Settings"</button>
                <button class="sidebar__item" type="button">"Help & Support"</button>
                <button
                    class="sidebar__item sidebar__item--logout"
                    type="button"
                    on:click=move |_| on_logout.run(())
                >
                    "Logout"
                </button>
            </div>
        </aside>
    }
}
