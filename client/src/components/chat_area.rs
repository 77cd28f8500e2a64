//! Conversation area: transcript, typing indicator and the composer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and mutates the shared `ChatState` transcript. Each send appends the
//! user's line right away and spawns one `/chat` exchange; replies are appended
//! in the order they complete, so overlapping sends are allowed.

#[cfg(test)]
#[path = "chat_area_test.rs"]
mod chat_area_test;

use leptos::prelude::*;

use crate::state::chat::{ChatMessage, ChatState};
use crate::util::clock::format_time;
use crate::util::keys::{ComposerKey, Modifiers, classify_key};

/// Shown when the voice input button is pressed.
pub const VOICE_NOTICE: &str = "Speech-to-text functionality will be implemented in a future update!";

/// Composer max height in pixels before the textarea starts scrolling.
const COMPOSER_MAX_HEIGHT_PX: i32 = 200;

/// Whether the composer holds anything worth sending.
pub fn can_send(input: &str) -> bool {
    !input.trim().is_empty()
}

/// Height the composer should take for a given content height.
pub fn composer_height(scroll_height: i32) -> i32 {
    scroll_height.min(COMPOSER_MAX_HEIGHT_PX)
}

/// Resize the composer to its content height, capped at the max.
///
/// `HtmlElement::style` is called by path: the Leptos prelude's `ElementExt`
/// also has a `style` method, which wins method resolution.
#[cfg(feature = "hydrate")]
pub fn fit_to_content(el: &web_sys::HtmlElement) {
    let style = web_sys::HtmlElement::style(el);
    let _ = style.set_property("height", "auto");
    let height = composer_height(el.scroll_height());
    let _ = style.set_property("height", &format!("{height}px"));
}

#[component]
pub fn ChatArea() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Textarea>::new();

    Effect::new(move || {
        let state = chat.get();
        let _ = state.messages.len();
        let _ = state.in_flight;

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    // Grow the composer with its content. Re-runs when the input is cleared.
    Effect::new(move || {
        let _ = input.get();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = input_ref.get() {
                fit_to_content(&el);
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();
        let Some(submission) = chat.try_update(|c| c.begin_exchange(&text)).flatten() else {
            return;
        };
        input.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::send_chat_message(&submission.message).await;
            if let Err(e) = &outcome {
                log::warn!("chat exchange failed: {e}");
            }
            chat.update(|c| {
                if c.accepts(&submission) {
                    let phase = c.finish_exchange(outcome);
                    log::debug!("chat exchange finished: {phase:?}");
                } else {
                    log::debug!("dropping reply for a discarded transcript");
                }
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = submission;
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if classify_key(&ev.key(), Modifiers::from_event(&ev), ev.is_composing()) == ComposerKey::Submit {
            ev.prevent_default();
            do_send();
        }
    };

    let on_voice = move |_| {
        #[cfg(feature = "hydrate")]
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(VOICE_NOTICE);
        }
    };

    view! {
        <section class="chat-area">
            <div class="chat-area__messages" node_ref=messages_ref>
                <For
                    each=move || chat.get().messages
                    key=|msg| msg.id.clone()
                    children=move |msg: ChatMessage| view! { <MessageRow msg/> }
                />

                <Show when=move || chat.get().is_responding()>
                    <div class="chat-area__row chat-area__row--assistant">
                        <div class="chat-area__avatar">"AI"</div>
                        <div class="chat-area__bubble chat-area__typing" aria-label="Assistant is typing">
                            <span class="chat-area__dot"></span>
                            <span class="chat-area__dot"></span>
                            <span class="chat-area__dot"></span>
                        </div>
                    </div>
                </Show>
            </div>

            <div class="chat-area__composer">
                <div class="chat-area__input-row">
                    <textarea
                        class="chat-area__input"
                        rows="1"
                        placeholder="Type your message here..."
                        node_ref=input_ref
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    ></textarea>
                    <button class="chat-area__voice" type="button" title="Voice input" on:click=on_voice>
                        "🎤"
                    </button>
                    <button
                        class="chat-area__send"
                        type="button"
                        title="Send message"
                        disabled=move || !can_send(&input.get())
                        on:click=move |_| do_send()
                    >
                        "➤"
                    </button>
                </div>
                <p class="chat-area__hint">"Press Enter to send, Shift+Enter for new line"</p>
            </div>
        </section>
    }
}

#[component]
fn MessageRow(msg: ChatMessage) -> impl IntoView {
    let is_user = msg.is_user();
    let time = format_time(msg.timestamp);

    view! {
        <div
            class="chat-area__row"
            class:chat-area__row--user=is_user
            class:chat-area__row--assistant={!is_user}
        >
            <div class="chat-area__avatar">{if is_user { "You" } else { "AI" }}</div>
            <div class="chat-area__bubble">
                <p class="chat-area__content">{msg.content}</p>
                <span class="chat-area__time">{time}</span>
            </div>
        </div>
    }
}
