use super::*;
use crate::net::types::User;
use crate::state::chat::GREETING_TEXT;

#[test]
fn welcome_line_uses_display_name() {
    assert_eq!(welcome_line("Alice"), "Welcome back, Alice!");
}

#[test]
fn welcome_line_keeps_multi_word_names() {
    assert_eq!(welcome_line("Bob Jones"), "Welcome back, Bob Jones!");
}

#[test]
fn log_out_clears_user_transcript_and_panel() {
    let mut session = SessionState::default();
    session.sign_in(User { id: "1".into(), name: "Alice".into(), email: "alice@example.com".into() });
    let mut chat = ChatState::default();
    chat.begin_exchange("private note");
    chat.finish_exchange(Ok("reply".into()));
    let old_transcript = chat.transcript_id.clone();
    let mut ui = UiState { sidebar_open: true };

    log_out(&mut session, &mut chat, &mut ui);

    assert!(session.user.is_none());
    assert!(!ui.sidebar_open);
    assert_eq!(chat.messages.len(), 1);
    assert_eq!(chat.messages[0].content, GREETING_TEXT);
    assert!(!chat.is_responding());
    assert_ne!(chat.transcript_id, old_transcript);
}
