use super::*;

fn user_texts(state: &ChatState) -> Vec<&str> {
    state.messages.iter().filter(|m| m.is_user()).map(|m| m.content.as_str()).collect()
}

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_default_seeds_greeting() {
    let state = ChatState::default();
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].role, Role::Assistant);
    assert_eq!(state.messages[0].content, GREETING_TEXT);
    assert!(!state.is_responding());
    assert_eq!(state.phase, ExchangePhase::Idle);
}

#[test]
fn exchange_phase_default_is_idle() {
    assert_eq!(ExchangePhase::default(), ExchangePhase::Idle);
}

// =============================================================
// begin_exchange
// =============================================================

#[test]
fn begin_exchange_appends_exact_user_text() {
    let mut state = ChatState::default();
    let submission = state.begin_exchange("  hello there\n").unwrap();
    assert_eq!(submission.message, "  hello there\n");

    let last = state.messages.last().unwrap();
    assert_eq!(last.role, Role::User);
    assert_eq!(last.content, "  hello there\n");
    assert!(state.is_responding());
    assert_eq!(state.phase, ExchangePhase::Sending);
}

#[test]
fn begin_exchange_rejects_empty_and_whitespace() {
    let mut state = ChatState::default();
    for input in ["", " ", "\n\t  "] {
        assert!(state.begin_exchange(input).is_none(), "{input:?}");
    }
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.in_flight, 0);
    assert_eq!(state.phase, ExchangePhase::Idle);
}

#[test]
fn begin_exchange_preserves_submission_order() {
    let mut state = ChatState::default();
    for text in ["first", "second", "third"] {
        state.begin_exchange(text);
    }
    assert_eq!(user_texts(&state), vec!["first", "second", "third"]);
    assert_eq!(state.in_flight, 3);
}

#[test]
fn message_ids_are_distinct() {
    let mut state = ChatState::default();
    state.begin_exchange("a");
    state.begin_exchange("b");
    assert_ne!(state.messages[1].id, state.messages[2].id);
}

// =============================================================
// finish_exchange
// =============================================================

#[test]
fn finish_exchange_success_appends_one_reply() {
    let mut state = ChatState::default();
    state.begin_exchange("hi");
    let phase = state.finish_exchange(Ok("Hello, how can I help?".to_owned()));

    assert_eq!(phase, ExchangePhase::Delivered);
    assert_eq!(state.messages.len(), 3);
    let last = state.messages.last().unwrap();
    assert_eq!(last.role, Role::Assistant);
    assert_eq!(last.content, "Hello, how can I help?");
    assert!(!state.is_responding());
    assert_eq!(state.phase, ExchangePhase::Delivered);
}

#[test]
fn finish_exchange_failure_appends_fixed_error_text() {
    let mut state = ChatState::default();
    state.begin_exchange("hi");
    let phase = state.finish_exchange(Err(ExchangeError::Request("network down".to_owned())));

    assert_eq!(phase, ExchangePhase::Failed);
    assert_eq!(state.messages.len(), 3);
    let last = state.messages.last().unwrap();
    assert!(!last.is_user());
    assert_eq!(last.content, EXCHANGE_FAILED_TEXT);
}

#[test]
fn every_error_variant_collapses_to_same_text() {
    for err in [
        ExchangeError::Request("x".to_owned()),
        ExchangeError::Status(500),
        ExchangeError::Body("y".to_owned()),
    ] {
        let mut state = ChatState::default();
        state.begin_exchange("hi");
        state.finish_exchange(Err(err));
        assert_eq!(state.messages.last().unwrap().content, EXCHANGE_FAILED_TEXT);
    }
}

#[test]
fn overlapping_exchanges_keep_indicator_until_last_reply() {
    let mut state = ChatState::default();
    state.begin_exchange("one");
    state.begin_exchange("two");

    // Second request answers first.
    state.finish_exchange(Ok("reply two".to_owned()));
    assert!(state.is_responding());
    assert_eq!(state.phase, ExchangePhase::Sending);

    state.finish_exchange(Ok("reply one".to_owned()));
    assert!(!state.is_responding());

    let contents: Vec<&str> = state.messages.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents[1..].to_vec(), vec!["one", "two", "reply two", "reply one"]);
}

#[test]
fn transcript_only_grows() {
    let mut state = ChatState::default();
    let mut previous = state.messages.clone();
    for round in 0..3 {
        state.begin_exchange(&format!("msg {round}"));
        state.finish_exchange(Ok(format!("reply {round}")));
        assert!(state.messages.len() > previous.len());
        assert!(state.messages[..previous.len()] == previous[..]);
        previous = state.messages.clone();
    }
}

#[test]
fn fresh_transcript_rejects_replies_for_the_old_one() {
    let mut old = ChatState::default();
    let submission = old.begin_exchange("before logout").unwrap();
    assert!(old.accepts(&submission));

    let fresh = ChatState::default();
    assert_ne!(fresh.transcript_id, old.transcript_id);
    assert!(!fresh.accepts(&submission));
}
