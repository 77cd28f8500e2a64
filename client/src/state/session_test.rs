use super::*;
use futures::executor::block_on;

// =============================================================
// SessionState
// =============================================================

#[test]
fn session_state_default_no_user() {
    let state = SessionState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn begin_then_sign_in_clears_loading() {
    let mut state = SessionState::default();
    state.begin();
    assert!(state.loading);

    state.sign_in(mock_login_user("alice@example.com", "pw"));
    assert!(!state.loading);
    assert_eq!(state.user.as_ref().map(|u| u.name.as_str()), Some("Alice"));
}

#[test]
fn sign_out_clears_user() {
    let mut state = SessionState::default();
    state.sign_in(mock_signup_user("Bob Jones", "bob@x.com", "pw"));
    state.sign_out();
    assert!(state.user.is_none());
}

// =============================================================
// display_name_from_email
// =============================================================

#[test]
fn display_name_capitalizes_local_part() {
    assert_eq!(display_name_from_email("alice@example.com"), "Alice");
}

#[test]
fn display_name_keeps_rest_of_local_part() {
    assert_eq!(display_name_from_email("mary.ANN@example.com"), "Mary.ANN");
}

#[test]
fn display_name_without_at_uses_whole_input() {
    assert_eq!(display_name_from_email("carol"), "Carol");
}

#[test]
fn display_name_empty_local_part() {
    assert_eq!(display_name_from_email("@example.com"), "");
    assert_eq!(display_name_from_email(""), "");
}

#[test]
fn display_name_upper_cases_non_ascii_first_char() {
    assert_eq!(display_name_from_email("émile@example.fr"), "Émile");
}

// =============================================================
// mocked login / signup
// =============================================================

#[test]
fn login_yields_capitalized_name() {
    let user = block_on(login("alice@example.com", "secret"));
    assert_eq!(user.id, MOCK_USER_ID);
    assert_eq!(user.name, "Alice");
    assert_eq!(user.email, "alice@example.com");
}

#[test]
fn signup_keeps_name_verbatim() {
    let user = block_on(signup("Bob Jones", "bob@x.com", "secret"));
    assert_eq!(user.name, "Bob Jones");
    assert_eq!(user.email, "bob@x.com");
}

#[test]
fn signup_does_not_trim_or_recase_name() {
    let user = mock_signup_user("  lower case  ", "x@y.z", "");
    assert_eq!(user.name, "  lower case  ");
}

#[test]
fn mock_auth_delay_is_one_second() {
    assert_eq!(MOCK_AUTH_DELAY, Duration::from_secs(1));
}
