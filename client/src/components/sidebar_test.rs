use super::*;

#[test]
fn recent_chats_are_fixed_placeholders() {
    assert_eq!(RECENT_CHATS.len(), 3);
    assert_eq!(RECENT_CHATS[0], "AI Writing Assistant");
}

#[test]
fn avatar_initial_uppercases_first_letter() {
    assert_eq!(avatar_initial("alice"), "A");
    assert_eq!(avatar_initial("Bob Jones"), "B");
}

#[test]
fn avatar_initial_of_empty_name_is_empty() {
    assert_eq!(avatar_initial(""), "");
}
