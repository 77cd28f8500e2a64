use super::*;

#[test]
fn plain_enter_submits() {
    assert_eq!(classify_key("Enter", Modifiers::default(), false), ComposerKey::Submit);
}

#[test]
fn shift_enter_is_newline() {
    let mods = Modifiers { shift: true, ..Modifiers::default() };
    assert_eq!(classify_key("Enter", mods, false), ComposerKey::Newline);
}

#[test]
fn other_modifiers_do_not_submit() {
    for mods in [
        Modifiers { ctrl: true, ..Modifiers::default() },
        Modifiers { alt: true, ..Modifiers::default() },
        Modifiers { meta: true, ..Modifiers::default() },
    ] {
        assert_eq!(classify_key("Enter", mods, false), ComposerKey::Newline, "{mods:?}");
    }
}

#[test]
fn non_enter_keys_are_ignored() {
    assert_eq!(classify_key("a", Modifiers::default(), false), ComposerKey::Other);
    assert_eq!(classify_key("Tab", Modifiers { shift: true, ..Modifiers::default() }, false), ComposerKey::Other);
}

#[test]
fn enter_during_ime_composition_does_not_submit() {
    assert_eq!(classify_key("Enter", Modifiers::default(), true), ComposerKey::Other);
    let mods = Modifiers { shift: true, ..Modifiers::default() };
    assert_eq!(classify_key("Enter", mods, true), ComposerKey::Other);
}
