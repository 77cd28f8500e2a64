use super::*;

#[test]
fn can_send_rejects_blank_input() {
    assert!(!can_send(""));
    assert!(!can_send("   \n\t"));
}

#[test]
fn can_send_accepts_padded_text() {
    assert!(can_send("  hi  "));
}

#[test]
fn composer_height_is_capped() {
    assert_eq!(composer_height(48), 48);
    assert_eq!(composer_height(200), 200);
    assert_eq!(composer_height(640), 200);
}

#[test]
fn voice_notice_mentions_future_update() {
    assert!(VOICE_NOTICE.contains("future update"));
}

#[cfg(feature = "hydrate")]
#[test]
fn fit_to_content_accepts_textarea_elements() {
    // Type-level check: the browser build must resolve the web-sys `style`.
    let resize: fn(&web_sys::HtmlElement) = fit_to_content;
    let _ = resize;
}
