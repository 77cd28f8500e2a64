use super::*;
use futures::executor::block_on;

#[test]
fn default_endpoint_is_local_responder() {
    assert_eq!(DEFAULT_CHAT_ENDPOINT, "http://localhost:8000/chat");
}

#[test]
fn chat_endpoint_is_an_http_url() {
    assert!(chat_endpoint().starts_with("http"));
}

#[test]
fn chat_request_body_carries_raw_text() {
    let body = chat_request_body("  hello  ");
    assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({ "message": "  hello  " }));
}

// =============================================================
// reply_text
// =============================================================

#[test]
fn reply_text_uses_plain_text_as_is() {
    assert_eq!(reply_text("Hi! How are you feeling today?"), "Hi! How are you feeling today?");
}

#[test]
fn reply_text_unwraps_json_string() {
    assert_eq!(reply_text(r#""quoted reply""#), "quoted reply");
}

#[test]
fn reply_text_serializes_json_object() {
    assert_eq!(reply_text(r#"{ "reply": "hi" }"#), r#"{"reply":"hi"}"#);
    assert_eq!(reply_text("[1, 2]"), "[1,2]");
}

#[test]
fn reply_text_serializes_json_scalars() {
    assert_eq!(reply_text("42"), "42");
    assert_eq!(reply_text("true"), "true");
    assert_eq!(reply_text("null"), "null");
}

#[test]
fn reply_text_keeps_empty_body() {
    assert_eq!(reply_text(""), "");
}

#[test]
fn reply_text_keeps_whitespace_of_non_json_text() {
    assert_eq!(reply_text("  spaced out \n"), "  spaced out \n");
}

// =============================================================
// ExchangeError
// =============================================================

#[test]
fn exchange_error_status_message() {
    assert_eq!(ExchangeError::Status(502).to_string(), "chat request failed: 502");
}

#[test]
fn exchange_error_request_message() {
    let err = ExchangeError::Request("connection refused".to_owned());
    assert_eq!(err.to_string(), "chat request failed: connection refused");
}

#[test]
fn send_chat_message_fails_without_browser() {
    let result = block_on(send_chat_message("hello"));
    assert!(matches!(result, Err(ExchangeError::Request(_))));
}
