use docchat::infrastructure::observability::{
    DEFAULT_FILTER, REQUEST_ID_HEADER, RequestId, TracingConfig, preview_text,
};

#[test]
fn given_request_id_header_constant_when_accessed_then_returns_correct_value() {
    assert_eq!(REQUEST_ID_HEADER, "x-request-id");
}

#[test]
fn given_request_id_when_cloned_then_equals_original() {
    let original = RequestId("abc".to_string());
    let cloned = original.clone();
    assert_eq!(original.0, cloned.0);
}

#[test]
fn given_default_tracing_config_when_created_then_uses_plain_text_and_default_filter() {
    let config = TracingConfig::default();

    assert!(!config.json_format);
    assert_eq!(config.default_filter, DEFAULT_FILTER);
}

#[test]
fn given_blank_text_when_previewing_then_returns_empty_marker() {
    assert_eq!(preview_text("   \n"), "[EMPTY]");
}

#[test]
fn given_short_text_when_previewing_then_returns_it_trimmed() {
    assert_eq!(preview_text("  hello  "), "hello");
}

#[test]
fn given_long_multibyte_text_when_previewing_then_truncates_on_char_boundary() {
    let text = "你好".repeat(100);

    let preview = preview_text(&text);

    assert!(preview.starts_with(&"你好".repeat(40)));
    assert!(preview.ends_with("... (200 chars total)"));
}

#[test]
fn given_text_with_newlines_when_previewing_then_stays_on_one_line() {
    assert_eq!(preview_text("line one\nline two"), "line one line two");
}
