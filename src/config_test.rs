#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_page_templates() {
    let config = PageConfig::default();
    assert_eq!(config.page_size, 10);
    assert_eq!(config.back_to_top_threshold, 600.0);
    assert_eq!(config.stagger_ms, 60);
    assert_eq!(config.endpoint, "/filter-posts");
    assert_eq!(config.storage_key, "wf-theme");
}

#[test]
fn partial_override_keeps_remaining_defaults() {
    let config = PageConfig::from_json(r#"{"page_size": 6}"#).unwrap();
    assert_eq!(config.page_size, 6);
    assert_eq!(config.stagger_ms, 60);
    assert_eq!(config.endpoint, "/filter-posts");
}

#[test]
fn zero_page_size_is_rejected() {
    let err = PageConfig::from_json(r#"{"page_size": 0}"#).unwrap_err();
    assert!(matches!(err, ClientError::Config(_)));
}

#[test]
fn empty_endpoint_is_rejected() {
    assert!(PageConfig::from_json(r#"{"endpoint": "  "}"#).is_err());
}

#[test]
fn malformed_json_falls_back_to_defaults() {
    assert_eq!(PageConfig::from_json_or_default(Some("{not json")), PageConfig::default());
}

#[test]
fn missing_or_blank_document_uses_defaults() {
    assert_eq!(PageConfig::from_json_or_default(None), PageConfig::default());
    assert_eq!(PageConfig::from_json_or_default(Some("   ")), PageConfig::default());
}

#[test]
fn stagger_converts_to_duration() {
    let config = PageConfig { stagger_ms: 45, ..PageConfig::default() };
    assert_eq!(config.stagger(), Duration::from_millis(45));
}
