#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn empty_object_yields_defaults() {
    let config = PageConfig::from_json("{}").unwrap();
    assert_eq!(config, PageConfig::default());
}

#[test]
fn defaults_match_stock_markup() {
    let config = PageConfig::default();
    assert_eq!(config.theme_storage_key, "theme-preference");
    assert_eq!(config.nav_open_class, "is-open");
    assert_eq!(config.spy_threshold, 0.4);
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = PageConfig::from_json(r##"{"navigation_selector": "#menu", "spy_threshold": 0.6}"##).unwrap();
    assert_eq!(config.navigation_selector, "#menu");
    assert_eq!(config.spy_threshold, 0.6);
    assert_eq!(config.nav_toggle_selector, ".nav-toggle");
}

#[test]
fn scroll_button_selector_wraps_attribute() {
    let config = PageConfig::default();
    assert_eq!(config.scroll_button_selector(), "[data-scroll-to]");
}

#[test]
fn malformed_json_is_parse_error() {
    let err = PageConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn wrong_field_type_is_parse_error() {
    let err = PageConfig::from_json(r#"{"spy_threshold": "high"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn threshold_above_one_rejected() {
    let err = PageConfig::from_json(r#"{"spy_threshold": 1.5}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Threshold(t) if t == 1.5));
}

#[test]
fn negative_threshold_rejected() {
    let err = PageConfig::from_json(r#"{"spy_threshold": -0.1}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Threshold(_)));
}

#[test]
fn empty_storage_key_rejected() {
    let err = PageConfig::from_json(r#"{"theme_storage_key": ""}"#).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyStorageKey));
    assert_eq!(err.to_string(), "theme storage key must not be empty");
}
