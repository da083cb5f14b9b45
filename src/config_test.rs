#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_constants() {
    let config = PageConfig::default();
    assert_eq!(config.section_lookahead_px, 150.0);
    assert_eq!(config.navbar_scrolled_px, 50.0);
    assert_eq!(config.magnetic_strength, 0.1);
    assert_eq!(config.magnetic_scale, 1.02);
    assert_eq!(config.parallax_damping, 0.5);
    assert_eq!(config.reveal.threshold, 0.1);
    assert_eq!(config.reveal.root_margin, "0px 0px -50px 0px");
    assert_eq!(config.lazy.root_margin, "50px");
}

#[test]
fn blank_json_yields_defaults() {
    let config = PageConfig::from_json("   ").expect("blank config");
    assert_eq!(config, PageConfig::default());
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let config = PageConfig::from_json(
        r#"{"sectionLookaheadPx": 90, "reveal": {"threshold": 0.25, "rootMargin": "0px"}}"#,
    )
    .expect("valid config");
    assert_eq!(config.section_lookahead_px, 90.0);
    assert_eq!(config.reveal.threshold, 0.25);
    assert_eq!(config.reveal.root_margin, "0px");
    assert_eq!(config.navbar_scrolled_px, 50.0);
    assert_eq!(config.lazy.root_margin, "50px");
}

#[test]
fn invalid_json_is_a_config_error() {
    let err = PageConfig::from_json("{not json").expect_err("should fail");
    assert!(matches!(err, PageError::Config(_)));
}

#[test]
fn wrong_field_type_is_a_config_error() {
    assert!(PageConfig::from_json(r#"{"navbarScrolledPx": "fifty"}"#).is_err());
}

#[test]
fn fallback_on_missing_or_invalid_input() {
    assert_eq!(PageConfig::from_json_or_default(None), PageConfig::default());
    assert_eq!(PageConfig::from_json_or_default(Some("[1, 2]")), PageConfig::default());
}

#[test]
fn fallback_keeps_valid_overrides() {
    let config = PageConfig::from_json_or_default(Some(r#"{"magneticStrength": 0.2}"#));
    assert_eq!(config.magnetic_strength, 0.2);
}

#[test]
fn non_object_json_is_a_config_error() {
    for raw in ["[1, 2]", "42", "\"dark\"", "null", "true"] {
        let err = PageConfig::from_json(raw).expect_err(raw);
        assert!(matches!(err, PageError::Config(_)), "{raw}");
    }
}

#[test]
fn out_of_range_threshold_falls_back_to_default_options() {
    let config =
        PageConfig::from_json(r#"{"reveal": {"threshold": 2, "rootMargin": "0px"}}"#).expect("valid json");
    assert_eq!(config.reveal, PageConfig::default().reveal);
}

#[test]
fn unitless_root_margin_falls_back_to_default_options() {
    let config =
        PageConfig::from_json(r#"{"lazy": {"threshold": 0, "rootMargin": "50"}}"#).expect("valid json");
    assert_eq!(config.lazy, PageConfig::default().lazy);
}

#[test]
fn valid_observer_override_is_kept() {
    let config = PageConfig::from_json(r#"{"lazy": {"threshold": 1, "rootMargin": "10px 5%"}}"#)
        .expect("valid json");
    assert_eq!(config.lazy, ObserverOptions::new(1.0, "10px 5%"));
}
