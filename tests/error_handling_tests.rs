//! Error context, suggestions and configuration tests

use pipechan_core::config::{unescape_delimiter, ChannelConfig};
use pipechan_core::error::Error;

#[test]
fn test_error_with_context() {
    let base_error = Error::WidthMismatch { row: 2, width: 3 };
    let contextual_error = base_error.with_context("samples.tsv:4");

    match &contextual_error {
        Error::Context { context, .. } => {
            assert_eq!(context, "samples.tsv:4");
        }
        _ => panic!("Expected Context variant"),
    }
    assert!(matches!(
        contextual_error.innermost(),
        Error::WidthMismatch { row: 2, width: 3 }
    ));
}

#[test]
fn test_nested_context_innermost() {
    let err = Error::EmptyChannel("collapse")
        .with_context("step 3")
        .with_context("recipe.yaml");
    assert!(matches!(err.innermost(), Error::EmptyChannel("collapse")));
    assert!(err.to_string().contains("recipe.yaml"));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        Error::WidthMismatch { row: 2, width: 3 }.to_string(),
        "cannot bind row (len: 2) to channel (width: 3): width is different"
    );
    assert_eq!(
        Error::LengthMismatch { column: 2, length: 3 }.to_string(),
        "cannot bind column (len: 2) to channel (length: 3): length is different"
    );
    assert_eq!(
        Error::NotDivisible { op: "fold", what: "width", size: 3, factor: 2 }.to_string(),
        "failed to fold: the width 3 cannot be divided by 2"
    );
    assert_eq!(
        Error::InvalidWidth { width: 2 }.to_string(),
        "width = 2, but expect width = 1"
    );
}

#[test]
fn test_width_mismatch_suggestions() {
    let suggestions = Error::WidthMismatch { row: 1, width: 3 }.suggestions();
    assert!(suggestions.iter().any(|s| s.contains("tuple")));

    let suggestions = Error::WidthMismatch { row: 2, width: 3 }.suggestions();
    assert!(!suggestions.iter().any(|s| s.contains("tuple")));
}

#[test]
fn test_suggestions_see_through_context() {
    let err = Error::InconsistentArgWidth {
        arg: "b".into(),
        width: 1,
        previous: 2,
    }
    .with_context("argv");
    let suggestions = err.suggestions();
    assert!(suggestions.iter().any(|s| s.contains("fields")));
}

#[test]
fn test_no_suggestions_for_hash_error() {
    assert!(Error::Hash("boom".into()).suggestions().is_empty());
}

#[test]
fn test_default_config() {
    let cfg = ChannelConfig::default();
    assert_eq!(cfg.delimiter, "\t");
    assert_eq!(cfg.arg_separator, ',');
    assert!(!cfg.glob_hidden);
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_empty_delimiter_is_invalid() {
    let cfg = ChannelConfig {
        delimiter: String::new(),
        ..ChannelConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(Error::Config(_))));
}

#[test]
fn test_config_from_json_fills_defaults() {
    let cfg: ChannelConfig = serde_json::from_str(r#"{"delimiter": ","}"#).unwrap();
    assert_eq!(cfg.delimiter, ",");
    assert_eq!(cfg.arg_separator, ',');
}

#[test]
fn test_unescape_delimiter() {
    assert_eq!(unescape_delimiter("\\t"), "\t");
    assert_eq!(unescape_delimiter("tab"), "\t");
    assert_eq!(unescape_delimiter("\\n"), "\n");
    assert_eq!(unescape_delimiter(";"), ";");
}

// The only test in this binary that touches the process environment.
#[test]
fn test_config_from_env() {
    std::env::set_var("PIPECHAN_DELIMITER", "\\t");
    std::env::set_var("PIPECHAN_ARG_SEPARATOR", ";");
    std::env::set_var("PIPECHAN_GLOB_HIDDEN", "true");
    let cfg = ChannelConfig::from_env();
    assert_eq!(cfg.delimiter, "\t");
    assert_eq!(cfg.arg_separator, ';');
    assert!(cfg.glob_hidden);

    std::env::set_var("PIPECHAN_ARG_SEPARATOR", "too long");
    std::env::set_var("PIPECHAN_GLOB_HIDDEN", "0");
    let cfg = ChannelConfig::from_env();
    assert_eq!(cfg.arg_separator, ',');
    assert!(!cfg.glob_hidden);

    std::env::remove_var("PIPECHAN_DELIMITER");
    std::env::remove_var("PIPECHAN_ARG_SEPARATOR");
    std::env::remove_var("PIPECHAN_GLOB_HIDDEN");
    assert_eq!(ChannelConfig::from_env(), ChannelConfig::default());
}
