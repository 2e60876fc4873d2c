use linediff_core::{LineDiffError, RenderConfig};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_toml_enables_suppression() {
    let config = RenderConfig::from_toml_str("suppress_common = true\n").unwrap();
    assert_eq!(config, RenderConfig::suppressing_common());
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config = RenderConfig::from_toml_str("").unwrap();
    assert_eq!(config, RenderConfig::default());
}

#[test]
fn test_unknown_key_is_rejected() {
    let err = RenderConfig::from_toml_str("context_lines = 3\n").unwrap_err();
    match err {
        LineDiffError::InvalidConfig { reason } => assert!(reason.contains("context_lines")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_wrong_type_is_rejected() {
    let err = RenderConfig::from_toml_str("suppress_common = \"yes\"\n").unwrap_err();
    assert!(matches!(err, LineDiffError::InvalidConfig { .. }));
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("linediff.toml");
    fs::write(&path, "# render options\nsuppress_common = true\n").unwrap();

    let config = RenderConfig::load(&path).unwrap();
    assert!(config.suppress_common);
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.toml");

    let err = RenderConfig::load(&path).unwrap_err();
    assert!(matches!(err, LineDiffError::FileNotFound { .. }));
}

#[test]
fn test_config_round_trips_through_toml() {
    let text = toml::to_string(&RenderConfig::suppressing_common()).unwrap();
    assert_eq!(text.trim(), "suppress_common = true");
}
