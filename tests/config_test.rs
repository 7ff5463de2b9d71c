// tests/config_test.rs
use std::io::Write;
use tempfile::NamedTempFile;

use version_stamp::config::{load_config, Config};
use version_stamp::StampError;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.placeholders.branch, "UNKNOWN");
    assert_eq!(config.placeholders.commit, "unknown");
    assert_eq!(config.defaults.git, None);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[defaults]
git = "/usr/local/bin/git"

[placeholders]
branch = "no-branch"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.defaults.git.as_deref(), Some("/usr/local/bin/git"));
    assert_eq!(config.placeholders.branch, "no-branch");
    // Unset keys keep their built-in defaults
    assert_eq!(config.placeholders.commit, "unknown");
}

#[test]
fn test_load_invalid_toml_fails() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[placeholders\nbranch = ").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(matches!(err, StampError::Config(_)));
}

#[test]
fn test_load_missing_explicit_path_fails() {
    let err = load_config(Some("/nonexistent/stampver.toml")).unwrap_err();
    assert!(matches!(err, StampError::Io(_)));
}
