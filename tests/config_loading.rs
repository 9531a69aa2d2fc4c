//! Integration tests for configuration loading and activation from a file.

use slircd_randomizer::config::{Config, ConfigError, ValidationError};
use slircd_randomizer::engine::Backend;
use slircd_randomizer::handlers::{Registry, activate, select_engine};
use std::io::Write;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_load_and_activate_from_file() {
    let file = write_config(
        r#"
        [engine]
        seed = 5

        [plugin]
        crypto = false
        shuffle = false
        "#,
    );
    let config = Config::load(file.path()).unwrap();
    let plugin = config.resolved_plugin();
    let engine = select_engine(&plugin, config.engine.seed).unwrap();
    assert_eq!(engine.backend(), Backend::Seeded);

    let mut registry = Registry::new();
    let activation = activate(&mut registry, &plugin, engine).unwrap();
    assert!(!registry.contains("shuffle"));
    assert!(registry.contains("pick"));
    assert_eq!(activation.registered().len(), 7);
}

#[test]
fn test_defaults_select_secure_backend() {
    let file = write_config("");
    let config = Config::load(file.path()).unwrap();
    let engine = select_engine(&config.resolved_plugin(), None).unwrap();
    assert_eq!(engine.backend(), Backend::Secure);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_malformed_file_is_parse_error() {
    let file = write_config("[plugin\ncrypto = ");
    assert!(matches!(
        Config::load(file.path()).unwrap_err(),
        ConfigError::Parse(_)
    ));
}

#[test]
fn test_invalid_values_are_all_reported() {
    let file = write_config(
        r#"
        [host]
        prefix = ""

        [plugin]
        roll = true
        "#,
    );
    match Config::load(file.path()).unwrap_err() {
        ConfigError::Invalid(errors) => assert_eq!(
            errors,
            vec![
                ValidationError::EmptyPrefix,
                ValidationError::UnknownPluginKey("roll".into()),
            ]
        ),
        other => panic!("unexpected error: {other}"),
    }
}
