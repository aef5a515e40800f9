//! Tests for config functionality.

use crate::config::{Config, LockConfig, LogFormat};
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.lock_stale_ms, 15_000);
    assert_eq!(config.retry_delay_ms, 200);
    assert_eq!(config.retry_jitter_ms, 100);
    assert_eq!(config.max_attempts, 15);
    assert_eq!(config.log_filter, "warn");
    assert_eq!(config.log_format, LogFormat::Compact);
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();

    assert_eq!(config.lock_stale_ms, 15_000);
    assert_eq!(config.max_attempts, 15);
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
lock_stale_ms: 30000
max_attempts: 40
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.lock_stale_ms, 30_000);
    assert_eq!(config.max_attempts, 40);

    // Unspecified values should use defaults
    assert_eq!(config.retry_delay_ms, 200);
    assert_eq!(config.log_format, LogFormat::Compact);
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
lock_stale_ms: 5000
retry_delay_ms: 50
retry_jitter_ms: 10
max_attempts: 3
log_filter: "memedit=debug"
log_format: json
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.lock_stale_ms, 5000);
    assert_eq!(config.retry_delay_ms, 50);
    assert_eq!(config.retry_jitter_ms, 10);
    assert_eq!(config.max_attempts, 3);
    assert_eq!(config.log_filter, "memedit=debug");
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn test_unknown_fields_are_ignored() {
    let yaml = r#"
max_attempts: 7
future_setting: true
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.max_attempts, 7);
}

#[test]
fn test_zero_stale_threshold_is_rejected() {
    let err = Config::from_yaml("lock_stale_ms: 0").unwrap_err();
    assert!(err.to_string().contains("lock_stale_ms"));
}

#[test]
fn test_zero_max_attempts_is_rejected() {
    let err = Config::from_yaml("max_attempts: 0").unwrap_err();
    assert!(err.to_string().contains("max_attempts"));
}

#[test]
fn test_empty_log_filter_is_rejected() {
    let err = Config::from_yaml("log_filter: '  '").unwrap_err();
    assert!(err.to_string().contains("log_filter"));
}

#[test]
fn test_malformed_yaml_is_a_user_error() {
    let err = Config::from_yaml("max_attempts: [not a number").unwrap_err();
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("memedit.yaml");
    std::fs::write(&path, "retry_delay_ms: 25\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.retry_delay_ms, 25);
}

#[test]
fn test_load_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let err = Config::load(temp_dir.path().join("absent.yaml")).unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn test_lock_config_conversion() {
    let config = Config {
        lock_stale_ms: 1500,
        retry_delay_ms: 20,
        retry_jitter_ms: 5,
        max_attempts: 4,
        ..Config::default()
    };

    assert_eq!(
        config.lock_config(),
        LockConfig {
            stale: Duration::from_millis(1500),
            retry_delay: Duration::from_millis(20),
            retry_jitter: Duration::from_millis(5),
            max_attempts: 4,
        }
    );
    assert_eq!(Config::default().lock_config(), LockConfig::default());
}
