//! Integration tests for loading provider configuration from files

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;
use webflow_domain::ProviderError;
use webflow_infra::config;

const TOKEN: &str = "wf_integration_0123456789abcdef";

/// Write `contents` next to a temp file with the given extension.
fn write_config(contents: &str, extension: &str) -> PathBuf {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(contents.as_bytes()).expect("Failed to write to temp file");

    let path = temp_file.path().with_extension(extension);
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");
    path
}

#[test]
fn test_load_config_from_json_file() {
    let path = write_config(
        &format!(
            r#"{{
                "apiToken": "{TOKEN}",
                "baseUrl": "https://api.example.test",
                "http": {{ "timeoutSecs": 15, "maxRetries": 2 }}
            }}"#
        ),
        "json",
    );

    let config = config::load_from_file(Some(path.clone())).expect("Failed to load JSON config");

    assert_eq!(config.api_token.expose(), TOKEN);
    assert_eq!(config.base_url, "https://api.example.test");
    assert_eq!(config.http.timeout_secs, 15);
    assert_eq!(config.http.max_retries, 2);
    assert!(config.validate().is_ok());

    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_config_from_toml_file() {
    let path = write_config(
        &format!(
            r#"
apiToken = "{TOKEN}"

[http]
timeoutSecs = 45
baseDelayMs = 250
maxDelayMs = 4000
"#
        ),
        "toml",
    );

    let config = config::load_from_file(Some(path.clone())).expect("Failed to load TOML config");

    assert_eq!(config.api_token.expose(), TOKEN);
    assert_eq!(config.http.timeout_secs, 45);
    assert_eq!(config.http.base_delay_ms, 250);
    assert_eq!(config.http.max_delay_ms, 4000);

    std::fs::remove_file(path).ok();
}

#[test]
fn test_missing_sections_use_defaults() {
    let path = write_config(&format!(r#"{{ "apiToken": "{TOKEN}" }}"#), "json");

    let config = config::load_from_file(Some(path.clone())).expect("Failed to load minimal config");
    let defaults = webflow_domain::ProviderConfig::default();

    assert_eq!(config.base_url, defaults.base_url);
    assert_eq!(config.http, defaults.http);

    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_config_from_nonexistent_file() {
    let result = config::load_from_file(Some("/nonexistent/path/webflow-provider.json".into()));

    match result {
        Err(ProviderError::Config(msg)) => assert!(msg.contains("not found")),
        other => panic!("Expected Config error, got {other:?}"),
    }
}

#[test]
fn test_load_config_with_invalid_format() {
    let path = write_config(r#"{ "apiToken": "unterminated "#, "json");

    match config::load_from_file(Some(path.clone())) {
        Err(ProviderError::Config(msg)) => assert!(msg.contains("Invalid JSON")),
        other => panic!("Expected Config error, got {other:?}"),
    }

    std::fs::remove_file(path).ok();
}

#[test]
fn test_serialized_config_never_contains_token() {
    let path = write_config(&format!(r#"{{ "apiToken": "{TOKEN}" }}"#), "json");
    let config = config::load_from_file(Some(path.clone())).expect("Failed to load config");

    let rendered = serde_json::to_string(&config).expect("config serializes");
    assert!(!rendered.contains(TOKEN));
    assert!(!format!("{config:?}").contains(TOKEN));

    std::fs::remove_file(path).ok();
}
