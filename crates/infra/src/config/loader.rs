//! Configuration loader
//!
//! Loads the provider configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If no token is set in the environment, falls back to a config file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `WEBFLOW_API_TOKEN`: API token (required)
//! - `WEBFLOW_API_BASE_URL`: API base URL (https only)
//! - `WEBFLOW_HTTP_TIMEOUT_SECS`: Per-request timeout in seconds
//! - `WEBFLOW_MAX_RETRIES`: Retries after the first attempt
//! - `WEBFLOW_RETRY_BASE_DELAY_MS`: Initial backoff delay
//! - `WEBFLOW_RETRY_MAX_DELAY_MS`: Backoff ceiling
//! - `WEBFLOW_PROVIDER_CONFIG`: Explicit config file path
//!
//! ## File Locations
//! When `WEBFLOW_PROVIDER_CONFIG` is unset the loader searches, in order:
//! 1. `./webflow-provider.{json,toml}` and `./config.{json,toml}`
//! 2. The same names next to the executable

use std::path::{Path, PathBuf};
use std::str::FromStr;

use webflow_domain::constants::{
    ENV_API_BASE_URL, ENV_API_TOKEN, ENV_CONFIG_PATH, ENV_HTTP_TIMEOUT_SECS, ENV_MAX_RETRIES,
    ENV_RETRY_BASE_DELAY_MS, ENV_RETRY_MAX_DELAY_MS,
};
use webflow_domain::{ApiToken, HttpConfig, ProviderConfig, ProviderError, Result};

const CONFIG_FILE_NAMES: [&str; 4] =
    ["webflow-provider.json", "webflow-provider.toml", "config.json", "config.toml"];

/// Load and validate configuration with automatic fallback strategy
///
/// # Errors
/// Returns `ProviderError::Config` if no source yields a configuration,
/// the file format is invalid, or the result fails validation.
pub fn load() -> Result<ProviderConfig> {
    let config = match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            config
        }
        Err(e) => {
            tracing::debug!(error = %e, "Failed to load from environment, trying file");
            load_from_file(None)?
        }
    };

    config.validate()?;
    Ok(config)
}

/// Load configuration from environment variables
///
/// `WEBFLOW_API_TOKEN` is required; every other setting falls back to its
/// default.
///
/// # Errors
/// Returns `ProviderError::Config` if the token is missing or a numeric
/// variable does not parse.
pub fn load_from_env() -> Result<ProviderConfig> {
    let token = env_var(ENV_API_TOKEN)?;
    let defaults = HttpConfig::default();

    Ok(ProviderConfig {
        api_token: ApiToken::new(token),
        base_url: std::env::var(ENV_API_BASE_URL)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| ProviderConfig::default().base_url),
        http: HttpConfig {
            timeout_secs: env_parse(ENV_HTTP_TIMEOUT_SECS)?.unwrap_or(defaults.timeout_secs),
            max_retries: env_parse(ENV_MAX_RETRIES)?.unwrap_or(defaults.max_retries),
            base_delay_ms: env_parse(ENV_RETRY_BASE_DELAY_MS)?.unwrap_or(defaults.base_delay_ms),
            max_delay_ms: env_parse(ENV_RETRY_MAX_DELAY_MS)?.unwrap_or(defaults.max_delay_ms),
        },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, uses `WEBFLOW_PROVIDER_CONFIG` or searches the
/// standard locations. A file without a token picks it up from
/// `WEBFLOW_API_TOKEN`.
///
/// # Errors
/// Returns `ProviderError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<ProviderConfig> {
    let explicit = path.or_else(|| std::env::var(ENV_CONFIG_PATH).ok().map(PathBuf::from));
    let config_path = match explicit {
        Some(p) => {
            if !p.exists() {
                return Err(ProviderError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => find_config_file().ok_or_else(|| {
            ProviderError::Config(format!(
                "No config file found in any of the standard locations and {ENV_API_TOKEN} is not set"
            ))
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ProviderError::Config(format!("Failed to read config file: {e}")))?;

    let mut config = parse_config(&contents, &config_path)?;
    if config.api_token.is_empty() {
        if let Ok(token) = std::env::var(ENV_API_TOKEN) {
            config.api_token = ApiToken::new(token);
        }
    }
    Ok(config)
}

/// Parse configuration from string content, detecting the format by
/// extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<ProviderConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ProviderError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ProviderError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(ProviderError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the working directory, then the executable's directory, for a
/// config file. Returns the first one that exists.
pub fn find_config_file() -> Option<PathBuf> {
    let mut dirs = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| ProviderError::Config(format!("Missing required environment variable: {key}")))
}

/// Parse an optional numeric environment variable.
fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| ProviderError::Config(format!("Invalid value for {key}: {e}"))),
        Err(_) => Ok(None),
    }
}
