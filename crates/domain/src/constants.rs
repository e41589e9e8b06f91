//! Provider constants
//!
//! Centralized location for wire-level and configuration constants used
//! throughout the provider.

// Remote API
pub const DEFAULT_API_BASE_URL: &str = "https://api.webflow.com";
pub const API_VERSION_HEADER: &str = "Accept-Version";
pub const API_VERSION: &str = "2.0.0";
pub const USER_AGENT_PREFIX: &str = "webflow-provider";

// Resource identity
pub const PROVIDER_NAME: &str = "webflow";
pub const TYPE_TOKEN_PREFIX: &str = "webflow:index:";
pub const PREVIEW_ID_PREFIX: &str = "preview-";
pub const ID_SEPARATOR: char = '/';

// Retry and timeout defaults
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_BASE_DELAY_MS: u64 = 1_000;
pub const DEFAULT_MAX_DELAY_MS: u64 = 30_000;
pub const MAX_BACKOFF_SHIFT: u32 = 16;

// Credentials
pub const MIN_TOKEN_LENGTH: usize = 10;
pub const TOKEN_NOT_CONFIGURED_CODE: &str = "WEBFLOW_AUTH_001";
pub const TOKEN_EMPTY_CODE: &str = "WEBFLOW_AUTH_002";
pub const TOKEN_TOO_SHORT_CODE: &str = "WEBFLOW_AUTH_003";

// Environment variables
pub const ENV_API_TOKEN: &str = "WEBFLOW_API_TOKEN";
pub const ENV_API_BASE_URL: &str = "WEBFLOW_API_BASE_URL";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "WEBFLOW_HTTP_TIMEOUT_SECS";
pub const ENV_MAX_RETRIES: &str = "WEBFLOW_MAX_RETRIES";
pub const ENV_RETRY_BASE_DELAY_MS: &str = "WEBFLOW_RETRY_BASE_DELAY_MS";
pub const ENV_RETRY_MAX_DELAY_MS: &str = "WEBFLOW_RETRY_MAX_DELAY_MS";
pub const ENV_CONFIG_PATH: &str = "WEBFLOW_PROVIDER_CONFIG";

// Logging
pub const MAX_LOGGED_BODY_LEN: usize = 512;
pub const REDACTED: &str = "[REDACTED]";
