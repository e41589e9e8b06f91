use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use webflow_domain::ProviderError;

/// Provider-specific filter directive; takes precedence over `RUST_LOG`.
pub const ENV_LOG: &str = "WEBFLOW_LOG";
/// Set to `json` for structured output.
pub const ENV_LOG_FORMAT: &str = "WEBFLOW_LOG_FORMAT";

const DEFAULT_DIRECTIVE: &str = "info";

/// Install the global `tracing` subscriber.
///
/// The filter comes from `WEBFLOW_LOG`, then `RUST_LOG`, then `info`.
/// Output goes to stderr so stdout stays free for command results.
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn init_logging(json: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false);

    if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    }
}

/// [`init_logging`] with the format taken from `WEBFLOW_LOG_FORMAT`.
pub fn init_logging_from_env() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let json = std::env::var(ENV_LOG_FORMAT).is_ok_and(|format| format.eq_ignore_ascii_case("json"));
    init_logging(json)
}

fn env_filter() -> EnvFilter {
    std::env::var(ENV_LOG)
        .ok()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Log the outcome of a lifecycle operation with structured fields.
///
/// `resource` is the type token and `operation` a fixed verb such as
/// `"create"`; neither may carry user data.
#[inline]
pub fn log_operation(resource: &str, operation: &str, elapsed: Duration, success: bool) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    if success {
        info!(resource, operation, duration_ms, "operation_success");
    } else {
        warn!(resource, operation, duration_ms, "operation_failure");
    }
}

/// Convert a `ProviderError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &ProviderError) -> &'static str {
    match error {
        ProviderError::NotFound(_) => "not_found",
        ProviderError::Conflict(_) => "conflict",
        ProviderError::RateLimited(_) => "rate_limited",
        ProviderError::Transient(_) => "transient",
        ProviderError::Unauthorized(_) => "unauthorized",
        ProviderError::Fatal(_) => "fatal",
        ProviderError::Decode(_) => "decode",
        ProviderError::Validation { .. } => "validation",
        ProviderError::InvalidId(_) => "invalid_id",
        ProviderError::Cancelled(_) => "cancelled",
        ProviderError::Config(_) => "config",
    }
}
