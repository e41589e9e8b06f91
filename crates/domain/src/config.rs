//! Provider configuration

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_BASE_DELAY_MS, DEFAULT_MAX_DELAY_MS, DEFAULT_MAX_RETRIES,
    DEFAULT_TIMEOUT_SECS, ENV_API_TOKEN, MIN_TOKEN_LENGTH, REDACTED, TOKEN_EMPTY_CODE,
    TOKEN_NOT_CONFIGURED_CODE, TOKEN_TOO_SHORT_CODE,
};
use crate::errors::{ProviderError, Result};

/// API credential. Never printed and never serialized.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ApiToken(String);

impl ApiToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw credential, only for building the Authorization header.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Placeholder used wherever the token would otherwise appear.
    pub fn redacted(&self) -> &'static str {
        if self.0.is_empty() {
            "<empty>"
        } else {
            REDACTED
        }
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.redacted())
    }
}

/// Check that a credential is present and plausibly shaped.
///
/// The token itself never appears in the returned error.
pub fn validate_token(token: Option<&ApiToken>) -> Result<()> {
    let Some(token) = token else {
        return Err(ProviderError::Config(format!(
            "[{TOKEN_NOT_CONFIGURED_CODE}] API token is not configured. Set the provider \
             apiToken option or the {ENV_API_TOKEN} environment variable"
        )));
    };

    if token.is_empty() {
        return Err(ProviderError::Config(format!(
            "[{TOKEN_EMPTY_CODE}] API token is empty. Provide a site or workspace token \
             generated in the Webflow dashboard"
        )));
    }

    if token.expose().trim().len() < MIN_TOKEN_LENGTH {
        return Err(ProviderError::Config(format!(
            "[{TOKEN_TOO_SHORT_CODE}] API token is too short (expected at least \
             {MIN_TOKEN_LENGTH} characters). Check that the full token was copied"
        )));
    }

    Ok(())
}

/// Retry and timeout settings for the HTTP client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HttpConfig {
    pub timeout_secs: u64,
    pub max_retries: u32,
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
            base_delay_ms: DEFAULT_BASE_DELAY_MS,
            max_delay_ms: DEFAULT_MAX_DELAY_MS,
        }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }

    pub fn max_delay(&self) -> Duration {
        Duration::from_millis(self.max_delay_ms)
    }
}

/// Top-level provider configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    #[serde(default, skip_serializing)]
    pub api_token: ApiToken,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub http: HttpConfig,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self { api_token: ApiToken::default(), base_url: default_base_url(), http: HttpConfig::default() }
    }
}

impl ProviderConfig {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { api_token: ApiToken::new(token), ..Self::default() }
    }

    pub fn validate(&self) -> Result<()> {
        validate_token(Some(&self.api_token))?;

        if self.http.timeout_secs == 0 {
            return Err(ProviderError::Config("http.timeoutSecs must be greater than zero".into()));
        }
        if self.http.base_delay_ms > self.http.max_delay_ms {
            return Err(ProviderError::Config(
                "http.baseDelayMs must not exceed http.maxDelayMs".into(),
            ));
        }
        Ok(())
    }
}
