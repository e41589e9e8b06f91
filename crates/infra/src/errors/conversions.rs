//! Conversions from external infrastructure errors into provider errors.

use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use toml::de::Error as TomlError;
use webflow_domain::ProviderError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct InfraError(pub ProviderError);

impl From<InfraError> for ProviderError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ProviderError> for InfraError {
    fn from(value: ProviderError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoProviderError {
    fn into_provider(self) -> ProviderError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ProviderError */
/* -------------------------------------------------------------------------- */

impl IntoProviderError for HttpError {
    fn into_provider(self) -> ProviderError {
        // The URL carries only IDs; credentials travel in headers.
        let detail = self.to_string();

        if self.is_builder() {
            return ProviderError::Config(format!("invalid HTTP request: {detail}"));
        }

        if self.is_timeout() {
            return ProviderError::Transient(format!("request timed out: {detail}"));
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return ProviderError::Transient(format!("connection failed: {detail}"));
        }

        if self.is_decode() {
            return ProviderError::Decode(detail);
        }

        if let Some(status) = self.status() {
            return ProviderError::Fatal(format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown status")
            ));
        }

        ProviderError::Transient(format!("network error: {detail}"))
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_provider())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json / toml / io → ProviderError */
/* -------------------------------------------------------------------------- */

impl IntoProviderError for JsonError {
    fn into_provider(self) -> ProviderError {
        ProviderError::Decode(format!("invalid JSON at line {} column {}: {self}", self.line(), self.column()))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_provider())
    }
}

impl IntoProviderError for TomlError {
    fn into_provider(self) -> ProviderError {
        ProviderError::Config(format!("Invalid TOML format: {}", self.message()))
    }
}

impl From<TomlError> for InfraError {
    fn from(value: TomlError) -> Self {
        InfraError(value.into_provider())
    }
}

impl IntoProviderError for std::io::Error {
    fn into_provider(self) -> ProviderError {
        ProviderError::Config(format!("Failed to read config file: {self}"))
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(value.into_provider())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
