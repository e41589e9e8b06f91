//! Error types used throughout the provider

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification of a failure, shared by the HTTP layer and the adapters.
///
/// Only [`ErrorKind::RateLimited`] and [`ErrorKind::Transient`] are retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    Conflict,
    RateLimited,
    Transient,
    Unauthorized,
    Fatal,
    Validation,
    Cancelled,
    Config,
}

impl ErrorKind {
    /// Map a non-2xx HTTP status code to its kind.
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => Self::NotFound,
            409 => Self::Conflict,
            429 => Self::RateLimited,
            401 | 403 => Self::Unauthorized,
            _ => Self::Fatal,
        }
    }

    pub fn is_retryable(self) -> bool {
        matches!(self, Self::RateLimited | Self::Transient)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::RateLimited => "rate_limited",
            Self::Transient => "transient",
            Self::Unauthorized => "unauthorized",
            Self::Fatal => "fatal",
            Self::Validation => "validation",
            Self::Cancelled => "cancelled",
            Self::Config => "config",
        }
    }
}

/// Main error type for the provider
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ProviderError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Transient failure: {0}")]
    Transient(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Remote API error: {0}")]
    Fatal(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Validation failed for field '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("Invalid resource ID: {0}")]
    InvalidId(String),

    #[error("Operation cancelled: {0}")]
    Cancelled(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ProviderError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Conflict(_) => ErrorKind::Conflict,
            Self::RateLimited(_) => ErrorKind::RateLimited,
            Self::Transient(_) => ErrorKind::Transient,
            Self::Unauthorized(_) => ErrorKind::Unauthorized,
            Self::Fatal(_) | Self::Decode(_) | Self::InvalidId(_) => ErrorKind::Fatal,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Cancelled(_) => ErrorKind::Cancelled,
            Self::Config(_) => ErrorKind::Config,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// The human-readable detail without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(msg)
            | Self::Conflict(msg)
            | Self::RateLimited(msg)
            | Self::Transient(msg)
            | Self::Unauthorized(msg)
            | Self::Fatal(msg)
            | Self::Decode(msg)
            | Self::InvalidId(msg)
            | Self::Cancelled(msg)
            | Self::Config(msg) => msg,
            Self::Validation { message, .. } => message,
        }
    }

    /// Prefix the message with `"<operation> <resource>: "`, keeping the kind.
    #[must_use]
    pub fn with_context(self, operation: &str, resource: &str) -> Self {
        self.map_message(|msg| format!("{operation} {resource}: {msg}"))
    }

    fn map_message(self, f: impl FnOnce(String) -> String) -> Self {
        match self {
            Self::NotFound(msg) => Self::NotFound(f(msg)),
            Self::Conflict(msg) => Self::Conflict(f(msg)),
            Self::RateLimited(msg) => Self::RateLimited(f(msg)),
            Self::Transient(msg) => Self::Transient(f(msg)),
            Self::Unauthorized(msg) => Self::Unauthorized(f(msg)),
            Self::Fatal(msg) => Self::Fatal(f(msg)),
            Self::Decode(msg) => Self::Decode(f(msg)),
            Self::InvalidId(msg) => Self::InvalidId(f(msg)),
            Self::Cancelled(msg) => Self::Cancelled(f(msg)),
            Self::Config(msg) => Self::Config(f(msg)),
            Self::Validation { field, message } => Self::Validation { field, message: f(message) },
        }
    }
}

/// Result type alias for provider operations
pub type Result<T> = std::result::Result<T, ProviderError>;
