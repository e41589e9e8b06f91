//! Shared helpers

pub mod redact;
pub mod robots_txt;

pub use redact::{redact_credential, redact_secrets, truncate_for_logging};
