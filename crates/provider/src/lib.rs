//! # Webflow Provider
//!
//! Infrastructure-as-code resource provider for the Webflow v2 API.
//!
//! This crate contains:
//! - The provider registry (type token → resource lifecycle)
//! - Provider functions (token introspection)
//! - Logging setup and operation timing
//! - The `webflow-provider` binary
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires the HTTP transport into one generic adapter per resource type

pub mod functions;
pub mod registry;
pub mod utils;

// Re-export for convenience
pub use functions::{AuthorizedUser, TokenInfo};
pub use registry::Provider;
pub use utils::logging::{init_logging, init_logging_from_env};
