//! # Webflow Core
//!
//! Resource lifecycle logic - no HTTP or configuration-loading code.
//!
//! This crate contains:
//! - Port interfaces (traits) for the remote API transport and for resource
//!   lifecycles
//! - Input validation and change detection
//! - The generic adapter that turns a resource descriptor into
//!   create/read/update/delete calls
//!
//! ## Architecture Principles
//! - Only depends on `webflow-domain`
//! - All remote access via the [`ApiTransport`] port
//! - Pure, testable business logic

pub mod resource;

// Re-export specific items to avoid ambiguity
pub use resource::diff::diff;
pub use resource::ports::{ApiRequest, ApiTransport, ResourceLifecycle};
pub use resource::validation::validate_args;
pub use resource::{ResourceAdapter, ResourcePhase};
