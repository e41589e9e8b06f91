//! # Webflow Provider Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The authenticated, retrying HTTP client
//! - Classification of remote failures into provider errors
//! - Configuration loading from environment variables and files
//! - The resource catalogue: one descriptor per remote resource type
//!
//! ## Architecture
//! - Implements `ApiTransport` from `webflow-core`
//! - Depends on `webflow-domain` and `webflow-core`
//! - Contains all "impure" code (network and filesystem I/O)

pub mod config;
pub mod errors;
pub mod http;
pub mod resources;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use resources::catalogue;
