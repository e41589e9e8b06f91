//! # Webflow Domain
//!
//! Domain types for the Webflow resource provider.
//!
//! This crate contains:
//! - The provider error taxonomy and Result definition
//! - Provider configuration structures and token validation
//! - The composite resource identifier codec
//! - Resource descriptors, arguments, and state types
//! - Redaction and robots.txt helpers shared by the outer layers
//!
//! ## Architecture
//! - No dependencies on other provider crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
