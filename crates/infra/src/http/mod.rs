//! HTTP transport for the remote API.

pub mod classify;
pub mod client;

pub use classify::classify_status;
pub use client::{HttpClient, HttpClientBuilder};
