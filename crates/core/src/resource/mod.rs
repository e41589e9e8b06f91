//! Resource lifecycle: ports, validation, change detection, payload
//! mapping, and the descriptor-driven adapter.

pub mod adapter;
pub mod diff;
pub mod payload;
pub mod phase;
pub mod ports;
pub mod validation;

pub use adapter::ResourceAdapter;
pub use phase::ResourcePhase;
