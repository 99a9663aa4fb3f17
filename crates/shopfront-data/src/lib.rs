//! Product sources for the storefront listing.
//!
//! This crate provides:
//! - `ProductSource` - The asynchronous catalog contract
//! - `MockProductSource` - The built-in sample catalog with simulated latency
//! - `JsonProductSource` - A catalog read from a JSON file
//! - `LatencyConfig` - Per-operation simulated latency

mod error;
mod json;
mod latency;
mod mock;
mod sample;
mod source;

pub use error::*;
pub use json::*;
pub use latency::*;
pub use mock::*;
pub use sample::*;
pub use source::*;
