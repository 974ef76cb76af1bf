//! Configuration types
//!
//! Board-agnostic session settings. Nothing is persisted on the device;
//! a host tool may provision these as a postcard blob when the `serde`
//! feature is enabled.

pub mod types;

pub use types::*;
