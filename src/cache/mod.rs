//! Cache Module
//!
//! Payload storage with instrumented writes, typed reads, and call replay.

pub mod decode;
mod payload;
mod replay;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use payload::Payload;
pub use replay::{replay, CallRecord, Replay};
pub use store::{Cache, STORE_OPERATION};
