//! Data models
//!
//! Mirrors the remote API's JSON (camelCase keys, wire entity name "hotel").
//! All IDs are `i64`.

pub mod count;
pub mod venue;

// Re-exports
pub use count::*;
pub use venue::*;
