//! Shared types for the venue moderation console
//!
//! Wire models and request/response DTOs used by both the HTTP client
//! and the console crate.

pub mod models;
pub mod request;
pub mod response;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    CountSummary, SignatureDish, TimingValue, Venue, VenueCategory, VenueId, VenueTiming,
};
pub use request::{VenueQuery, VerifyRequest};
pub use response::PaginatedResponse;
