//! Venue Client - HTTP client for the moderation API
//!
//! Provides the transport (`HttpClient`) and the typed endpoint wrapper
//! (`VenueApi`) used by the console.

pub mod api;
pub mod client;
pub mod config;
pub mod error;

pub use api::{VenueApi, VenueService};
pub use client::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use client::OneshotHttpClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};

// Re-export shared types for convenience
pub use shared::{CountSummary, Venue, VenueId, VenueQuery, VerifyRequest};
