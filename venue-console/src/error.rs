//! Console error types

use shared::VenueId;
use thiserror::Error;
use venue_client::ClientError;

/// Console error type
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Remote API call failed
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Venue {0} is not in the current list")]
    UnknownVenue(VenueId),

    /// An approve/reject/save for this venue is still in flight
    #[error("Venue {0} has a request in flight")]
    Busy(VenueId),

    /// The single edit slot is held by another row
    #[error("Venue {0} is already being edited")]
    EditInProgress(VenueId),

    #[error("No venue is being edited")]
    NotEditing,

    #[error("Unknown field: {0}")]
    InvalidField(String),

    #[error("Invalid value for {field}: {value:?}")]
    InvalidValue { field: &'static str, value: String },
}

/// Result type for console operations
pub type ConsoleResult<T> = Result<T, ConsoleError>;
