//! Venue Console - moderation of crowd-sourced venue submissions
//!
//! [`Console`] owns the listing, filters, loading set, edit slot and detail
//! selection, and drives a [`venue_client::VenueApi`] for every action.

pub mod config;
pub mod console;
pub mod detail;
pub mod edit;
pub mod error;
pub mod links;
pub mod listing;
pub mod logger;
pub mod review;
pub mod summary;
pub mod table;

#[cfg(test)]
mod testing;

pub use config::{Cli, Command};
pub use console::{Console, ConsoleState};
pub use detail::DetailView;
pub use edit::{EditField, EditPhase, EditSession};
pub use error::{ConsoleError, ConsoleResult};
pub use links::{MapLinkCell, is_url};
pub use listing::{FilterMode, ListingFilter, ListingState, ListingView};
pub use review::Decision;
pub use summary::Summary;
pub use table::{VenueRow, render_table};
