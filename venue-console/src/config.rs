//! Command-line configuration
//!
//! Every connection option falls back to an environment variable, and a
//! `.env` file is loaded before parsing.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use shared::VenueId;
use venue_client::ClientConfig;
use venue_client::config::DEFAULT_TIMEOUT_SECS;

use crate::edit::EditField;
use crate::error::{ConsoleError, ConsoleResult};
use crate::listing::{
    DEFAULT_PAGE_SIZE, FilterMode, ListingFilter, ListingState, ListingView,
};

#[derive(Debug, Parser)]
#[command(name = "venue-console", version, about = "Review and moderate venue submissions")]
pub struct Cli {
    /// API base URL
    #[arg(long, env = "VENUE_API_URL", default_value = "http://localhost:8080")]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "VENUE_API_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Bearer token sent with every request
    #[arg(long, env = "VENUE_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Rows per page
    #[arg(long, env = "VENUE_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: u32,

    /// Log level when RUST_LOG is unset
    #[arg(long, env = "VENUE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a page of submissions with counters
    List(ListArgs),
    /// Print signature dishes and timings of a submission
    Show { id: VenueId },
    /// Approve a submission
    Approve { id: VenueId },
    /// Reject a submission
    Reject { id: VenueId },
    /// Edit fields of a submission and save
    Edit {
        id: VenueId,
        /// `field=value`, repeatable (e.g. `--set name="Chai Point"`)
        #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment, required = true)]
        set: Vec<(EditField, String)>,
    },
    /// Print the count summary, optionally for one submitter
    Counts { mobile: Option<String> },
}

#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Submitter mobile number (substring)
    #[arg(long)]
    pub mobile: Option<String>,

    /// Creation day, YYYY-MM-DD
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Only reviewed submissions
    #[arg(long)]
    pub verified_only: bool,

    /// Show the verified locations list instead of the review queue
    #[arg(long)]
    pub locations: bool,

    /// Filter on this side instead of sending query parameters
    #[arg(long)]
    pub local: bool,

    /// Page to print (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: u32,
}

impl Cli {
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(self.base_url.clone()).with_timeout(self.timeout);
        match &self.token {
            Some(token) => config.with_token(token.clone()),
            None => config,
        }
    }

    /// Listing for the given command; non-list commands use the review view.
    pub fn listing(&self) -> ListingState {
        match &self.command {
            Command::List(args) => args.listing(self.page_size),
            _ => ListingState::new(ListingView::Review, FilterMode::Server)
                .with_page_size(self.page_size),
        }
    }
}

impl ListArgs {
    pub fn listing(&self, page_size: u32) -> ListingState {
        let view = if self.locations {
            ListingView::Locations
        } else {
            ListingView::Review
        };
        let mode = if self.local {
            FilterMode::Local
        } else {
            FilterMode::Server
        };
        let filter = ListingFilter {
            verified_only: self.verified_only,
            created_date: self.date,
            search: self.mobile.clone().unwrap_or_default(),
        };
        ListingState::new(view, mode)
            .with_filter(filter)
            .with_page_size(page_size)
    }
}

/// Parse `field=value`
pub fn parse_assignment(raw: &str) -> ConsoleResult<(EditField, String)> {
    let (field, value) = raw
        .split_once('=')
        .ok_or_else(|| ConsoleError::InvalidField(raw.to_string()))?;
    Ok((field.trim().parse()?, value.to_string()))
}
