//! Listing & filtering
//!
//! Holds the fetched list and its filters. Network calls live in
//! [`crate::Console`]; this module only decides what to request and how a
//! response is reconciled into state.

use chrono::NaiveDate;
use shared::{PaginatedResponse, Venue, VenueId, VenueQuery};

/// Length of a full mobile number; typing one fetches its count summary.
pub const MOBILE_NUMBER_LEN: usize = 10;

/// Default rows per page
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Which list the console shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingView {
    /// All submissions awaiting or past review (`GET /gethotels`)
    #[default]
    Review,
    /// Verified locations (`GET /getVerifiedHotels`)
    Locations,
}

/// Where filters are evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Filters go to the API as query parameters
    #[default]
    Server,
    /// Filters run over the last unfiltered fetch
    Local,
}

/// User-controlled filter inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub verified_only: bool,
    pub created_date: Option<NaiveDate>,
    /// Search term as typed (matched against the submitter's number)
    pub search: String,
}

impl ListingFilter {
    /// Trimmed search term, `None` when blank
    pub fn search_term(&self) -> Option<&str> {
        Some(self.search.trim()).filter(|s| !s.is_empty())
    }

    /// Full mobile number typed into the search box, if any
    pub fn full_mobile(&self) -> Option<&str> {
        self.search_term()
            .filter(|s| s.chars().count() == MOBILE_NUMBER_LEN)
    }

    /// Server-side query for this filter
    pub fn to_query(&self) -> VenueQuery {
        VenueQuery::all()
            .with_mobile(self.search.as_str())
            .with_created_date(self.created_date)
            .verified_only(self.verified_only)
    }

    /// Client-side predicate: substring on the submitter's number and exact
    /// calendar day (UTC) of creation.
    pub fn matches(&self, venue: &Venue) -> bool {
        let matches_search = self
            .search_term()
            .is_none_or(|term| venue.matches_mobile(term));
        let matches_date = self
            .created_date
            .is_none_or(|day| venue.created_day() == Some(day));
        let matches_verified = !self.verified_only || venue.verified;
        matches_search && matches_date && matches_verified
    }
}

/// Filter `venues` with `filter`, keeping order
pub fn filter_local(venues: &[Venue], filter: &ListingFilter) -> Vec<Venue> {
    venues
        .iter()
        .filter(|venue| filter.matches(venue))
        .cloned()
        .collect()
}

/// A read the console should issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchPlan {
    /// Stale-response guard token
    pub generation: u64,
    pub view: ListingView,
    /// Query for the review list; ignored by the locations view
    pub query: VenueQuery,
}

/// What happened to a fetched response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// A newer fetch was issued meanwhile; the response was dropped
    Stale,
    Failed,
}

/// List state for one console view
#[derive(Debug, Clone, Default)]
pub struct ListingState {
    pub view: ListingView,
    pub mode: FilterMode,
    pub filter: ListingFilter,
    /// Rows currently shown
    venues: Vec<Venue>,
    /// Last unfiltered response (local mode filters this, never `venues`)
    snapshot: Vec<Venue>,
    /// A read is in flight
    pub loading: bool,
    /// Page-level read error
    pub error: Option<String>,
    page: u32,
    page_size: u32,
    generation: u64,
}

impl ListingState {
    /// The locations endpoint takes no filters, so that view always
    /// filters locally.
    pub fn new(view: ListingView, mode: FilterMode) -> Self {
        let mode = match view {
            ListingView::Locations => FilterMode::Local,
            ListingView::Review => mode,
        };
        Self {
            view,
            mode,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            ..Self::default()
        }
    }

    pub fn with_filter(mut self, filter: ListingFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Where filters are evaluated for the current view
    pub fn filter_mode(&self) -> FilterMode {
        match self.view {
            ListingView::Locations => FilterMode::Local,
            ListingView::Review => self.mode,
        }
    }

    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    pub fn find(&self, id: VenueId) -> Option<&Venue> {
        self.venues.iter().find(|v| v.hotel_id == id)
    }

    /// Start a read. Any response from an earlier plan is now stale.
    pub fn begin_fetch(&mut self) -> FetchPlan {
        self.generation += 1;
        self.loading = true;
        let query = match self.filter_mode() {
            FilterMode::Server => self.filter.to_query(),
            FilterMode::Local => VenueQuery::all(),
        };
        FetchPlan {
            generation: self.generation,
            view: self.view,
            query,
        }
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Reconcile a read response. In server mode the list is replaced
    /// verbatim; in local mode the response becomes the snapshot and the
    /// filter is re-applied.
    pub fn finish_fetch(
        &mut self,
        generation: u64,
        result: Result<Vec<Venue>, String>,
    ) -> FetchOutcome {
        if !self.is_current(generation) {
            return FetchOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(venues) => {
                self.error = None;
                match self.filter_mode() {
                    FilterMode::Server => {
                        self.snapshot = venues.clone();
                        self.venues = venues;
                    }
                    FilterMode::Local => {
                        self.venues = filter_local(&venues, &self.filter);
                        self.snapshot = venues;
                    }
                }
                self.set_page(self.page);
                FetchOutcome::Applied
            }
            Err(message) => {
                self.error = Some(message);
                FetchOutcome::Failed
            }
        }
    }

    /// Re-run the local filter over the snapshot (local mode only)
    pub fn apply_local_filter(&mut self) {
        self.venues = filter_local(&self.snapshot, &self.filter);
        self.page = 1;
    }

    /// Replace the whole list (edit rollback)
    pub fn restore(&mut self, venues: Vec<Venue>) {
        self.venues = venues;
    }

    /// Replace one row in place. Returns false if the id is not listed.
    pub fn replace(&mut self, venue: Venue) -> bool {
        match self.venues.iter_mut().find(|v| v.hotel_id == venue.hotel_id) {
            Some(slot) => {
                *slot = venue;
                true
            }
            None => false,
        }
    }

    pub fn page_number(&self) -> u32 {
        self.page
    }

    /// Move to `page`, clamped to the pages the current rows fill
    pub fn set_page(&mut self, page: u32) {
        self.page = page.clamp(1, self.last_page());
    }

    fn last_page(&self) -> u32 {
        if self.page_size == 0 {
            return 1;
        }
        (self.venues.len() as u64)
            .div_ceil(self.page_size as u64)
            .max(1) as u32
    }

    /// Current page of rows
    pub fn page(&self) -> PaginatedResponse<Venue> {
        PaginatedResponse::paginate(&self.venues, self.page, self.page_size)
    }
}
