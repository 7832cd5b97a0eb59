//! Console - moderation state plus the actions that drive the remote API
//!
//! State sits behind an async `RwLock` that is never held across a network
//! call, so several actions may be in flight at once. The loading set, the
//! single edit slot and the fetch generation are the only coordination.

use shared::{CountSummary, PaginatedResponse, Venue, VenueId};
use tokio::sync::RwLock;
use venue_client::{ClientError, VenueApi};

use crate::detail::DetailView;
use crate::edit::{EditField, EditPhase, EditSession};
use crate::error::{ConsoleError, ConsoleResult};
use crate::listing::{FetchOutcome, FilterMode, ListingFilter, ListingState, ListingView};
use crate::review::{Decision, LoadingSet};
use crate::summary::Summary;
use crate::table::VenueRow;

/// Everything the console shows
#[derive(Debug, Clone, Default)]
pub struct ConsoleState {
    pub listing: ListingState,
    pub counts: Option<CountSummary>,
    /// Failed count read; kept apart from the list error so a list
    /// refresh does not hide it
    pub count_error: Option<String>,
    pub loading_ids: LoadingSet,
    pub edit: Option<EditSession>,
    /// Record selected for the detail view
    pub selected: Option<VenueId>,
    count_generation: u64,
}

impl ConsoleState {
    pub fn summary(&self) -> Summary {
        Summary::of(self.listing.venues())
    }

    /// Page-level read error: the list's, else the count summary's
    pub fn page_error(&self) -> Option<&str> {
        self.listing
            .error
            .as_deref()
            .or(self.count_error.as_deref())
    }

    pub fn editing_id(&self) -> Option<VenueId> {
        self.edit.as_ref().map(EditSession::venue_id)
    }

    /// Detail view of the selected record (canonical fields for duplicates)
    pub fn detail(&self) -> Option<DetailView> {
        let venue = self
            .selected
            .and_then(|id| self.listing.find(id))
            .map(Venue::display_source);
        DetailView::build(self.selected.is_some(), venue)
    }

    /// Display rows of the current page
    pub fn rows(&self) -> Vec<VenueRow> {
        let editing = self.editing_id();
        self.listing
            .page()
            .data
            .iter()
            .map(|venue| {
                VenueRow::new(
                    venue,
                    self.loading_ids.contains(venue.hotel_id),
                    editing == Some(venue.hotel_id),
                )
            })
            .collect()
    }
}

/// Text shown for a failed read
fn read_error_message(err: &ClientError) -> String {
    err.to_string()
}

/// Moderation console over a `VenueApi`
pub struct Console<A> {
    api: A,
    state: RwLock<ConsoleState>,
}

impl<A: VenueApi> Console<A> {
    pub fn new(api: A) -> Self {
        Self::with_listing(api, ListingState::new(ListingView::Review, FilterMode::Server))
    }

    /// Start from a preconfigured listing (view, mode, filters, page size)
    pub fn with_listing(api: A, listing: ListingState) -> Self {
        Self {
            api,
            state: RwLock::new(ConsoleState {
                listing,
                ..ConsoleState::default()
            }),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Copy of the current state
    pub async fn snapshot(&self) -> ConsoleState {
        self.state.read().await.clone()
    }

    pub async fn venues(&self) -> Vec<Venue> {
        self.state.read().await.listing.venues().to_vec()
    }

    pub async fn summary(&self) -> Summary {
        self.state.read().await.summary()
    }

    pub async fn page(&self) -> PaginatedResponse<Venue> {
        self.state.read().await.listing.page()
    }

    pub async fn set_page(&self, page: u32) {
        self.state.write().await.listing.set_page(page);
    }

    // ========== Listing ==========

    /// Initial load: count summary plus the list
    pub async fn load(&self) -> ConsoleResult<()> {
        let mobile = {
            let state = self.state.read().await;
            state.listing.filter.full_mobile().map(str::to_string)
        };
        let counts = self.refresh_counts(mobile.as_deref()).await;
        let list = self.refresh().await;
        counts.and(list)
    }

    /// Fetch the list for the current view and filters
    pub async fn refresh(&self) -> ConsoleResult<()> {
        let plan = self.state.write().await.listing.begin_fetch();
        let result = match plan.view {
            ListingView::Review => self.api.list_venues(&plan.query).await,
            ListingView::Locations => self.api.verified_venues().await,
        };

        let mut state = self.state.write().await;
        match result {
            Ok(venues) => {
                if state.listing.finish_fetch(plan.generation, Ok(venues)) == FetchOutcome::Stale {
                    tracing::warn!(generation = plan.generation, "discarded stale list response");
                } else {
                    tracing::debug!(count = state.listing.venues().len(), "list refreshed");
                }
                Ok(())
            }
            Err(err) => {
                let message = read_error_message(&err);
                if state.listing.finish_fetch(plan.generation, Err(message)) == FetchOutcome::Stale {
                    tracing::warn!(generation = plan.generation, "discarded stale list error");
                    return Ok(());
                }
                tracing::warn!(error = %err, "failed to fetch venues");
                Err(err.into())
            }
        }
    }

    /// Fetch the count summary, globally or for one submitter
    pub async fn refresh_counts(&self, mobile: Option<&str>) -> ConsoleResult<()> {
        let generation = {
            let mut state = self.state.write().await;
            state.count_generation += 1;
            state.count_generation
        };
        let result = self.api.count(mobile).await;

        let mut state = self.state.write().await;
        if state.count_generation != generation {
            tracing::warn!(generation, "discarded stale count response");
            return Ok(());
        }
        match result {
            Ok(counts) => {
                state.counts = Some(counts);
                state.count_error = None;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch counts");
                // Earlier counts belong to another query
                state.counts = None;
                state.count_error = Some(read_error_message(&err));
                Err(err.into())
            }
        }
    }

    /// Update the search term.
    ///
    /// A blank term always refetches the unfiltered list (and the global
    /// count); a full 10-digit number also fetches that submitter's count.
    pub async fn set_search(&self, term: impl Into<String>) -> ConsoleResult<()> {
        let (mode, blank, mobile) = {
            let mut state = self.state.write().await;
            let filter = &mut state.listing.filter;
            filter.search = term.into();
            if filter.search_term().is_none() {
                filter.search.clear();
            }
            state.listing.set_page(1);
            (
                state.listing.filter_mode(),
                state.listing.filter.search_term().is_none(),
                state.listing.filter.full_mobile().map(str::to_string),
            )
        };

        if blank {
            let counts = self.refresh_counts(None).await;
            let list = self.refresh().await;
            return counts.and(list);
        }
        let counts = match mobile {
            Some(mobile) => self.refresh_counts(Some(&mobile)).await,
            None => Ok(()),
        };
        let list = self.apply_filter(mode).await;
        counts.and(list)
    }

    /// Filter on a creation day; `None` refetches
    pub async fn set_created_date(&self, date: Option<chrono::NaiveDate>) -> ConsoleResult<()> {
        let mode = {
            let mut state = self.state.write().await;
            state.listing.filter.created_date = date;
            state.listing.set_page(1);
            state.listing.filter_mode()
        };
        if date.is_none() {
            return self.refresh().await;
        }
        self.apply_filter(mode).await
    }

    /// Toggle the verified-only flag (always refetches)
    pub async fn set_verified_only(&self, only: bool) -> ConsoleResult<()> {
        {
            let mut state = self.state.write().await;
            state.listing.filter.verified_only = only;
            state.listing.set_page(1);
        }
        self.refresh().await
    }

    pub async fn filter(&self) -> ListingFilter {
        self.state.read().await.listing.filter.clone()
    }

    async fn apply_filter(&self, mode: FilterMode) -> ConsoleResult<()> {
        match mode {
            FilterMode::Server => self.refresh().await,
            FilterMode::Local => {
                self.state.write().await.listing.apply_local_filter();
                Ok(())
            }
        }
    }

    // ========== Detail ==========

    /// Open the detail view. Refused for the row being edited.
    pub async fn select(&self, id: VenueId) -> ConsoleResult<bool> {
        let mut state = self.state.write().await;
        if state.listing.find(id).is_none() {
            return Err(ConsoleError::UnknownVenue(id));
        }
        if state.editing_id() == Some(id) {
            return Ok(false);
        }
        state.selected = Some(id);
        Ok(true)
    }

    pub async fn close_detail(&self) {
        self.state.write().await.selected = None;
    }

    pub async fn detail(&self) -> Option<DetailView> {
        self.state.read().await.detail()
    }

    // ========== Approve / Reject ==========

    pub async fn approve(&self, id: VenueId) -> ConsoleResult<()> {
        self.review(id, Decision::Approve).await
    }

    pub async fn reject(&self, id: VenueId) -> ConsoleResult<()> {
        self.review(id, Decision::Reject).await
    }

    /// Send a review decision. The id is busy until the call returns; on
    /// success the list is refetched.
    pub async fn review(&self, id: VenueId, decision: Decision) -> ConsoleResult<()> {
        let request = {
            let mut state = self.state.write().await;
            let venue = state
                .listing
                .find(id)
                .ok_or(ConsoleError::UnknownVenue(id))?;
            let request = decision.request_for(venue);
            if !state.loading_ids.acquire(id) {
                return Err(ConsoleError::Busy(id));
            }
            request
        };

        let result = self.api.verify(&request).await;
        self.state.write().await.loading_ids.release(id);

        match result {
            Ok(()) => {
                tracing::info!(hotel_id = id, "Hotel {}", decision.past_tense());
                if let Err(err) = self.refresh().await {
                    tracing::warn!(error = %err, "refetch after review failed");
                }
                Ok(())
            }
            Err(err) => {
                tracing::warn!(hotel_id = id, error = %err, "review failed");
                Err(err.into())
            }
        }
    }

    // ========== Inline Edit ==========

    /// Put `id` into edit. Refused while another row holds the slot.
    pub async fn begin_edit(&self, id: VenueId) -> ConsoleResult<()> {
        let mut state = self.state.write().await;
        match state.editing_id() {
            Some(current) if current == id => return Ok(()),
            Some(current) => return Err(ConsoleError::EditInProgress(current)),
            None => {}
        }
        let venue = state
            .listing
            .find(id)
            .ok_or(ConsoleError::UnknownVenue(id))?;
        let session = EditSession::begin(venue);
        state.edit = Some(session);
        Ok(())
    }

    pub async fn set_field(&self, field: EditField, value: &str) -> ConsoleResult<()> {
        let mut state = self.state.write().await;
        let session = state.edit.as_mut().ok_or(ConsoleError::NotEditing)?;
        session.set_field(field, value)
    }

    /// Scratch copy of the row being edited
    pub async fn scratch(&self) -> Option<Venue> {
        self.state
            .read()
            .await
            .edit
            .as_ref()
            .map(|s| s.scratch().clone())
    }

    /// Discard the scratch copy; no network call
    pub async fn cancel_edit(&self) -> ConsoleResult<()> {
        let mut state = self.state.write().await;
        if let Some(session) = &state.edit
            && session.phase() == EditPhase::Saving
        {
            return Err(ConsoleError::Busy(session.venue_id()));
        }
        state.edit = None;
        Ok(())
    }

    /// Send the scratch copy to `PUT /updateHotel`.
    ///
    /// Success replaces the row and refetches; failure restores the list as
    /// it was when the save started. Either way the edit slot is cleared.
    pub async fn save_edit(&self) -> ConsoleResult<()> {
        let (id, body) = {
            let mut state = self.state.write().await;
            let id = state.editing_id().ok_or(ConsoleError::NotEditing)?;
            if state.loading_ids.contains(id) {
                return Err(ConsoleError::Busy(id));
            }
            let current = state.listing.venues().to_vec();
            let session = state.edit.as_mut().ok_or(ConsoleError::NotEditing)?;
            let body = session.start_save(&current)?;
            state.loading_ids.acquire(id);
            (id, body)
        };

        let result = self.api.update_venue(&body).await;

        {
            let mut state = self.state.write().await;
            state.loading_ids.release(id);
            let session = state.edit.take();
            match &result {
                Ok(()) => {
                    state.listing.replace(body);
                }
                Err(_) => {
                    if let Some(session) = session {
                        state.listing.restore(session.into_rollback());
                    }
                }
            }
        }

        match result {
            Ok(()) => {
                tracing::info!(hotel_id = id, "Hotel updated");
                if let Err(err) = self.refresh().await {
                    tracing::warn!(error = %err, "refetch after update failed");
                }
                Ok(())
            }
            Err(err) => {
                tracing::warn!(hotel_id = id, error = %err, "update failed");
                Err(err.into())
            }
        }
    }
}
