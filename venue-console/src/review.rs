//! Approve / reject decisions and the in-flight ("loading") set

use std::collections::HashSet;

use shared::{Venue, VenueId, VerifyRequest};

/// Review decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    /// Value sent as `valid`
    pub fn valid(self) -> bool {
        matches!(self, Self::Approve)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Approve => "Approve",
            Self::Reject => "Reject",
        }
    }

    pub fn busy_label(self) -> &'static str {
        match self {
            Self::Approve => "Approving...",
            Self::Reject => "Rejecting...",
        }
    }

    pub fn past_tense(self) -> &'static str {
        match self {
            Self::Approve => "approved",
            Self::Reject => "rejected",
        }
    }

    /// `PUT /verify` body for `venue`
    pub fn request_for(self, venue: &Venue) -> VerifyRequest {
        VerifyRequest::decision(venue.hotel_id, self.valid())
            .with_duplicate_flag(venue.duplicate_video_data)
    }
}

/// Ids with a write in flight
#[derive(Debug, Clone, Default)]
pub struct LoadingSet {
    ids: HashSet<VenueId>,
}

impl LoadingSet {
    /// Mark `id` busy. Returns false if it already was.
    pub fn acquire(&mut self, id: VenueId) -> bool {
        self.ids.insert(id)
    }

    pub fn release(&mut self, id: VenueId) {
        self.ids.remove(&id);
    }

    pub fn contains(&self, id: VenueId) -> bool {
        self.ids.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_differ_only_in_valid() {
        let mut venue = Venue::new(9);
        venue.duplicate_video_data = Some(true);

        let approve = Decision::Approve.request_for(&venue);
        let reject = Decision::Reject.request_for(&venue);
        assert!(approve.verified && reject.verified);
        assert!(approve.valid);
        assert!(!reject.valid);
        assert_eq!(approve.hotel_id, reject.hotel_id);
        assert_eq!(approve.hotel_video_data, Some(true));
        assert_eq!(reject.hotel_video_data, Some(true));
    }

    #[test]
    fn test_loading_set() {
        let mut set = LoadingSet::default();
        assert!(set.acquire(1));
        assert!(!set.acquire(1));
        assert!(set.contains(1));
        set.release(1);
        assert!(!set.contains(1));
        assert!(set.is_empty());
    }
}
