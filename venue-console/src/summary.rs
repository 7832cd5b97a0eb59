//! Summary counters over the current list

use shared::Venue;

/// Total / verified / valid counts of a list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub verified: usize,
    pub valid: usize,
}

impl Summary {
    pub fn of(venues: &[Venue]) -> Self {
        venues.iter().fold(Self::default(), |acc, venue| Self {
            total: acc.total + 1,
            verified: acc.verified + usize::from(venue.verified),
            valid: acc.valid + usize::from(venue.valid),
        })
    }
}
