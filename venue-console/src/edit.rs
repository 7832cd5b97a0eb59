//! Inline edit: a single scratch slot shared by all rows
//!
//! `Viewing -> Editing -> {Saving -> Viewing | Cancelled -> Viewing}`.
//! Field changes touch only the scratch copy; the list is changed once a
//! save is confirmed.

use std::fmt;
use std::str::FromStr;

use shared::{Venue, VenueId};

use crate::error::{ConsoleError, ConsoleResult};

/// Fields editable inline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Name,
    Address,
    City,
    Rating,
    Phone,
    MapLink,
    VlogLink,
    ViewCount,
    PostDate,
    Latitude,
    Longitude,
}

impl EditField {
    pub const ALL: [EditField; 11] = [
        Self::Name,
        Self::Address,
        Self::City,
        Self::Rating,
        Self::Phone,
        Self::MapLink,
        Self::VlogLink,
        Self::ViewCount,
        Self::PostDate,
        Self::Latitude,
        Self::Longitude,
    ];

    /// Wire key of the field
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "hotelName",
            Self::Address => "hotelAddress",
            Self::City => "hotelCity",
            Self::Rating => "hotelRating",
            Self::Phone => "hotelPhone",
            Self::MapLink => "hotelMapLocationLink",
            Self::VlogLink => "hotelVlogVideoLink",
            Self::ViewCount => "vlogVideoViewCount",
            Self::PostDate => "vlogPostDate",
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
        }
    }

    /// Write `value` into `venue`. Numeric fields reject unparsable text; a
    /// blank value clears them.
    pub fn apply(self, venue: &mut Venue, value: &str) -> ConsoleResult<()> {
        let text = Some(value.to_string());
        match self {
            Self::Name => venue.hotel_name = text,
            Self::Address => venue.hotel_address = text,
            Self::City => venue.hotel_city = text,
            Self::Phone => venue.hotel_phone = text,
            Self::MapLink => venue.hotel_map_location_link = text,
            Self::VlogLink => venue.hotel_vlog_video_link = text,
            Self::PostDate => venue.vlog_post_date = text,
            Self::Rating => venue.hotel_rating = self.parse_float(value)?,
            Self::Latitude => venue.latitude = self.parse_float(value)?,
            Self::Longitude => venue.longitude = self.parse_float(value)?,
            Self::ViewCount => venue.vlog_video_view_count = self.parse(value)?,
        }
        Ok(())
    }

    /// Finite number within the field's range; `NaN` and infinities are
    /// refused.
    fn parse_float(self, value: &str) -> ConsoleResult<Option<f64>> {
        let parsed: Option<f64> = self.parse(value)?;
        let (min, max) = match self {
            Self::Latitude => (-90.0, 90.0),
            Self::Longitude => (-180.0, 180.0),
            _ => (f64::MIN, f64::MAX),
        };
        match parsed {
            Some(number) if !number.is_finite() || number < min || number > max => {
                Err(ConsoleError::InvalidValue {
                    field: self.key(),
                    value: value.to_string(),
                })
            }
            other => Ok(other),
        }
    }

    fn parse<T: FromStr>(self, value: &str) -> ConsoleResult<Option<T>> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        trimmed
            .parse()
            .map(Some)
            .map_err(|_| ConsoleError::InvalidValue {
                field: self.key(),
                value: value.to_string(),
            })
    }
}

impl FromStr for EditField {
    type Err = ConsoleError;

    /// Accepts the wire key (`hotelName`) or a short alias (`name`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field = match s {
            "hotelName" | "name" => Self::Name,
            "hotelAddress" | "address" => Self::Address,
            "hotelCity" | "city" => Self::City,
            "hotelRating" | "rating" => Self::Rating,
            "hotelPhone" | "phone" => Self::Phone,
            "hotelMapLocationLink" | "map" => Self::MapLink,
            "hotelVlogVideoLink" | "vlog" => Self::VlogLink,
            "vlogVideoViewCount" | "views" => Self::ViewCount,
            "vlogPostDate" | "posted" => Self::PostDate,
            "latitude" | "lat" => Self::Latitude,
            "longitude" | "lng" => Self::Longitude,
            other => return Err(ConsoleError::InvalidField(other.to_string())),
        };
        Ok(field)
    }
}

impl fmt::Display for EditField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditPhase {
    Editing,
    /// Update request in flight; the scratch copy is frozen
    Saving,
}

/// The scratch slot
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    venue_id: VenueId,
    scratch: Venue,
    /// List as it was when the save started; restored if the save fails
    rollback: Vec<Venue>,
    phase: EditPhase,
}

impl EditSession {
    /// Snapshot `venue` into the scratch slot
    pub fn begin(venue: &Venue) -> Self {
        Self {
            venue_id: venue.hotel_id,
            scratch: venue.clone(),
            rollback: Vec::new(),
            phase: EditPhase::Editing,
        }
    }

    pub fn venue_id(&self) -> VenueId {
        self.venue_id
    }

    pub fn scratch(&self) -> &Venue {
        &self.scratch
    }

    pub fn phase(&self) -> EditPhase {
        self.phase
    }

    pub fn set_field(&mut self, field: EditField, value: &str) -> ConsoleResult<()> {
        if self.phase == EditPhase::Saving {
            return Err(ConsoleError::Busy(self.venue_id));
        }
        field.apply(&mut self.scratch, value)
    }

    /// Freeze the scratch copy, remember `list` for rollback and hand out
    /// the body to send
    pub fn start_save(&mut self, list: &[Venue]) -> ConsoleResult<Venue> {
        if self.phase == EditPhase::Saving {
            return Err(ConsoleError::Busy(self.venue_id));
        }
        self.phase = EditPhase::Saving;
        self.rollback = list.to_vec();
        Ok(self.scratch.clone())
    }

    pub fn into_rollback(self) -> Vec<Venue> {
        self.rollback
    }
}
