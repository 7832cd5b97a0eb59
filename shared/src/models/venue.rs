//! Venue Model
//!
//! A crowd-sourced restaurant/hotel listing submission. The remote API calls
//! this entity "hotel"; keys are camelCase on the wire.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::util::{lenient_f64, lenient_u64, parse_day};

/// Venue identifier (`hotelId`)
pub type VenueId = i64;

/// Venue entity
///
/// Keys the model does not know about are kept in `extra` and written back
/// unchanged, so a full-record update never drops server data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub hotel_id: VenueId,
    /// Phone number of the person who submitted the listing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_mobile_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_city: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub hotel_rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_map_location_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_vlog_video_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    /// Platform tag of the vlog (e.g. "youtube", "instagram")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_platform: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_u64",
        skip_serializing_if = "Option::is_none"
    )]
    pub vlog_video_view_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vlog_post_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_category: Option<VenueCategory>,
    #[serde(
        default,
        deserialize_with = "lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub latitude: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub longitude: Option<f64>,
    /// Staff has made an approve/reject decision
    #[serde(default)]
    pub verified: bool,
    /// Decision outcome (true = approved)
    #[serde(default)]
    pub valid: bool,
    /// Set when the submission duplicates an existing vlog; `hotel` then
    /// holds the canonical record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duplicate_video_data: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel: Option<Box<Venue>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hotel_signature_dishes: Vec<SignatureDish>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hotel_timings: Vec<VenueTiming>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Venue {
    /// Create an empty record with only an identifier
    pub fn new(hotel_id: VenueId) -> Self {
        Self {
            hotel_id,
            user_mobile_number: None,
            hotel_name: None,
            hotel_address: None,
            hotel_city: None,
            hotel_rating: None,
            hotel_phone: None,
            hotel_map_location_link: None,
            hotel_vlog_video_link: None,
            video_id: None,
            video_platform: None,
            vlog_video_view_count: None,
            vlog_post_date: None,
            created_date: None,
            hotel_category: None,
            latitude: None,
            longitude: None,
            verified: false,
            valid: false,
            duplicate_video_data: None,
            hotel: None,
            hotel_signature_dishes: Vec::new(),
            hotel_timings: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn is_duplicate(&self) -> bool {
        self.duplicate_video_data.unwrap_or(false)
    }

    /// Record whose fields should be displayed for this row.
    ///
    /// Duplicates point at a nested canonical record; everything else shows
    /// its own fields.
    pub fn display_source(&self) -> &Venue {
        match (&self.hotel, self.is_duplicate()) {
            (Some(canonical), true) => canonical,
            _ => self,
        }
    }

    /// Calendar day (UTC) the submission was created, if parsable
    pub fn created_day(&self) -> Option<NaiveDate> {
        self.created_date.as_deref().and_then(parse_day)
    }

    /// Substring match on the submitter's phone number.
    ///
    /// Records without a number only match the empty needle.
    pub fn matches_mobile(&self, needle: &str) -> bool {
        self.user_mobile_number
            .as_deref()
            .unwrap_or_default()
            .contains(needle)
    }

    /// Pending review: no approve/reject decision yet
    pub fn is_pending(&self) -> bool {
        !self.verified
    }

    /// Rejected: reviewed and found invalid
    pub fn is_rejected(&self) -> bool {
        self.verified && !self.valid
    }
}

/// Signature dish entry shown in the detail view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureDish {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_signature_dish_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dish_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub dish_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dish_category: Option<String>,
}

/// Operating timings of a venue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueTiming {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub morning: Option<TimingValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noon: Option<TimingValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evening: Option<TimingValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub late_night: Option<TimingValue>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VenueTiming {
    /// Late-night opening as displayed ("Yes"/"No")
    pub fn late_night_label(&self) -> &'static str {
        if self.late_night.as_ref().is_some_and(TimingValue::is_truthy) {
            "Yes"
        } else {
            "No"
        }
    }
}

/// A timing slot is either a flag or a free-text range ("9am - 11am")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimingValue {
    Flag(bool),
    Text(String),
}

impl TimingValue {
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Text(text) => !text.is_empty(),
        }
    }
}

impl fmt::Display for TimingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(true) => f.write_str("Yes"),
            Self::Flag(false) => f.write_str("No"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Venue category
///
/// Values outside the known set are preserved verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VenueCategory {
    NonVeg,
    Veg,
    Beverage,
    Cafe,
    Snacks,
    FastFood,
    Deserts,
    RestoBar,
    Other(String),
}

impl VenueCategory {
    pub const KNOWN: [VenueCategory; 8] = [
        Self::NonVeg,
        Self::Veg,
        Self::Beverage,
        Self::Cafe,
        Self::Snacks,
        Self::FastFood,
        Self::Deserts,
        Self::RestoBar,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::NonVeg => "NonVeg",
            Self::Veg => "Veg",
            Self::Beverage => "Beverage",
            Self::Cafe => "Cafe",
            Self::Snacks => "Snacks",
            Self::FastFood => "Fast Food",
            Self::Deserts => "Deserts",
            Self::RestoBar => "RestoBar",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for VenueCategory {
    fn from(raw: String) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|known| known.as_str() == raw)
            .unwrap_or(Self::Other(raw))
    }
}

impl From<VenueCategory> for String {
    fn from(category: VenueCategory) -> Self {
        match category {
            VenueCategory::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for VenueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
