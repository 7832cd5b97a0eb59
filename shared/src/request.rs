//! Request types sent to the moderation API

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::models::VenueId;

/// Server-side filter for `GET /gethotels`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueQuery {
    /// Substring of the submitter's phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_mobile_number: Option<String>,
    /// Creation day, sent as `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<NaiveDate>,
    /// Only records with a review decision
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

impl VenueQuery {
    /// Unfiltered query
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_mobile(mut self, mobile: impl Into<String>) -> Self {
        let mobile = mobile.into();
        let trimmed = mobile.trim();
        self.user_mobile_number = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    pub fn with_created_date(mut self, date: Option<NaiveDate>) -> Self {
        self.created_date = date;
        self
    }

    pub fn verified_only(mut self, only: bool) -> Self {
        self.verified = only.then_some(true);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.user_mobile_number.is_none() && self.created_date.is_none() && self.verified.is_none()
    }

    /// URL-encoded query string without the leading `?` (empty when unfiltered)
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(mobile) = &self.user_mobile_number {
            serializer.append_pair("userMobileNumber", mobile);
        }
        if let Some(date) = &self.created_date {
            serializer.append_pair("createdDate", &date.format("%Y-%m-%d").to_string());
        }
        if let Some(verified) = self.verified {
            serializer.append_pair("verified", if verified { "true" } else { "false" });
        }
        serializer.finish()
    }

    /// Append this query to an endpoint path
    pub fn apply_to(&self, path: &str) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, query)
        }
    }
}

/// Review decision body for `PUT /verify`
///
/// `verified` is always true: approve and reject differ only in `valid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub hotel_id: VenueId,
    pub verified: bool,
    pub valid: bool,
    /// Duplicate flag passthrough
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel_video_data: Option<bool>,
}

impl VerifyRequest {
    pub fn decision(hotel_id: VenueId, valid: bool) -> Self {
        Self {
            hotel_id,
            verified: true,
            valid,
            hotel_video_data: None,
        }
    }

    pub fn approve(hotel_id: VenueId) -> Self {
        Self::decision(hotel_id, true)
    }

    pub fn reject(hotel_id: VenueId) -> Self {
        Self::decision(hotel_id, false)
    }

    pub fn with_duplicate_flag(mut self, flag: Option<bool>) -> Self {
        self.hotel_video_data = flag;
        self
    }
}
