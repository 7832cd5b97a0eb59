//! Typed wrapper over the moderation API endpoints

use async_trait::async_trait;
use shared::{CountSummary, Venue, VenueQuery, VerifyRequest};
use url::form_urlencoded;

use crate::{ClientResult, HttpClient};

/// Endpoint paths (relative to the base URL)
pub mod paths {
    pub const HOTELS: &str = "gethotels";
    pub const VERIFIED_HOTELS: &str = "getVerifiedHotels";
    pub const COUNT: &str = "count";
    pub const VERIFY: &str = "verify";
    pub const UPDATE_HOTEL: &str = "updateHotel";
}

/// Operations the console needs from the remote API
#[async_trait]
pub trait VenueApi: Send + Sync {
    /// `GET /gethotels` with optional filters
    async fn list_venues(&self, query: &VenueQuery) -> ClientResult<Vec<Venue>>;

    /// `GET /getVerifiedHotels`
    async fn verified_venues(&self) -> ClientResult<Vec<Venue>>;

    /// `GET /count` or `GET /count/<mobile>`
    async fn count(&self, mobile: Option<&str>) -> ClientResult<CountSummary>;

    /// `PUT /verify`
    async fn verify(&self, request: &VerifyRequest) -> ClientResult<()>;

    /// `PUT /updateHotel` with the full record
    async fn update_venue(&self, venue: &Venue) -> ClientResult<()>;
}

/// `VenueApi` backed by an `HttpClient` transport
#[derive(Debug, Clone)]
pub struct VenueService<C> {
    http: C,
}

impl<C: HttpClient> VenueService<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &C {
        &self.http
    }
}

/// Path for the count endpoint; a blank number means the global count.
pub fn count_path(mobile: Option<&str>) -> String {
    match mobile.map(str::trim).filter(|m| !m.is_empty()) {
        Some(mobile) => {
            // form encoding turns spaces into '+', which is not a path escape
            let segment: String = form_urlencoded::byte_serialize(mobile.as_bytes())
                .collect::<String>()
                .replace('+', "%20");
            format!("{}/{}", paths::COUNT, segment)
        }
        None => paths::COUNT.to_string(),
    }
}

#[async_trait]
impl<C: HttpClient> VenueApi for VenueService<C> {
    async fn list_venues(&self, query: &VenueQuery) -> ClientResult<Vec<Venue>> {
        self.http.get(&query.apply_to(paths::HOTELS)).await
    }

    async fn verified_venues(&self) -> ClientResult<Vec<Venue>> {
        self.http.get(paths::VERIFIED_HOTELS).await
    }

    async fn count(&self, mobile: Option<&str>) -> ClientResult<CountSummary> {
        self.http.get(&count_path(mobile)).await
    }

    async fn verify(&self, request: &VerifyRequest) -> ClientResult<()> {
        self.http.put_ack(paths::VERIFY, request).await
    }

    async fn update_venue(&self, venue: &Venue) -> ClientResult<()> {
        self.http.put_ack(paths::UPDATE_HOTEL, venue).await
    }
}
