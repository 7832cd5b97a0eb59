//! In-memory `VenueApi` for unit tests

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use http::StatusCode;
use serde_json::json;
use shared::{CountSummary, Venue, VenueQuery, VerifyRequest};
use tokio::sync::{Notify, Semaphore};
use venue_client::{ClientError, ClientResult, VenueApi};

/// Four submissions: two pending (one a duplicate of the other), two
/// approved.
pub fn sample_venues() -> Vec<Venue> {
    serde_json::from_value(json!([
        {
            "hotelId": 1,
            "userMobileNumber": "9876543210",
            "hotelName": "Spice Route",
            "hotelCity": "Pune",
            "hotelMapLocationLink": "https://maps.google.com/?q=spice",
            "createdDate": "2024-09-01T10:00:00.000Z",
            "verified": false,
            "valid": false,
            "hotelSignatureDishes": [
                {"hotelSignatureDishId": 11, "dishName": "Misal", "dishPrice": 120, "dishCategory": "Veg"}
            ],
            "hotelTimings": [{"morning": "8-11", "noon": "12-3", "evening": "7-11", "lateNight": true}]
        },
        {
            "hotelId": 2,
            "userMobileNumber": "9123456780",
            "hotelName": "Chai Point",
            "hotelCity": "Mumbai",
            "hotelRating": 4.1,
            "createdDate": "2024-09-01T18:30:00.000Z",
            "verified": true,
            "valid": true
        },
        {
            "hotelId": 3,
            "userMobileNumber": "9876500000",
            "hotelName": "Spice Route (repost)",
            "createdDate": "2024-09-02T08:00:00.000Z",
            "verified": false,
            "valid": false,
            "duplicateVideoData": true,
            "hotel": {"hotelId": 1, "hotelName": "Spice Route", "hotelCity": "Pune"}
        },
        {
            "hotelId": 4,
            "userMobileNumber": "9000000000",
            "hotelName": "Brew Lab",
            "hotelCategory": "Cafe",
            "createdDate": "2024-09-03T12:00:00.000Z",
            "verified": true,
            "valid": true
        }
    ]))
    .expect("sample venues")
}

/// Parks a call until released
pub struct Gate {
    entered: Notify,
    release: Semaphore,
}

impl Gate {
    fn new() -> Self {
        Self {
            entered: Notify::new(),
            release: Semaphore::new(0),
        }
    }

    /// Wait until a call is parked at the gate
    pub async fn wait_entered(&self) {
        self.entered.notified().await;
    }

    pub fn release(&self) {
        self.release.add_permits(1);
    }
}

#[derive(Default)]
pub struct FakeApi {
    venues: Mutex<Vec<Venue>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    fail_counts: AtomicBool,
    list_calls: Mutex<Vec<VenueQuery>>,
    count_calls: Mutex<Vec<Option<String>>>,
    verify_calls: Mutex<Vec<VerifyRequest>>,
    update_calls: Mutex<Vec<Venue>>,
    write_gate: Mutex<Option<Arc<Gate>>>,
    read_gate: Mutex<Option<Arc<Gate>>>,
}

impl FakeApi {
    pub fn new(venues: Vec<Venue>) -> Self {
        Self {
            venues: Mutex::new(venues),
            ..Self::default()
        }
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Count reads fail while list reads keep working
    pub fn fail_counts(&self, fail: bool) {
        self.fail_counts.store(fail, Ordering::SeqCst);
    }

    /// Park every write until released
    pub fn hold_writes(&self) -> Arc<Gate> {
        let gate = Arc::new(Gate::new());
        *self.write_gate.lock().unwrap() = Some(Arc::clone(&gate));
        gate
    }

    /// Park the next list read only; later reads pass straight through
    pub fn hold_next_read(&self) -> Arc<Gate> {
        let gate = Arc::new(Gate::new());
        *self.read_gate.lock().unwrap() = Some(Arc::clone(&gate));
        gate
    }

    pub fn list_calls(&self) -> Vec<VenueQuery> {
        self.list_calls.lock().unwrap().clone()
    }

    pub fn count_calls(&self) -> Vec<Option<String>> {
        self.count_calls.lock().unwrap().clone()
    }

    pub fn verify_calls(&self) -> Vec<VerifyRequest> {
        self.verify_calls.lock().unwrap().clone()
    }

    pub fn update_calls(&self) -> Vec<Venue> {
        self.update_calls.lock().unwrap().clone()
    }

    fn server_error() -> ClientError {
        ClientError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "fake failure".into(),
        }
    }

    fn check_reads(&self) -> ClientResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(Self::server_error());
        }
        Ok(())
    }

    async fn pass(gate: Option<Arc<Gate>>) -> ClientResult<()> {
        if let Some(gate) = gate {
            gate.entered.notify_one();
            gate.release
                .acquire()
                .await
                .map_err(|e| ClientError::Internal(e.to_string()))?
                .forget();
        }
        Ok(())
    }

    async fn pass_write_gate(&self) -> ClientResult<()> {
        let gate = self.write_gate.lock().unwrap().clone();
        Self::pass(gate).await?;
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::server_error());
        }
        Ok(())
    }
}

#[async_trait]
impl VenueApi for FakeApi {
    async fn list_venues(&self, query: &VenueQuery) -> ClientResult<Vec<Venue>> {
        self.list_calls.lock().unwrap().push(query.clone());
        let gate = self.read_gate.lock().unwrap().take();
        Self::pass(gate).await?;
        self.check_reads()?;
        let venues = self.venues.lock().unwrap();
        Ok(venues
            .iter()
            .filter(|v| {
                query
                    .user_mobile_number
                    .as_deref()
                    .is_none_or(|m| v.matches_mobile(m))
            })
            .filter(|v| query.created_date.is_none_or(|d| v.created_day() == Some(d)))
            .filter(|v| query.verified.is_none_or(|flag| v.verified == flag))
            .cloned()
            .collect())
    }

    async fn verified_venues(&self) -> ClientResult<Vec<Venue>> {
        self.check_reads()?;
        let venues = self.venues.lock().unwrap();
        Ok(venues.iter().filter(|v| v.verified).cloned().collect())
    }

    async fn count(&self, mobile: Option<&str>) -> ClientResult<CountSummary> {
        self.count_calls
            .lock()
            .unwrap()
            .push(mobile.map(str::to_string));
        self.check_reads()?;
        if self.fail_counts.load(Ordering::SeqCst) {
            return Err(Self::server_error());
        }
        let venues = self.venues.lock().unwrap();
        let mine: Vec<&Venue> = venues
            .iter()
            .filter(|v| mobile.is_none_or(|m| v.user_mobile_number.as_deref() == Some(m)))
            .collect();
        let value = json!({
            "total": mine.len(),
            "verified": mine.iter().filter(|v| v.verified).count(),
            "valid": mine.iter().filter(|v| v.valid).count(),
        });
        Ok(serde_json::from_value(value)?)
    }

    async fn verify(&self, request: &VerifyRequest) -> ClientResult<()> {
        self.verify_calls.lock().unwrap().push(request.clone());
        self.pass_write_gate().await?;
        let mut venues = self.venues.lock().unwrap();
        if let Some(venue) = venues.iter_mut().find(|v| v.hotel_id == request.hotel_id) {
            venue.verified = request.verified;
            venue.valid = request.valid;
        }
        Ok(())
    }

    async fn update_venue(&self, venue: &Venue) -> ClientResult<()> {
        self.update_calls.lock().unwrap().push(venue.clone());
        self.pass_write_gate().await?;
        let mut venues = self.venues.lock().unwrap();
        if let Some(slot) = venues.iter_mut().find(|v| v.hotel_id == venue.hotel_id) {
            *slot = venue.clone();
        }
        Ok(())
    }
}
