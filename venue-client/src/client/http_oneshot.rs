// venue-client/src/client/http_oneshot.rs
// Oneshot HTTP client - in-memory calls into an axum Router
//
// Requires the "in-process" feature

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use crate::{ClientError, ClientResult};

use super::http::HttpClient;

/// Oneshot HTTP client (in-process)
///
/// Drives a Router through Tower's `oneshot`, so a backend living in the
/// same process (or a fake one in tests) is reached without a socket.
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use venue_client::{OneshotHttpClient, VenueService};
///
/// let router: Router = fake_backend();
/// let api = VenueService::new(OneshotHttpClient::new(router));
/// let venues = api.list_venues(&VenueQuery::all()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
    token: Option<String>,
}

impl OneshotHttpClient {
    /// Create a new in-process client
    ///
    /// # Arguments
    /// * `router` - Router with its state already applied
    pub fn new(router: Router) -> Self {
        Self {
            router,
            token: None,
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn build_request(&self, method: Method, path: &str, body: Body) -> ClientResult<Request<Body>> {
        let uri = format!("/{}", path.trim_start_matches('/'));
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = &self.token {
            builder = builder.header(http::header::AUTHORIZATION, format!("Bearer {}", token));
        }

        builder
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(body)
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {}", e)))
    }

    fn json_body<B: Serialize>(body: &B) -> ClientResult<Body> {
        Ok(Body::from(serde_json::to_vec(body)?))
    }

    /// Execute the request; returns the body of a successful response
    async fn execute(&self, request: Request<Body>) -> ClientResult<Vec<u8>> {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {}", e)))?;

        if !status.is_success() {
            tracing::warn!(%status, "request rejected");
            return Err(ClientError::Status {
                status,
                body: String::from_utf8_lossy(&body_bytes).into_owned(),
            });
        }

        Ok(body_bytes.to_vec())
    }

    fn decode<T: DeserializeOwned>(bytes: &[u8]) -> ClientResult<T> {
        serde_json::from_slice(bytes)
            .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::GET, path, Body::empty())?;
        let bytes = self.execute(request).await?;
        Self::decode(&bytes)
    }

    async fn put_ack<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<()> {
        let request = self.build_request(Method::PUT, path, Self::json_body(body)?)?;
        self.execute(request).await?;
        Ok(())
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;
    use axum::routing::{get, put};
    use http::StatusCode;

    fn router() -> Router {
        Router::new()
            .route("/ping", get(|| async { Json(serde_json::json!({"pong": true})) }))
            .route("/fail", put(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }))
    }

    #[tokio::test]
    async fn test_get_json() {
        let client = OneshotHttpClient::new(router());
        let value: serde_json::Value = client.get("ping").await.unwrap();
        assert_eq!(value["pong"], true);
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let client = OneshotHttpClient::new(router());
        let err = client.put_ack("/fail", &serde_json::json!({})).await.unwrap_err();
        match err {
            ClientError::Status { status, body } => {
                assert_eq!(status, StatusCode::BAD_GATEWAY);
                assert_eq!(body, "upstream down");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_unknown_route_is_failure() {
        let client = OneshotHttpClient::new(router());
        let err = client.get::<serde_json::Value>("missing").await.unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }
}
