//! Job-search API client for SkillSwap.
//!
//! Speaks the RapidAPI jobs vendor protocol: GET with query/location
//! parameters and key/host auth headers. Response payload shapes have
//! drifted across vendor revisions, so extraction tolerates all known ones.

use std::time::Duration;

use log::{debug, warn};
use serde_json::Value;

use crate::types::errors::JobApiError;
use crate::types::listing::RawListing;

/// Default vendor host.
pub const DEFAULT_API_HOST: &str = "jobs-api14.p.rapidapi.com";

/// Uniform timeout applied to every outgoing request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Job-search API client.
pub struct JobApiClient {
    http: reqwest::Client,
    api_key: String,
    api_host: String,
}

impl JobApiClient {
    /// Creates a client for the default vendor host.
    pub fn new(api_key: impl Into<String>) -> Result<Self, JobApiError> {
        Self::with_host(api_key, DEFAULT_API_HOST)
    }

    /// Creates a client for a specific vendor host.
    pub fn with_host(
        api_key: impl Into<String>,
        api_host: impl Into<String>,
    ) -> Result<Self, JobApiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| JobApiError::ClientError(e.to_string()))?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            api_host: api_host.into(),
        })
    }

    /// Searches for listings matching a free-text query and location.
    ///
    /// Returns the raw upstream records; normalization happens in the
    /// manager so it stays testable without a network.
    pub async fn search(&self, query: &str, location: &str) -> Result<Vec<RawListing>, JobApiError> {
        let url = format!(
            "https://{}/v2/list?query={}&location={}&distance=1.0&language=en_GB&remoteOnly=false&datePosted=all&employmentTypes=fulltime%2Cparttime%2Cintern%2Cvolunteer&index=0",
            self.api_host,
            urlencoding::encode(query),
            urlencoding::encode(location),
        );
        debug!("job search: {} in {}", query, location);

        let response = self
            .http
            .get(&url)
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", &self.api_host)
            .send()
            .await
            .map_err(map_request_error)?;

        let payload: Value = response
            .json()
            .await
            .map_err(|e| JobApiError::InvalidResponse(e.to_string()))?;

        let listings = extract_listings(&payload);
        debug!("job search returned {} listings", listings.len());
        Ok(listings)
    }
}

fn map_request_error(e: reqwest::Error) -> JobApiError {
    if e.is_timeout() {
        warn!("job search request timed out");
        JobApiError::Timeout
    } else {
        JobApiError::NetworkError(e.to_string())
    }
}

/// Extracts listing records from any of the payload shapes seen across
/// vendor revisions: `{"jobs": [...]}`, a bare array, or `{"data": [...]}`.
/// Records that fail to deserialize are skipped rather than failing the set.
pub fn extract_listings(payload: &Value) -> Vec<RawListing> {
    let items = payload
        .get("jobs")
        .and_then(Value::as_array)
        .or_else(|| payload.as_array())
        .or_else(|| payload.get("data").and_then(Value::as_array));

    match items {
        Some(items) => items
            .iter()
            .filter_map(|item| serde_json::from_value(item.clone()).ok())
            .collect(),
        None => Vec::new(),
    }
}
