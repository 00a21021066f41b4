//! HTTP client for the fleet-management API.
//!
//! One typed fetcher per feed, plus [`FleetClient::fetch_snapshot`] which
//! issues all five concurrently and joins them with all-settled semantics:
//! every fetch runs to completion before the batch result is decided, and a
//! single failure fails the whole batch.

mod error;
mod types;

pub use error::ClientError;
pub use types::*;

use crate::config::ApiConfig;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Client for the fleet-management HTTP API.
pub struct FleetClient {
    base_url: String,
    depot_lat: f64,
    depot_lng: f64,
    timeout_seconds: u64,
    client: reqwest::Client,
}

impl FleetClient {
    /// Create a new client from the API configuration.
    pub fn new(config: &ApiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            depot_lat: config.depot_lat,
            depot_lng: config.depot_lng,
            timeout_seconds: config.timeout_seconds,
            client,
        }
    }

    /// Create a client with a custom HTTP client (for testing).
    pub fn with_client(config: &ApiConfig, client: reqwest::Client) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            depot_lat: config.depot_lat,
            depot_lng: config.depot_lng,
            timeout_seconds: config.timeout_seconds,
            client,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::from_reqwest(endpoint, e, self.timeout_seconds))?;

        if !response.status().is_success() {
            return Err(ClientError::Http {
                endpoint: endpoint.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| ClientError::Decode {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&body).map_err(|e| ClientError::Decode {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })
    }

    /// Fetch the vehicle list.
    pub async fn fetch_vehicles(&self) -> Result<Vec<Vehicle>, ClientError> {
        self.get_json("/api/trucks").await
    }

    /// Fetch current weather at the configured depot coordinates.
    pub async fn fetch_weather(&self) -> Result<WeatherReport, ClientError> {
        let endpoint = format!("/api/real_weather/{}/{}", self.depot_lat, self.depot_lng);
        self.get_json(&endpoint).await
    }

    /// Fetch the route traffic status.
    pub async fn fetch_traffic(&self) -> Result<TrafficStatus, ClientError> {
        self.get_json("/api/traffic_status").await
    }

    /// Fetch the predictive maintenance report.
    pub async fn fetch_maintenance(&self) -> Result<MaintenanceReport, ClientError> {
        self.get_json("/api/maintenance_alerts").await
    }

    /// Fetch the employee tracking records.
    pub async fn fetch_tracking(&self) -> Result<Vec<TrackingRecord>, ClientError> {
        self.get_json("/api/employee_tracking").await
    }

    /// Fetch all five feeds concurrently.
    ///
    /// Waits for every fetch to settle, then fails the batch on the first
    /// error. No partial snapshot is ever produced.
    pub async fn fetch_snapshot(&self) -> Result<FleetSnapshot, ClientError> {
        let (vehicles, weather, traffic, maintenance, tracking) = tokio::join!(
            self.fetch_vehicles(),
            self.fetch_weather(),
            self.fetch_traffic(),
            self.fetch_maintenance(),
            self.fetch_tracking(),
        );

        Ok(FleetSnapshot {
            vehicles: vehicles?,
            weather: weather?,
            traffic: traffic?,
            maintenance: maintenance?,
            tracking: tracking?,
        })
    }
}
