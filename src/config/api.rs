//! Fleet API endpoint configuration

use serde::{Deserialize, Serialize};

/// Where the fleet-management API lives and how to query it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the fleet service
    pub base_url: String,
    /// Per-request timeout
    pub timeout_seconds: u64,
    /// Depot latitude, used for the weather feed
    pub depot_lat: f64,
    /// Depot longitude, used for the weather feed
    pub depot_lng: f64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            timeout_seconds: 10,
            depot_lat: 28.7041,
            depot_lng: 77.1025,
        }
    }
}
