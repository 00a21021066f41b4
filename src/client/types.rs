//! Payload models for the fleet API feeds.
//!
//! These mirror the JSON contract owned by the fleet service. Optional
//! fields the service omits in fallback responses default rather than
//! failing the whole batch.

use serde::{Deserialize, Serialize};

/// Vehicle status value for a truck currently on the road.
pub const STATUS_IN_TRANSIT: &str = "In Transit";
/// Vehicle status value for an idle truck.
pub const STATUS_AVAILABLE: &str = "Available";

/// One record from `/api/trucks`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub truck_number: String,
    #[serde(default)]
    pub driver_name: String,
    #[serde(default)]
    pub current_location: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lng: f64,
}

fn default_status() -> String {
    STATUS_AVAILABLE.to_string()
}

/// Response of `/api/real_weather/{lat}/{lng}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub condition: String,
    pub temperature: f64,
    pub humidity: f64,
    /// Visibility in km; absent in the service's fallback payload.
    #[serde(default)]
    pub visibility: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Congestion level reported by `/api/traffic_status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrafficLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for TrafficLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrafficLevel::Low => write!(f, "Low"),
            TrafficLevel::Medium => write!(f, "Medium"),
            TrafficLevel::High => write!(f, "High"),
        }
    }
}

/// Response of `/api/traffic_status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficStatus {
    pub level: TrafficLevel,
    pub delay_minutes: f64,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Alert urgency from the maintenance feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    Critical,
    Warning,
    #[serde(other)]
    Routine,
}

/// One alert from `/api/maintenance_alerts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceAlert {
    #[serde(default)]
    pub component: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    pub urgency: Urgency,
    pub message: String,
    #[serde(default)]
    pub action: Option<String>,
}

/// Response of `/api/maintenance_alerts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceReport {
    #[serde(default)]
    pub alerts: Vec<MaintenanceAlert>,
    #[serde(default)]
    pub overall_health_score: Option<f64>,
}

impl MaintenanceReport {
    /// Number of critical alerts in the report.
    pub fn critical_count(&self) -> usize {
        self.alerts
            .iter()
            .filter(|a| a.urgency == Urgency::Critical)
            .count()
    }
}

/// One record from `/api/employee_tracking`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingRecord {
    pub employee_id: String,
    #[serde(default)]
    pub current_location: String,
    pub vehicle_number: String,
    pub trip_status: String,
    pub timestamp: String,
}

/// The five payloads of one refresh cycle.
///
/// Transient: owned by the tick that fetched it, dropped after rendering.
#[derive(Debug, Clone, Serialize)]
pub struct FleetSnapshot {
    pub vehicles: Vec<Vehicle>,
    pub weather: WeatherReport,
    pub traffic: TrafficStatus,
    pub maintenance: MaintenanceReport,
    pub tracking: Vec<TrackingRecord>,
}
