//! Fleet statistics derived from the vehicles payload.

use crate::client::{TrackingRecord, Vehicle, STATUS_AVAILABLE, STATUS_IN_TRANSIT};

/// Counter-widget values for one refresh cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetStats {
    pub total: usize,
    pub active: usize,
    pub idle: usize,
    /// round(active / total * 100), 0 for an empty fleet
    pub efficiency_pct: u32,
}

impl FleetStats {
    pub fn from_vehicles(vehicles: &[Vehicle]) -> Self {
        let total = vehicles.len();
        let active = vehicles
            .iter()
            .filter(|v| v.status == STATUS_IN_TRANSIT)
            .count();
        let idle = vehicles
            .iter()
            .filter(|v| v.status == STATUS_AVAILABLE)
            .count();
        let efficiency_pct = if total == 0 {
            0
        } else {
            ((active as f64 / total as f64) * 100.0).round() as u32
        };

        Self {
            total,
            active,
            idle,
            efficiency_pct,
        }
    }
}

/// Vehicle count per status, in first-seen order.
pub fn status_counts(vehicles: &[Vehicle]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for vehicle in vehicles {
        match counts.iter_mut().find(|(status, _)| *status == vehicle.status) {
            Some((_, count)) => *count += 1,
            None => counts.push((vehicle.status.clone(), 1)),
        }
    }
    counts
}

/// Tracking-record count per trip status, in first-seen order.
pub fn trip_status_counts(records: &[TrackingRecord]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for record in records {
        match counts
            .iter_mut()
            .find(|(status, _)| *status == record.trip_status)
        {
            Some((_, count)) => *count += 1,
            None => counts.push((record.trip_status.clone(), 1)),
        }
    }
    counts
}
