//! Live-update polling configuration

use serde::{Deserialize, Serialize};

/// Configuration for the live-update polling loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveUpdateConfig {
    /// Whether live updates start automatically
    pub enabled: bool,
    /// Milliseconds between refresh cycles
    pub interval_ms: u64,
    /// Counter animation duration; 0 sets widget values directly
    pub counter_animation_ms: u64,
}

impl Default for LiveUpdateConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_ms: 30_000,
            counter_animation_ms: 800,
        }
    }
}
