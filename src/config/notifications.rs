//! Notification sink configuration

use serde::{Deserialize, Serialize};

/// Configuration for toast notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Default auto-dismiss timeout for toasts
    pub timeout_ms: u64,
    /// Raise native notifications for error toasts
    pub native: bool,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 5_000,
            native: true,
        }
    }
}
