//! Live-mode state tracking.

use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Handle to the scheduling task of an active live-update timer.
pub struct TimerHandle {
    pub(crate) cancel: CancellationToken,
    #[allow(dead_code)]
    pub(crate) task: JoinHandle<()>,
}

/// State of the live-update mode.
///
/// Invariant: `timer` is `Some` iff a repeating tick is currently
/// scheduled; `enabled == false` implies no timer is running.
pub struct LiveModeState {
    /// Whether live mode is on
    pub enabled: bool,
    /// Period between refresh cycles
    pub interval: Duration,
    /// Scheduling task of the active timer, if any
    pub(crate) timer: Option<TimerHandle>,
}

impl LiveModeState {
    pub fn new(interval: Duration) -> Self {
        Self {
            enabled: false,
            interval,
            timer: None,
        }
    }

    /// Whether a repeating tick is currently scheduled.
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }
}
