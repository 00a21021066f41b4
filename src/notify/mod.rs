//! Transient toast notifications.
//!
//! The sink owns the set of active toasts. A toast auto-dismisses after its
//! timeout or is removed early by explicit dismissal; concurrent toasts all
//! stay active and stack, with no queue or rate limiting. An optional
//! broadcast feed announces posted/dismissed toasts to whichever frontend
//! is listening.

mod native;

pub use native::{LogNotifier, SystemNotifier};

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// Default auto-dismiss timeout for a toast.
pub const DEFAULT_TOAST_TIMEOUT: Duration = Duration::from_millis(5000);

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Success => write!(f, "success"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A transient notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
}

/// Event published on the sink's broadcast feed.
#[derive(Debug, Clone)]
pub enum NotificationEvent {
    Posted(Toast),
    Dismissed(Uuid),
}

/// Sink for transient notifications.
pub struct NotificationSink {
    toasts: Arc<DashMap<Uuid, Toast>>,
    default_timeout: Duration,
    native: Option<Arc<dyn SystemNotifier>>,
    permission_requested: AtomicBool,
    events: Option<tokio::sync::broadcast::Sender<NotificationEvent>>,
}

impl NotificationSink {
    pub fn new() -> Self {
        Self {
            toasts: Arc::new(DashMap::new()),
            default_timeout: DEFAULT_TOAST_TIMEOUT,
            native: None,
            permission_requested: AtomicBool::new(false),
            events: None,
        }
    }

    /// Override the default auto-dismiss timeout.
    pub fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    /// Attach a system notifier for error-severity toasts.
    pub fn with_native(mut self, native: Arc<dyn SystemNotifier>) -> Self {
        self.native = Some(native);
        self
    }

    /// Attach a broadcast sender announcing posted/dismissed toasts.
    pub fn with_broadcast(
        mut self,
        sender: tokio::sync::broadcast::Sender<NotificationEvent>,
    ) -> Self {
        self.events = Some(sender);
        self
    }

    /// Request native notification permission, once, fire-and-forget.
    pub fn request_native_permission(&self) {
        if self.permission_requested.swap(true, Ordering::SeqCst) {
            return;
        }
        if let Some(native) = &self.native {
            native.request_permission();
        }
    }

    /// Post a toast; returns its id for early dismissal.
    ///
    /// The toast auto-dismisses after `timeout` (sink default when `None`).
    /// Error-severity toasts additionally raise a native notification when
    /// the system notifier reports permission granted.
    pub fn notify(
        &self,
        message: impl Into<String>,
        severity: Severity,
        timeout: Option<Duration>,
    ) -> Uuid {
        let toast = Toast {
            id: Uuid::new_v4(),
            message: message.into(),
            severity,
            created_at: Utc::now(),
        };
        let id = toast.id;
        let timeout = timeout.unwrap_or(self.default_timeout);

        if severity == Severity::Error {
            if let Some(native) = &self.native {
                if native.granted() {
                    native.raise("FleetPulse", &toast.message);
                }
            }
        }

        self.toasts.insert(id, toast.clone());
        self.send_event(NotificationEvent::Posted(toast));

        let toasts = Arc::clone(&self.toasts);
        let events = self.events.clone();
        tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            if toasts.remove(&id).is_some() {
                if let Some(sender) = events {
                    // Ignore error if no receivers are listening
                    let _ = sender.send(NotificationEvent::Dismissed(id));
                }
            }
        });

        id
    }

    /// Dismiss a toast before its timeout. Returns false if already gone.
    pub fn dismiss(&self, id: Uuid) -> bool {
        let removed = self.toasts.remove(&id).is_some();
        if removed {
            self.send_event(NotificationEvent::Dismissed(id));
        }
        removed
    }

    /// Currently active toasts, newest last.
    pub fn active(&self) -> Vec<Toast> {
        let mut toasts: Vec<Toast> = self.toasts.iter().map(|t| t.value().clone()).collect();
        toasts.sort_by_key(|t| t.created_at);
        toasts
    }

    /// Number of active toasts with the given severity.
    pub fn active_count(&self, severity: Severity) -> usize {
        self.toasts.iter().filter(|t| t.severity == severity).count()
    }

    fn send_event(&self, event: NotificationEvent) {
        if let Some(sender) = &self.events {
            // Ignore error if no receivers are listening
            let _ = sender.send(event);
        }
    }
}

impl Default for NotificationSink {
    fn default() -> Self {
        Self::new()
    }
}
