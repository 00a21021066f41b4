//! System-level notification seam.

/// Hook for raising OS-level notifications for error toasts.
///
/// Object-safe so the sink can hold `Arc<dyn SystemNotifier>`. Permission
/// is requested once per sink, fire-and-forget; `granted` is consulted
/// before every raise.
pub trait SystemNotifier: Send + Sync {
    /// Ask the environment for notification permission. Must not block.
    fn request_permission(&self);

    /// Whether the environment has granted notification permission.
    fn granted(&self) -> bool;

    /// Raise a native notification.
    fn raise(&self, summary: &str, body: &str);
}

/// Default notifier that reports through the logging layer.
///
/// Terminal sessions have no notification permission model, so permission
/// is always granted and a raise is an error-level log line. Embedders
/// with a desktop environment supply their own implementation.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl SystemNotifier for LogNotifier {
    fn request_permission(&self) {
        tracing::debug!("native notification permission requested");
    }

    fn granted(&self) -> bool {
        true
    }

    fn raise(&self, summary: &str, body: &str) {
        tracing::error!(summary = summary, "{}", body);
    }
}
