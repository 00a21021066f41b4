//! Animated counter widgets.

use super::{Region, RenderTarget};
use std::sync::Arc;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

/// Animate a numeric widget from its current value to `to`.
///
/// The value converges monotonically and the final frame sets the region
/// text to exactly `to`. A zero `duration` sets the final value
/// immediately. The starting value is read back from the target; a region
/// with no numeric text starts from zero.
pub async fn animate_counter(
    target: Arc<dyn RenderTarget>,
    region: Region,
    to: i64,
    duration: Duration,
) {
    let from = target
        .text(region)
        .and_then(|text| text.trim().trim_end_matches('%').parse::<f64>().ok())
        .unwrap_or(0.0);

    let steps = (duration.as_millis() / FRAME.as_millis()).max(1) as u32;
    if duration.is_zero() || from == to as f64 {
        target.set_text(region, &to.to_string());
        return;
    }

    for step in 1..steps {
        let t = f64::from(step) / f64::from(steps);
        // Ease-out cubic; strictly increasing in t, so the displayed value
        // converges monotonically toward the target.
        let eased = 1.0 - (1.0 - t).powi(3);
        let value = from + (to as f64 - from) * eased;
        target.set_text(region, &format!("{}", value.round() as i64));
        tokio::time::sleep(FRAME).await;
    }

    target.set_text(region, &to.to_string());
}
