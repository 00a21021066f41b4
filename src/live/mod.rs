//! Live-update controller.
//!
//! Owns the polling timer, the live/paused flag, the per-tick fetch fan-out,
//! and the three chart series. Each tick fetches the five fleet feeds
//! concurrently and, on full success, renders them through the injected
//! [`RenderTarget`]; any failure in the batch skips rendering for that tick
//! and surfaces one error toast. The timer is never stopped by a failure.
//!
//! Ticks are dispatched as independent tasks, so a slow cycle does not delay
//! the next timer fire. Out-of-order completions are resolved by a monotonic
//! sequence gate: a cycle may only render if no later-started cycle has
//! rendered already.

mod state;
pub mod stats;

#[cfg(test)]
mod tests;

pub use state::{LiveModeState, TimerHandle};
pub use stats::FleetStats;

use crate::charts::{ChartPoint, ChartSeries, ChartSet};
use crate::client::{FleetClient, FleetSnapshot, Urgency};
use crate::config::LiveUpdateConfig;
use crate::notify::{NotificationSink, Severity};
use crate::render::{animate_counter, Region, RenderTarget};
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Polling controller for the live dashboard.
pub struct LiveUpdateController {
    client: Arc<FleetClient>,
    target: Arc<dyn RenderTarget>,
    notifications: Arc<NotificationSink>,
    config: LiveUpdateConfig,
    charts: Mutex<ChartSet>,
    state: Mutex<LiveModeState>,
    last_refresh: Mutex<Option<DateTime<Utc>>>,
    /// Sequence number handed to each started cycle
    tick_seq: AtomicU64,
    /// Highest sequence number that has rendered
    rendered_seq: AtomicU64,
}

impl LiveUpdateController {
    pub fn new(
        client: Arc<FleetClient>,
        target: Arc<dyn RenderTarget>,
        notifications: Arc<NotificationSink>,
        config: LiveUpdateConfig,
    ) -> Self {
        let interval = Duration::from_millis(config.interval_ms);
        Self {
            client,
            target,
            notifications,
            config,
            charts: Mutex::new(ChartSet::new()),
            state: Mutex::new(LiveModeState::new(interval)),
            last_refresh: Mutex::new(None),
            tick_seq: AtomicU64::new(0),
            rendered_seq: AtomicU64::new(0),
        }
    }

    /// Whether live mode is currently on.
    pub fn is_live(&self) -> bool {
        let state = self.state.lock().expect("live state lock poisoned");
        state.enabled && state.is_running()
    }

    /// Configured refresh period.
    pub fn interval(&self) -> Duration {
        self.state.lock().expect("live state lock poisoned").interval
    }

    /// When the last successful cycle rendered, if any.
    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        *self.last_refresh.lock().expect("last refresh lock poisoned")
    }

    /// Snapshot of the three chart series.
    pub fn charts(&self) -> ChartSet {
        self.charts.lock().expect("charts lock poisoned").clone()
    }

    /// Start live updates at the given period.
    ///
    /// Clears any existing timer first, so at most one timer is ever
    /// active, then performs one tick immediately rather than waiting for
    /// the first interval to elapse.
    pub fn start_live_updates(self: &Arc<Self>, interval: Duration) {
        let mut state = self.state.lock().expect("live state lock poisoned");
        if let Some(timer) = state.timer.take() {
            timer.cancel.cancel();
        }
        state.interval = interval;
        state.enabled = true;

        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let controller = Arc::clone(self);
        let task = tokio::spawn(async move {
            // The first tick of a tokio interval completes immediately,
            // which provides the out-of-band initial refresh.
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            tracing::info!(interval_ms = interval.as_millis() as u64, "live updates started");

            loop {
                tokio::select! {
                    _ = token.cancelled() => {
                        tracing::info!("live updates stopped");
                        break;
                    }
                    _ = ticker.tick() => {
                        // Cycles run as their own tasks; the sequence gate
                        // resolves out-of-order completions.
                        let cycle = Arc::clone(&controller);
                        tokio::spawn(async move { cycle.tick().await });
                    }
                }
            }
        });
        state.timer = Some(TimerHandle { cancel, task });
    }

    /// Stop live updates. Idempotent.
    ///
    /// Cancels the timer only; a cycle already in flight still completes
    /// and applies its render.
    pub fn stop_live_updates(&self) {
        let mut state = self.state.lock().expect("live state lock poisoned");
        if let Some(timer) = state.timer.take() {
            timer.cancel.cancel();
        }
        state.enabled = false;
    }

    /// Change the refresh period.
    ///
    /// If live, restarts the timer so the new period takes effect on the
    /// next tick rather than mid-cycle.
    pub fn set_interval(self: &Arc<Self>, interval: Duration) {
        let was_live = {
            let mut state = self.state.lock().expect("live state lock poisoned");
            state.interval = interval;
            state.enabled && state.is_running()
        };
        if was_live {
            self.stop_live_updates();
            self.start_live_updates(interval);
        }
    }

    /// Run one fetch-all / render-all cycle.
    pub async fn tick(&self) {
        let seq = self.tick_seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.target.set_loading(true);

        match self.client.fetch_snapshot().await {
            Ok(snapshot) => {
                if self.claim_render(seq) {
                    self.render(&snapshot);
                    let now = Utc::now();
                    self.target
                        .set_text(Region::LastRefresh, &now.format("%H:%M:%S").to_string());
                    *self.last_refresh.lock().expect("last refresh lock poisoned") = Some(now);
                } else {
                    tracing::debug!(seq, "discarding render from stale cycle");
                }
                self.target.set_loading(false);
            }
            Err(error) => {
                self.target.set_loading(false);
                tracing::warn!(seq, error = %error, "refresh cycle failed");
                self.notifications.notify(
                    format!("Live update failed: {}", error),
                    Severity::Error,
                    None,
                );
            }
        }
    }

    /// A cycle may render only if no later-started cycle rendered first.
    fn claim_render(&self, seq: u64) -> bool {
        self.rendered_seq.fetch_max(seq, Ordering::SeqCst) < seq
    }

    fn render(&self, snapshot: &FleetSnapshot) {
        let fleet = FleetStats::from_vehicles(&snapshot.vehicles);
        self.render_counters(&fleet);

        let weather = &snapshot.weather;
        let mut conditions = format!(
            "{} {:.0}°C · {:.0}% humidity",
            weather.condition, weather.temperature, weather.humidity
        );
        if let Some(visibility) = weather.visibility {
            conditions.push_str(&format!(" · {:.0} km visibility", visibility));
        }
        self.target.set_region(Region::Weather, &[conditions]);

        let traffic = &snapshot.traffic;
        self.target.set_region(
            Region::Traffic,
            &[format!(
                "{} · {:.0} min delay",
                traffic.level, traffic.delay_minutes
            )],
        );

        self.render_maintenance(snapshot);

        let rows: Vec<String> = snapshot
            .tracking
            .iter()
            .map(|t| {
                format!(
                    "{} · {} · {} · {}",
                    t.employee_id, t.vehicle_number, t.trip_status, t.timestamp
                )
            })
            .collect();
        self.target.set_region(Region::Tracking, &rows);

        self.update_charts(snapshot, &fleet);
    }

    fn render_counters(&self, fleet: &FleetStats) {
        let animation = Duration::from_millis(self.config.counter_animation_ms);
        let counters = [
            (Region::TotalVehicles, fleet.total as i64),
            (Region::ActiveVehicles, fleet.active as i64),
            (Region::IdleVehicles, fleet.idle as i64),
        ];
        for (region, value) in counters {
            if animation.is_zero() {
                self.target.set_text(region, &value.to_string());
            } else {
                tokio::spawn(animate_counter(
                    Arc::clone(&self.target),
                    region,
                    value,
                    animation,
                ));
            }
        }
        self.target
            .set_text(Region::FleetEfficiency, &format!("{}%", fleet.efficiency_pct));
    }

    fn render_maintenance(&self, snapshot: &FleetSnapshot) {
        let report = &snapshot.maintenance;
        self.target
            .set_text(Region::CriticalAlerts, &report.critical_count().to_string());

        let lines: Vec<String> = report
            .alerts
            .iter()
            .map(|alert| {
                let urgency = match alert.urgency {
                    Urgency::Critical => "CRITICAL",
                    Urgency::Warning => "Warning",
                    Urgency::Routine => "Routine",
                };
                match &alert.component {
                    Some(component) => format!("[{}] {}: {}", urgency, component, alert.message),
                    None => format!("[{}] {}", urgency, alert.message),
                }
            })
            .collect();
        self.target.set_region(Region::Maintenance, &lines);

        for alert in &report.alerts {
            if alert.urgency == Urgency::Critical {
                self.notifications
                    .notify(alert.message.clone(), Severity::Error, None);
            }
        }
    }

    fn update_charts(&self, snapshot: &FleetSnapshot, fleet: &FleetStats) {
        let label = Utc::now().format("%H:%M:%S").to_string();
        let mut charts = self.charts.lock().expect("charts lock poisoned");

        charts.trend.push(ChartPoint::new(label, fleet.active as f64));
        charts.composition.replace(
            stats::status_counts(&snapshot.vehicles)
                .into_iter()
                .map(|(status, count)| ChartPoint::new(status, count as f64))
                .collect(),
        );
        charts.efficiency.replace(
            stats::trip_status_counts(&snapshot.tracking)
                .into_iter()
                .map(|(status, count)| ChartPoint::new(status, count as f64))
                .collect(),
        );

        self.target
            .set_region(Region::TrendChart, &series_lines(&charts.trend));
        self.target
            .set_region(Region::CompositionChart, &series_lines(&charts.composition));
        self.target
            .set_region(Region::EfficiencyChart, &series_lines(&charts.efficiency));
    }
}

fn series_lines(series: &ChartSeries) -> Vec<String> {
    series
        .points()
        .map(|point| format!("{}  {:.0}", point.label, point.value))
        .collect()
}
