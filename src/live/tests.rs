//! Unit tests for the live-update controller.

use super::*;
use crate::config::ApiConfig;
use crate::render::MemoryTarget;

fn controller_for(base_url: &str) -> Arc<LiveUpdateController> {
    let api = ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 1,
        ..ApiConfig::default()
    };
    let config = LiveUpdateConfig {
        counter_animation_ms: 0,
        ..LiveUpdateConfig::default()
    };
    Arc::new(LiveUpdateController::new(
        Arc::new(FleetClient::new(&api)),
        Arc::new(MemoryTarget::new()),
        Arc::new(NotificationSink::new()),
        config,
    ))
}

// Port 9 (discard) is unassigned on loopback; connections fail fast.
const UNREACHABLE: &str = "http://127.0.0.1:9";

#[tokio::test]
async fn test_initial_state_is_paused() {
    let controller = controller_for(UNREACHABLE);
    assert!(!controller.is_live());
    assert!(controller.last_refresh().is_none());
    assert_eq!(controller.interval(), Duration::from_millis(30_000));
}

#[tokio::test]
async fn test_stop_without_start_is_noop() {
    let controller = controller_for(UNREACHABLE);
    controller.stop_live_updates();
    controller.stop_live_updates();
    assert!(!controller.is_live());
}

#[tokio::test]
async fn test_start_then_stop_clears_timer() {
    let controller = controller_for(UNREACHABLE);
    controller.start_live_updates(Duration::from_secs(60));
    assert!(controller.is_live());

    controller.stop_live_updates();
    assert!(!controller.is_live());
    assert!(!controller.state.lock().unwrap().is_running());

    // Second stop is a no-op
    controller.stop_live_updates();
    assert!(!controller.is_live());
}

#[tokio::test]
async fn test_restart_keeps_single_timer() {
    let controller = controller_for(UNREACHABLE);
    controller.start_live_updates(Duration::from_secs(60));
    controller.start_live_updates(Duration::from_secs(30));

    assert!(controller.is_live());
    assert_eq!(controller.interval(), Duration::from_secs(30));
    controller.stop_live_updates();
}

#[tokio::test]
async fn test_set_interval_while_paused_does_not_start() {
    let controller = controller_for(UNREACHABLE);
    controller.set_interval(Duration::from_secs(5));
    assert_eq!(controller.interval(), Duration::from_secs(5));
    assert!(!controller.is_live());
}

#[tokio::test]
async fn test_failed_tick_emits_one_error_toast() {
    let controller = controller_for(UNREACHABLE);
    controller.tick().await;

    assert_eq!(controller.notifications.active_count(Severity::Error), 1);
    assert!(controller.last_refresh().is_none());
}

#[tokio::test]
async fn test_render_claim_rejects_stale_sequence() {
    let controller = controller_for(UNREACHABLE);
    assert!(controller.claim_render(2));
    assert!(!controller.claim_render(1));
    assert!(controller.claim_render(3));
}
