//! Watch command implementation

use crate::cli::WatchArgs;
use crate::client::FleetClient;
use crate::config::{FleetPulseConfig, LogFormat};
use crate::live::LiveUpdateController;
use crate::notify::{LogNotifier, NotificationEvent, NotificationSink, Severity};
use crate::prefs::ThemePrefs;
use crate::render::TerminalTarget;
use colored::Colorize;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Load configuration with CLI overrides
pub fn load_config_with_overrides(args: &WatchArgs) -> anyhow::Result<FleetPulseConfig> {
    // Load from file if it exists, otherwise use defaults
    let mut config = if args.config.exists() {
        FleetPulseConfig::load(Some(&args.config))?
    } else {
        tracing::debug!("Config file not found, using defaults");
        FleetPulseConfig::default()
    };

    // Apply environment variable overrides
    config = config.with_env_overrides();

    // Apply CLI overrides (highest priority)
    if let Some(ref api_url) = args.api_url {
        config.api.base_url = api_url.clone();
    }
    if let Some(interval_ms) = args.interval_ms {
        config.live.interval_ms = interval_ms;
    }
    if let Some(ref log_level) = args.log_level {
        config.logging.level = log_level.clone();
    }
    if args.no_native {
        config.notifications.native = false;
    }

    Ok(config)
}

/// Initialize tracing based on configuration
pub fn init_tracing(config: &crate::config::LoggingConfig) -> anyhow::Result<()> {
    let filter_str = crate::logging::build_filter_directives(config);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    match config.format {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .try_init()
                .map_err(|e| anyhow::anyhow!(e))?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()
                .map_err(|e| anyhow::anyhow!(e))?;
        }
    }

    Ok(())
}

/// Print toasts from the sink's broadcast feed as they arrive.
fn spawn_toast_printer(mut receiver: tokio::sync::broadcast::Receiver<NotificationEvent>) {
    tokio::spawn(async move {
        while let Ok(event) = receiver.recv().await {
            if let NotificationEvent::Posted(toast) = event {
                let line = format!("[{}] {}", toast.severity, toast.message);
                match toast.severity {
                    Severity::Error => eprintln!("{}", line.red()),
                    Severity::Warning => eprintln!("{}", line.yellow()),
                    Severity::Success => println!("{}", line.green()),
                    Severity::Info => println!("{}", line),
                }
            }
        }
    });
}

/// Wait for shutdown signal (SIGINT or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}

/// Run the live dashboard until interrupted.
pub async fn run_watch(args: WatchArgs) -> anyhow::Result<()> {
    let config = load_config_with_overrides(&args)?;
    config.validate()?;
    init_tracing(&config.logging)?;

    let prefs = ThemePrefs::default_path()
        .map(|path| ThemePrefs::load_from(&path))
        .unwrap_or_default();

    let target = Arc::new(TerminalTarget::new(prefs.dark_mode));

    let (sender, receiver) = tokio::sync::broadcast::channel(64);
    spawn_toast_printer(receiver);

    let mut sink = NotificationSink::new()
        .with_default_timeout(Duration::from_millis(config.notifications.timeout_ms))
        .with_broadcast(sender);
    if config.notifications.native {
        sink = sink.with_native(Arc::new(LogNotifier));
    }
    let notifications = Arc::new(sink);
    notifications.request_native_permission();

    let client = Arc::new(FleetClient::new(&config.api));
    let controller = Arc::new(LiveUpdateController::new(
        client,
        target,
        Arc::clone(&notifications),
        config.live.clone(),
    ));

    if config.live.enabled {
        controller.start_live_updates(Duration::from_millis(config.live.interval_ms));
    } else {
        tracing::info!("live mode disabled, performing a single refresh");
        controller.tick().await;
    }

    shutdown_signal().await;
    controller.stop_live_updates();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn watch_args() -> WatchArgs {
        WatchArgs {
            config: PathBuf::from("does-not-exist.toml"),
            api_url: None,
            interval_ms: None,
            log_level: None,
            no_native: false,
        }
    }

    #[test]
    fn test_overrides_default_to_config_values() {
        let config = load_config_with_overrides(&watch_args()).unwrap();
        assert_eq!(config.live.interval_ms, 30_000);
    }

    #[test]
    fn test_cli_overrides_win() {
        let mut args = watch_args();
        args.api_url = Some("http://fleet:9000".to_string());
        args.interval_ms = Some(1_000);
        args.no_native = true;

        let config = load_config_with_overrides(&args).unwrap();
        assert_eq!(config.api.base_url, "http://fleet:9000");
        assert_eq!(config.live.interval_ms, 1_000);
        assert!(!config.notifications.native);
    }
}
