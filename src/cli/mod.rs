//! CLI module for FleetPulse
//!
//! Command-line interface definitions and handlers for the fleet dashboard.
//!
//! # Commands
//!
//! - `watch` - Run the live dashboard in the terminal
//! - `refresh` - Perform one refresh cycle and print the dashboard
//! - `theme` - Manage the persisted dark-mode preference
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Live dashboard against the default local API
//! fleetpulse watch
//!
//! # One-shot refresh as JSON
//! fleetpulse refresh --json
//!
//! # Generate shell completions
//! fleetpulse completions bash > ~/.bash_completion.d/fleetpulse
//! ```

pub mod completions;
pub mod config;
pub mod output;
pub mod refresh;
pub mod theme;
pub mod watch;

pub use completions::handle_completions;
pub use config::handle_config_init;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// FleetPulse - Fleet-management live dashboard
#[derive(Parser, Debug)]
#[command(
    name = "fleetpulse",
    version,
    about = "Fleet-management live dashboard"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the live dashboard
    Watch(WatchArgs),
    /// Perform one refresh cycle and print the dashboard
    Refresh(RefreshArgs),
    /// Manage the dark-mode preference
    Theme(ThemeArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "fleetpulse.toml")]
    pub config: PathBuf,

    /// Override the fleet API base URL
    #[arg(short, long, env = "FLEETPULSE_API_URL")]
    pub api_url: Option<String>,

    /// Override the refresh interval in milliseconds
    #[arg(short, long, env = "FLEETPULSE_INTERVAL_MS")]
    pub interval_ms: Option<u64>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "FLEETPULSE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Disable native notifications for error toasts
    #[arg(long)]
    pub no_native: bool,
}

#[derive(Args, Debug)]
pub struct RefreshArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "fleetpulse.toml")]
    pub config: PathBuf,

    /// Override the fleet API base URL
    #[arg(short, long, env = "FLEETPULSE_API_URL")]
    pub api_url: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Theme subcommand action
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    /// Enable dark mode
    Dark,
    /// Disable dark mode
    Light,
    /// Flip the current preference
    Toggle,
    /// Show the current preference
    Status,
}

#[derive(Args, Debug)]
pub struct ThemeArgs {
    /// Action to perform
    #[arg(value_enum, default_value = "status")]
    pub action: ThemeAction,

    /// Preference file location (defaults to the platform config directory)
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "fleetpulse.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_parse_watch_defaults() {
        let cli = Cli::try_parse_from(["fleetpulse", "watch"]).unwrap();
        match cli.command {
            Commands::Watch(args) => {
                assert_eq!(args.config, PathBuf::from("fleetpulse.toml"));
                assert!(args.api_url.is_none());
                assert!(!args.no_native);
            }
            _ => panic!("Expected Watch command"),
        }
    }

    #[test]
    fn test_cli_parse_watch_with_interval() {
        let cli = Cli::try_parse_from(["fleetpulse", "watch", "-i", "5000"]).unwrap();
        match cli.command {
            Commands::Watch(args) => assert_eq!(args.interval_ms, Some(5000)),
            _ => panic!("Expected Watch command"),
        }
    }

    #[test]
    fn test_cli_parse_refresh_json() {
        let cli = Cli::try_parse_from(["fleetpulse", "refresh", "--json"]).unwrap();
        match cli.command {
            Commands::Refresh(args) => assert!(args.json),
            _ => panic!("Expected Refresh command"),
        }
    }

    #[test]
    fn test_cli_parse_theme_defaults_to_status() {
        let cli = Cli::try_parse_from(["fleetpulse", "theme"]).unwrap();
        match cli.command {
            Commands::Theme(args) => assert_eq!(args.action, ThemeAction::Status),
            _ => panic!("Expected Theme command"),
        }
    }

    #[test]
    fn test_cli_parse_theme_toggle_with_file() {
        let cli =
            Cli::try_parse_from(["fleetpulse", "theme", "toggle", "-f", "/tmp/theme.toml"]).unwrap();
        match cli.command {
            Commands::Theme(args) => {
                assert_eq!(args.action, ThemeAction::Toggle);
                assert_eq!(args.file, Some(PathBuf::from("/tmp/theme.toml")));
            }
            _ => panic!("Expected Theme command"),
        }
    }

    #[test]
    fn test_cli_parse_config_init() {
        let cli = Cli::try_parse_from(["fleetpulse", "config", "init"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigCommands::Init(_))
        ));
    }
}
