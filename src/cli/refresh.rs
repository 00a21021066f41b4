//! Refresh command implementation

use crate::cli::output;
use crate::cli::RefreshArgs;
use crate::client::FleetClient;
use crate::config::FleetPulseConfig;
use crate::live::FleetStats;

/// Perform one fetch cycle and print the dashboard.
pub async fn run_refresh(args: RefreshArgs) -> anyhow::Result<()> {
    let mut config = if args.config.exists() {
        FleetPulseConfig::load(Some(&args.config))?
    } else {
        FleetPulseConfig::default()
    };
    config = config.with_env_overrides();
    if let Some(ref api_url) = args.api_url {
        config.api.base_url = api_url.clone();
    }

    let client = FleetClient::new(&config.api);
    let snapshot = client.fetch_snapshot().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    let stats = FleetStats::from_vehicles(&snapshot.vehicles);
    println!("{}", output::format_summary(&stats));
    println!("{}", output::format_vehicles_table(&snapshot.vehicles));
    println!(
        "{}",
        output::format_conditions_table(&snapshot.weather, &snapshot.traffic)
    );
    if !snapshot.maintenance.alerts.is_empty() {
        println!("{}", output::format_alerts_table(&snapshot.maintenance));
    }
    if !snapshot.tracking.is_empty() {
        println!("{}", output::format_tracking_table(&snapshot.tracking));
    }

    Ok(())
}
