//! Output formatting helpers for CLI commands

use crate::client::{
    MaintenanceReport, TrackingRecord, TrafficLevel, TrafficStatus, Urgency, Vehicle,
    WeatherReport, STATUS_AVAILABLE, STATUS_IN_TRANSIT,
};
use crate::live::FleetStats;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};

/// Format the fleet counter summary as a single line
pub fn format_summary(stats: &FleetStats) -> String {
    format!(
        "{} vehicles · {} active · {} idle · {} efficiency",
        stats.total,
        stats.active.to_string().green(),
        stats.idle.to_string().yellow(),
        format!("{}%", stats.efficiency_pct).bold()
    )
}

/// Format vehicles as a table
pub fn format_vehicles_table(vehicles: &[Vehicle]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Truck", "Driver", "Location", "Destination", "Status"]);

    for vehicle in vehicles {
        let status = match vehicle.status.as_str() {
            STATUS_IN_TRANSIT => vehicle.status.green().to_string(),
            STATUS_AVAILABLE => vehicle.status.yellow().to_string(),
            _ => vehicle.status.clone(),
        };

        table.add_row(vec![
            Cell::new(&vehicle.truck_number),
            Cell::new(&vehicle.driver_name),
            Cell::new(&vehicle.current_location),
            Cell::new(&vehicle.destination),
            Cell::new(status),
        ]);
    }

    table.to_string()
}

/// Format weather and traffic as a conditions table
pub fn format_conditions_table(weather: &WeatherReport, traffic: &TrafficStatus) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Conditions", ""]);

    let mut weather_cell = format!(
        "{} {:.0}°C · {:.0}% humidity",
        weather.condition, weather.temperature, weather.humidity
    );
    if let Some(visibility) = weather.visibility {
        weather_cell.push_str(&format!(" · {:.0} km visibility", visibility));
    }

    let level = match traffic.level {
        TrafficLevel::Low => "Low".green().to_string(),
        TrafficLevel::Medium => "Medium".yellow().to_string(),
        TrafficLevel::High => "High".red().to_string(),
    };

    table.add_row(vec![Cell::new("Weather"), Cell::new(weather_cell)]);
    table.add_row(vec![
        Cell::new("Traffic"),
        Cell::new(format!("{} · {:.0} min delay", level, traffic.delay_minutes)),
    ]);

    table.to_string()
}

/// Format maintenance alerts as a table
pub fn format_alerts_table(report: &MaintenanceReport) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Urgency", "Component", "Alert"]);

    for alert in &report.alerts {
        let urgency = match alert.urgency {
            Urgency::Critical => "Critical".red().bold().to_string(),
            Urgency::Warning => "Warning".yellow().to_string(),
            Urgency::Routine => "Routine".to_string(),
        };

        table.add_row(vec![
            Cell::new(urgency),
            Cell::new(alert.component.as_deref().unwrap_or("-")),
            Cell::new(&alert.message),
        ]);
    }

    table.to_string()
}

/// Format employee tracking records as a table
pub fn format_tracking_table(records: &[TrackingRecord]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Employee", "Vehicle", "Trip Status", "Timestamp"]);

    for record in records {
        table.add_row(vec![
            Cell::new(&record.employee_id),
            Cell::new(&record.vehicle_number),
            Cell::new(&record.trip_status),
            Cell::new(&record.timestamp),
        ]);
    }

    table.to_string()
}
