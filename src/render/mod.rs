//! Rendering-target abstraction.
//!
//! The live-update controller never touches a concrete UI. It writes widget
//! text and multi-line region content through [`RenderTarget`], so the core
//! logic is testable without a real display. A target that does not show a
//! given region ignores writes to it silently; that is not an error.

mod counter;
mod memory;
mod terminal;

pub use counter::animate_counter;
pub use memory::MemoryTarget;
pub use terminal::TerminalTarget;

/// Named slots of the dashboard a widget renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    TotalVehicles,
    ActiveVehicles,
    IdleVehicles,
    FleetEfficiency,
    Weather,
    Traffic,
    Maintenance,
    CriticalAlerts,
    Tracking,
    TrendChart,
    CompositionChart,
    EfficiencyChart,
    LastRefresh,
}

impl Region {
    /// Display label for the region.
    pub fn label(&self) -> &'static str {
        match self {
            Region::TotalVehicles => "Total Vehicles",
            Region::ActiveVehicles => "Active",
            Region::IdleVehicles => "Idle",
            Region::FleetEfficiency => "Fleet Efficiency",
            Region::Weather => "Weather",
            Region::Traffic => "Traffic",
            Region::Maintenance => "Maintenance",
            Region::CriticalAlerts => "Critical Alerts",
            Region::Tracking => "Employee Tracking",
            Region::TrendChart => "Activity Trend",
            Region::CompositionChart => "Fleet Composition",
            Region::EfficiencyChart => "Trip Efficiency",
            Region::LastRefresh => "Last Refresh",
        }
    }
}

/// Sink for dashboard widget updates.
///
/// Implementations must be cheap to call from the render path; a write to a
/// region the target does not display is silently ignored.
pub trait RenderTarget: Send + Sync {
    /// Set the text of a single-value widget.
    fn set_text(&self, region: Region, text: &str);

    /// Replace the content of a multi-line region.
    fn set_region(&self, region: Region, lines: &[String]);

    /// Toggle the loading indicators for the whole dashboard.
    fn set_loading(&self, loading: bool);

    /// Current text of a widget, if the target retains it.
    ///
    /// Used by the counter animation to pick its starting value.
    fn text(&self, region: Region) -> Option<String>;
}
