//! Terminal render target.
//!
//! Buffers widget writes and prints a full dashboard frame whenever a
//! refresh cycle completes (loading indicators turned off). Honors the
//! persisted dark-mode preference when styling the frame.

use super::{Region, RenderTarget};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use dashmap::DashMap;
use std::sync::atomic::{AtomicBool, Ordering};

const STAT_REGIONS: [Region; 4] = [
    Region::TotalVehicles,
    Region::ActiveVehicles,
    Region::IdleVehicles,
    Region::FleetEfficiency,
];

const BLOCK_REGIONS: [Region; 7] = [
    Region::Weather,
    Region::Traffic,
    Region::Maintenance,
    Region::Tracking,
    Region::TrendChart,
    Region::CompositionChart,
    Region::EfficiencyChart,
];

/// Render target that draws the dashboard into the terminal.
pub struct TerminalTarget {
    texts: DashMap<Region, String>,
    regions: DashMap<Region, Vec<String>>,
    loading: AtomicBool,
    dark_mode: bool,
}

impl TerminalTarget {
    pub fn new(dark_mode: bool) -> Self {
        Self {
            texts: DashMap::new(),
            regions: DashMap::new(),
            loading: AtomicBool::new(false),
            dark_mode,
        }
    }

    fn styled_heading(&self, text: &str) -> String {
        if self.dark_mode {
            text.bright_cyan().bold().to_string()
        } else {
            text.blue().bold().to_string()
        }
    }

    /// Compose the full dashboard frame as a string.
    pub fn frame(&self) -> String {
        let mut out = String::new();

        let mut stats = Table::new();
        stats.load_preset(UTF8_FULL);
        stats.set_content_arrangement(ContentArrangement::Dynamic);
        stats.set_header(STAT_REGIONS.iter().map(|r| r.label()).collect::<Vec<_>>());
        stats.add_row(
            STAT_REGIONS
                .iter()
                .map(|r| {
                    Cell::new(
                        self.texts
                            .get(r)
                            .map(|t| t.value().clone())
                            .unwrap_or_else(|| "-".to_string()),
                    )
                })
                .collect::<Vec<_>>(),
        );
        out.push_str(&stats.to_string());
        out.push('\n');

        for region in BLOCK_REGIONS {
            let lines = self
                .regions
                .get(&region)
                .map(|l| l.value().clone())
                .unwrap_or_default();
            let single = self.texts.get(&region).map(|t| t.value().clone());
            if lines.is_empty() && single.is_none() {
                continue;
            }

            out.push_str(&self.styled_heading(region.label()));
            out.push('\n');
            if let Some(text) = single {
                out.push_str("  ");
                out.push_str(&text);
                out.push('\n');
            }
            for line in lines {
                out.push_str("  ");
                out.push_str(&line);
                out.push('\n');
            }
        }

        if let Some(critical) = self.texts.get(&Region::CriticalAlerts) {
            let critical = critical.value();
            let line = format!("Critical alerts: {}", critical);
            if critical != "0" {
                out.push_str(&line.red().bold().to_string());
            } else {
                out.push_str(&line);
            }
            out.push('\n');
        }

        if let Some(refreshed) = self.texts.get(&Region::LastRefresh) {
            out.push_str(
                &format!("Last refresh: {}", refreshed.value())
                    .dimmed()
                    .to_string(),
            );
            out.push('\n');
        }

        out
    }
}

impl RenderTarget for TerminalTarget {
    fn set_text(&self, region: Region, text: &str) {
        self.texts.insert(region, text.to_string());
    }

    fn set_region(&self, region: Region, lines: &[String]) {
        self.regions.insert(region, lines.to_vec());
    }

    fn set_loading(&self, loading: bool) {
        let was_loading = self.loading.swap(loading, Ordering::SeqCst);
        // Frame is drawn when a cycle finishes, not on every widget write.
        if was_loading && !loading {
            println!("{}", self.frame());
        }
    }

    fn text(&self, region: Region) -> Option<String> {
        self.texts.get(&region).map(|t| t.value().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_contains_widget_values() {
        let target = TerminalTarget::new(false);
        target.set_text(Region::TotalVehicles, "3");
        target.set_text(Region::FleetEfficiency, "67%");
        target.set_region(
            Region::Weather,
            &["Clear 28°C · 60% humidity".to_string()],
        );

        let frame = target.frame();
        assert!(frame.contains("Total Vehicles"));
        assert!(frame.contains("67%"));
        assert!(frame.contains("Clear 28°C"));
    }

    #[test]
    fn test_frame_skips_empty_blocks() {
        let target = TerminalTarget::new(true);
        target.set_text(Region::TotalVehicles, "0");

        let frame = target.frame();
        assert!(!frame.contains("Employee Tracking"));
        assert!(!frame.contains("Last refresh"));
    }

    #[test]
    fn test_text_read_back() {
        let target = TerminalTarget::new(false);
        target.set_text(Region::ActiveVehicles, "5");
        assert_eq!(target.text(Region::ActiveVehicles).unwrap(), "5");
        assert!(target.text(Region::IdleVehicles).is_none());
    }
}
