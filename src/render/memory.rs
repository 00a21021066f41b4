//! In-memory render target.
//!
//! Records every write, including the per-region history of widget text.
//! Used by the test suite and available to embedders that want to observe
//! render output programmatically.

use super::{Region, RenderTarget};
use dashmap::DashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Render target that stores all writes in memory.
#[derive(Default)]
pub struct MemoryTarget {
    texts: DashMap<Region, Vec<String>>,
    regions: DashMap<Region, Vec<String>>,
    loading: AtomicBool,
    text_writes: AtomicU64,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest text written to a widget.
    pub fn current_text(&self, region: Region) -> Option<String> {
        self.texts
            .get(&region)
            .and_then(|history| history.last().cloned())
    }

    /// Every text value ever written to a widget, in order.
    pub fn text_history(&self, region: Region) -> Vec<String> {
        self.texts
            .get(&region)
            .map(|history| history.value().clone())
            .unwrap_or_default()
    }

    /// Latest content of a multi-line region.
    pub fn region_lines(&self, region: Region) -> Vec<String> {
        self.regions
            .get(&region)
            .map(|lines| lines.value().clone())
            .unwrap_or_default()
    }

    /// Whether the loading indicators are currently shown.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Total number of `set_text` calls across all regions.
    pub fn text_write_count(&self) -> u64 {
        self.text_writes.load(Ordering::SeqCst)
    }
}

impl RenderTarget for MemoryTarget {
    fn set_text(&self, region: Region, text: &str) {
        self.text_writes.fetch_add(1, Ordering::SeqCst);
        self.texts.entry(region).or_default().push(text.to_string());
    }

    fn set_region(&self, region: Region, lines: &[String]) {
        self.regions.insert(region, lines.to_vec());
    }

    fn set_loading(&self, loading: bool) {
        self.loading.store(loading, Ordering::SeqCst);
    }

    fn text(&self, region: Region) -> Option<String> {
        self.current_text(region)
    }
}
