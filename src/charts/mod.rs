//! Chart series storage for the dashboard widgets.
//!
//! Three series back the dashboard charts: an activity trend (bounded FIFO
//! window of the most recent ticks), a fleet composition breakdown, and a
//! trip-status efficiency breakdown. The trend series appends one point per
//! refresh cycle; the other two are replaced wholesale from each snapshot.

use std::collections::VecDeque;

/// Maximum number of points retained by the trend series.
pub const TREND_CAPACITY: usize = 10;

/// A single labeled data point.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Ordered sequence of chart points, optionally bounded.
///
/// When bounded, pushing past capacity evicts the oldest point (FIFO).
#[derive(Debug, Clone, Default)]
pub struct ChartSeries {
    points: VecDeque<ChartPoint>,
    capacity: Option<usize>,
}

impl ChartSeries {
    /// Creates an unbounded series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a series that retains at most `capacity` points.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    /// Appends a point, evicting the oldest if at capacity.
    pub fn push(&mut self, point: ChartPoint) {
        if let Some(capacity) = self.capacity {
            while self.points.len() >= capacity {
                self.points.pop_front();
            }
        }
        self.points.push_back(point);
    }

    /// Replaces the entire series with a new snapshot.
    ///
    /// Capacity still applies: only the most recent points are kept.
    pub fn replace(&mut self, points: Vec<ChartPoint>) {
        self.points.clear();
        for point in points {
            self.push(point);
        }
    }

    /// Returns the points in insertion order (oldest first).
    pub fn points(&self) -> impl Iterator<Item = &ChartPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// The three chart series owned by the live-update controller.
#[derive(Debug, Clone)]
pub struct ChartSet {
    /// Active-vehicle count per tick, bounded FIFO window.
    pub trend: ChartSeries,
    /// Vehicle count per fleet status, replaced each tick.
    pub composition: ChartSeries,
    /// Tracking-record count per trip status, replaced each tick.
    pub efficiency: ChartSeries,
}

impl ChartSet {
    pub fn new() -> Self {
        Self {
            trend: ChartSeries::bounded(TREND_CAPACITY),
            composition: ChartSeries::new(),
            efficiency: ChartSeries::new(),
        }
    }
}

impl Default for ChartSet {
    fn default() -> Self {
        Self::new()
    }
}
