use std::ops::Range;
use strum::{AsRefStr, Display};

/// Smallest slice the scroll window may leave visible.
pub const MIN_VISIBLE_POINTS: usize = 6;
/// Largest slice rendered at once.
pub const MAX_VISIBLE_POINTS: usize = 50;

/// Value Object - chart panel kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
pub enum ChartKind {
    #[strum(serialize = "candlestick")]
    Candlestick,
    #[strum(serialize = "volume")]
    Volume,
}

/// Value Object - visible window over a fixed-length backing series.
///
/// Invariant, re-established on every update:
/// `0 <= start <= len - MIN_VISIBLE_POINTS` (saturating for short series),
/// and the visible range never reaches past `len`. The slice shortens near
/// the series end; there is no padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollWindow {
    start: usize,
    len: usize,
}

impl Default for ScrollWindow {
    fn default() -> Self {
        Self::new(0)
    }
}

impl ScrollWindow {
    pub fn new(len: usize) -> Self {
        Self { start: 0, len }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn series_len(&self) -> usize {
        self.len
    }

    pub fn max_start(&self) -> usize {
        self.len.saturating_sub(MIN_VISIBLE_POINTS)
    }

    /// Advance by one discrete wheel notch. Scrolling down (positive delta)
    /// moves the window toward the series start; each event is independent
    /// and the result is clamped to the window invariant.
    pub fn scroll_by(&mut self, delta: f64) {
        if delta == 0.0 {
            return;
        }
        let step = if delta > 0.0 { -1i64 } else { 1i64 };
        let next = self.start as i64 + step;
        self.start = next.clamp(0, self.max_start() as i64) as usize;
    }

    /// Index range of the currently visible slice.
    pub fn range(&self) -> Range<usize> {
        self.start..(self.start + MAX_VISIBLE_POINTS).min(self.len)
    }

    /// Visible sub-slice of the backing series. A series shorter than the
    /// recorded length yields an empty slice instead of panicking.
    pub fn slice<'a, T>(&self, series: &'a [T]) -> &'a [T] {
        series.get(self.range()).unwrap_or(&[])
    }
}

/// Value Object - plot rectangle mapping series values to SVG coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub min_value: f64,
    pub max_value: f64,
}

impl PlotArea {
    pub fn new(width: f64, height: f64, min_value: f64, max_value: f64) -> Self {
        Self { width, height, min_value, max_value }
    }

    pub fn value_range(&self) -> f64 {
        self.max_value - self.min_value
    }

    /// Map a value to a Y coordinate (SVG Y grows downward).
    pub fn value_to_y(&self, value: f64) -> f64 {
        if self.value_range() == 0.0 {
            return self.height / 2.0;
        }
        let normalized = (value - self.min_value) / self.value_range();
        self.height * (1.0 - normalized)
    }

    /// Horizontal center of slot `index` when `count` slots fill the width.
    pub fn index_to_x(&self, index: usize, count: usize) -> f64 {
        self.slot_width(count) * (index as f64 + 0.5)
    }

    pub fn slot_width(&self, count: usize) -> f64 {
        if count == 0 {
            return self.width;
        }
        self.width / count as f64
    }
}
