use super::value_objects::ScrollWindow;
use crate::domain::errors::DomainResult;
use crate::domain::market_data::{AnnotatedPoint, Price, PricePoint, SeriesAnnotator};

/// Domain entity - one chart view's data: the annotated series and the
/// scroll window over it.
///
/// Lives for the lifetime of a single chart view instance and resets only
/// on remount; the annotated series is derived once per load and the backing
/// points are never mutated.
#[derive(Debug, Clone, Default)]
pub struct ChartState {
    series: Vec<AnnotatedPoint>,
    window: ScrollWindow,
}

impl ChartState {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Annotate a raw series and wrap it with a window positioned at the
    /// series start.
    pub fn from_points(points: &[PricePoint]) -> DomainResult<Self> {
        let series = SeriesAnnotator::annotate(points)?;
        let window = ScrollWindow::new(series.len());
        Ok(Self { series, window })
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn window(&self) -> ScrollWindow {
        self.window
    }

    pub fn scroll_by(&mut self, delta: f64) {
        self.window.scroll_by(delta);
    }

    /// The currently visible slice.
    pub fn visible(&self) -> &[AnnotatedPoint] {
        self.window.slice(&self.series)
    }

    /// Point at an index within the visible slice.
    pub fn visible_point(&self, index: usize) -> Option<&AnnotatedPoint> {
        self.visible().get(index)
    }

    /// Close of the last point of the whole series, drawn as a reference
    /// line across the candle plot.
    pub fn latest_close(&self) -> Option<Price> {
        self.series.last().map(|point| point.ohlcv.close)
    }

    /// Lowest low and highest high of the visible slice.
    pub fn visible_price_bounds(&self) -> Option<(f64, f64)> {
        let visible = self.visible();
        let first = visible.first()?;
        let mut min = first.ohlcv.low.value();
        let mut max = first.ohlcv.high.value();
        for point in visible {
            min = min.min(point.ohlcv.low.value());
            max = max.max(point.ohlcv.high.value());
        }
        Some((min, max))
    }

    /// Largest volume of the visible slice.
    pub fn visible_max_volume(&self) -> Option<f64> {
        self.visible()
            .iter()
            .map(|point| point.ohlcv.volume.value())
            .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.max(v))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market_data::{Ohlcv, Timestamp, Volume};

    fn points(n: usize) -> Vec<PricePoint> {
        (0..n)
            .map(|i| {
                PricePoint::new(
                    Timestamp::from_millis(i as u64),
                    Ohlcv::new(
                        Price::from(10.0 + i as f64),
                        Price::from(20.0 + i as f64),
                        Price::from(5.0 + i as f64),
                        Price::from(15.0 + i as f64),
                        Volume::from(100.0 * (i + 1) as f64),
                    ),
                )
            })
            .collect()
    }

    #[test]
    fn bounds_follow_visible_slice() {
        let state = ChartState::from_points(&points(10)).unwrap();
        let (min, max) = state.visible_price_bounds().unwrap();
        assert_eq!(min, 5.0);
        assert_eq!(max, 29.0);
        assert_eq!(state.visible_max_volume().unwrap(), 1000.0);
    }

    #[test]
    fn latest_close_is_series_wide() {
        let mut state = ChartState::from_points(&points(90)).unwrap();
        // moving the window must not move the reference line
        state.scroll_by(-1.0);
        assert_eq!(state.latest_close().unwrap().value(), 15.0 + 89.0);
    }

    #[test]
    fn empty_state_has_no_bounds() {
        let state = ChartState::empty();
        assert!(state.is_empty());
        assert!(state.visible_price_bounds().is_none());
        assert!(state.visible_max_volume().is_none());
    }
}
