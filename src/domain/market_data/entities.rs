pub use super::value_objects::{Ohlcv, Price, Timestamp, Volume};
use serde::{Deserialize, Serialize};

/// Domain entity - one point of a price/volume series.
///
/// Immutable once created; annotation produces new values instead of
/// mutating in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: Timestamp,
    pub ohlcv: Ohlcv,
}

impl PricePoint {
    pub fn new(timestamp: Timestamp, ohlcv: Ohlcv) -> Self {
        Self { timestamp, ohlcv }
    }

    /// Canonical price of the point. The close is the conventional choice
    /// for increase/decrease comparisons between neighbouring points.
    pub fn price(&self) -> Price {
        self.ohlcv.close
    }

    pub fn is_bullish(&self) -> bool {
        self.ohlcv.close > self.ohlcv.open
    }
}

/// A price point plus directional change flags relative to its predecessor.
///
/// The first point of any annotated series carries `true` on both axes.
/// That is a boundary convention, not a derived fact; callers must not read
/// it as evidence of a real prior comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedPoint {
    pub timestamp: Timestamp,
    pub ohlcv: Ohlcv,
    pub price_increased: bool,
    pub volume_increased: bool,
}

impl AnnotatedPoint {
    pub fn from_point(point: PricePoint, price_increased: bool, volume_increased: bool) -> Self {
        Self {
            timestamp: point.timestamp,
            ohlcv: point.ohlcv,
            price_increased,
            volume_increased,
        }
    }

    pub fn is_bullish(&self) -> bool {
        self.ohlcv.close > self.ohlcv.open
    }
}
