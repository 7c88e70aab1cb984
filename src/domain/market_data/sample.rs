//! Deterministic sample series, used until a real market-data feed exists.
//!
//! The generator is an explicitly constructed data source: callers seed it
//! from a symbol and get the same series back every time. There is no
//! module-scope mutable state.

use crate::domain::market_data::{Ohlcv, Price, PricePoint, Symbol, Timestamp, Volume};

pub const SAMPLE_POINTS: usize = 90;

const PRICE_MIN: f64 = 10.0;
const PRICE_MAX: f64 = 90.0;
const VOLUME_MIN: f64 = 100.0;
const VOLUME_MAX: f64 = 1000.0;

const DAY_MS: u64 = 86_400_000;
/// 2023-02-01T00:00:00Z, start of the sample window.
const SERIES_EPOCH_MS: u64 = 1_675_209_600_000;

/// xorshift64 over a non-zero seed.
struct SeedRng(u64);

impl SeedRng {
    fn from_symbol(symbol: &Symbol) -> Self {
        // FNV-1a over the symbol name
        let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
        for byte in symbol.value().bytes() {
            hash ^= byte as u64;
            hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
        }
        Self(hash.max(1))
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    /// Uniform in [0, 1).
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn in_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}

/// Generate the fixed-length daily sample series for a symbol.
///
/// Values stay inside the documented price band and each point is OHLC
/// coherent: `low <= open, close <= high`.
pub fn sample_series(symbol: &Symbol) -> Vec<PricePoint> {
    let mut rng = SeedRng::from_symbol(symbol);

    (0..SAMPLE_POINTS)
        .map(|day| {
            let open = rng.in_range(PRICE_MIN, PRICE_MAX);
            let close = rng.in_range(PRICE_MIN, PRICE_MAX);
            let spread = rng.in_range(0.0, 5.0);
            let high = (open.max(close) + spread).min(PRICE_MAX + 5.0);
            let low = (open.min(close) - spread).max(1.0);
            let volume = rng.in_range(VOLUME_MIN, VOLUME_MAX);

            PricePoint::new(
                Timestamp::from_millis(SERIES_EPOCH_MS + day as u64 * DAY_MS),
                Ohlcv::new(
                    Price::from(open),
                    Price::from(high),
                    Price::from(low),
                    Price::from(close),
                    Volume::from(volume),
                ),
            )
        })
        .collect()
}
