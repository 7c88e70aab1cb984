use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use trade_chart_wasm::domain::market_data::{
    Ohlcv, Price, PricePoint, SeriesAnnotator, Timestamp, Volume,
};

fn series(raw: &[(u16, u16)]) -> Vec<PricePoint> {
    raw.iter()
        .enumerate()
        .map(|(i, (close, volume))| {
            PricePoint::new(
                Timestamp::from_millis(i as u64),
                Ohlcv::new(
                    Price::from(*close as f64),
                    Price::from(*close as f64),
                    Price::from(*close as f64),
                    Price::from(*close as f64),
                    Volume::from(*volume as f64),
                ),
            )
        })
        .collect()
}

#[quickcheck]
fn annotation_preserves_length_and_fields(raw: Vec<(u16, u16)>) -> TestResult {
    if raw.is_empty() {
        return TestResult::discard();
    }
    let points = series(&raw);
    let annotated = SeriesAnnotator::annotate(&points).unwrap();

    TestResult::from_bool(
        annotated.len() == points.len()
            && annotated
                .iter()
                .zip(&points)
                .all(|(a, p)| a.timestamp == p.timestamp && a.ohlcv == p.ohlcv),
    )
}

#[quickcheck]
fn flags_match_their_definition(raw: Vec<(u16, u16)>) -> TestResult {
    if raw.is_empty() {
        return TestResult::discard();
    }
    let points = series(&raw);
    let annotated = SeriesAnnotator::annotate(&points).unwrap();

    if !(annotated[0].price_increased && annotated[0].volume_increased) {
        return TestResult::failed();
    }

    for i in 1..annotated.len() {
        let price_up = raw[i].0 > raw[i - 1].0;
        let volume_up = raw[i].1 > raw[i - 1].1;
        if annotated[i].price_increased != price_up || annotated[i].volume_increased != volume_up {
            return TestResult::failed();
        }
    }

    TestResult::passed()
}
