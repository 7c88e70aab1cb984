use trade_chart_wasm::domain::market_data::{Ohlcv, Price, Volume, format_datum, format_ohlcv};

fn ohlcv(open: f64, high: f64, low: f64, close: f64, volume: f64) -> Ohlcv {
    Ohlcv::new(
        Price::from(open),
        Price::from(high),
        Price::from(low),
        Price::from(close),
        Volume::from(volume),
    )
}

#[test]
fn fields_render_with_two_fraction_digits() {
    let formatted = format_ohlcv(&ohlcv(10.0, 20.0, 5.0, 15.0, 1000.0)).unwrap();
    assert_eq!(formatted, "O: 10.00 H: 20.00 L: 5.00 C: 15.00 V:1000.00");
}

#[test]
fn datum_label_is_prefixed_with_the_date() {
    let formatted = format_datum("2/1/2023", &ohlcv(10.0, 20.0, 5.0, 15.0, 1000.0)).unwrap();
    assert!(formatted.starts_with("2/1/2023 "));
    assert!(formatted.contains("O: 10.00 H: 20.00 L: 5.00 C: 15.00 V:1000.00"));
}

#[test]
fn fractional_values_are_rounded() {
    let formatted = format_ohlcv(&ohlcv(10.005, 19.999, 5.004, 15.128, 999.995)).unwrap();
    assert!(formatted.contains("H: 20.00"));
    assert!(formatted.contains("C: 15.13"));
}

#[test]
fn incomplete_datum_is_rejected() {
    assert!(format_ohlcv(&ohlcv(f64::NAN, 20.0, 5.0, 15.0, 1000.0)).is_err());
    assert!(format_ohlcv(&ohlcv(10.0, 20.0, 5.0, 15.0, f64::INFINITY)).is_err());
    assert!(format_datum("2/1/2023", &ohlcv(10.0, f64::NAN, 5.0, 15.0, 1000.0)).is_err());
}
