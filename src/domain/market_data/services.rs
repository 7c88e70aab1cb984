use crate::domain::errors::{AppError, DomainResult};
use crate::domain::market_data::{AnnotatedPoint, Ohlcv, PricePoint};

/// Domain service tagging each point of a series with directional change
/// flags relative to its immediate predecessor.
pub struct SeriesAnnotator;

impl SeriesAnnotator {
    /// Annotate an ordered series. Output has the same length and field
    /// values as the input, plus the two flags.
    ///
    /// Comparisons are strictly greater-than: equal neighbouring values are
    /// not an increase. The price comparison uses the close (see
    /// [`PricePoint::price`]). An empty series is rejected.
    pub fn annotate(points: &[PricePoint]) -> DomainResult<Vec<AnnotatedPoint>> {
        let first = points.first().ok_or_else(|| {
            AppError::InvalidArgument("cannot annotate an empty series".to_string())
        })?;

        let mut annotated = Vec::with_capacity(points.len());
        annotated.push(AnnotatedPoint::from_point(first.clone(), true, true));

        for pair in points.windows(2) {
            let (previous, current) = (&pair[0], &pair[1]);
            annotated.push(AnnotatedPoint::from_point(
                current.clone(),
                current.price() > previous.price(),
                current.ohlcv.volume > previous.ohlcv.volume,
            ));
        }

        Ok(annotated)
    }
}

/// Render the OHLCV fields of one datum in the fixed tooltip format, two
/// fraction digits per field.
///
/// A datum with non-finite fields is rejected; hover views are expected to
/// omit the tooltip rather than show a partial label.
pub fn format_ohlcv(ohlcv: &Ohlcv) -> DomainResult<String> {
    if !ohlcv.is_complete() {
        return Err(AppError::InvalidArgument(
            "datum has incomplete OHLCV fields".to_string(),
        ));
    }

    Ok(format!(
        "O: {:.2} H: {:.2} L: {:.2} C: {:.2} V:{:.2}",
        ohlcv.open.value(),
        ohlcv.high.value(),
        ohlcv.low.value(),
        ohlcv.close.value(),
        ohlcv.volume.value(),
    ))
}

/// Full tooltip label: a pre-rendered localized date followed by the OHLCV
/// fields. The date is rendered by the presentation layer because locale
/// formatting needs the browser.
pub fn format_datum(date_label: &str, ohlcv: &Ohlcv) -> DomainResult<String> {
    Ok(format!("{} {}", date_label, format_ohlcv(ohlcv)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market_data::{Price, Timestamp, Volume};

    fn point(ts: u64, close: f64, volume: f64) -> PricePoint {
        PricePoint::new(
            Timestamp::from_millis(ts),
            Ohlcv::new(
                Price::from(close),
                Price::from(close),
                Price::from(close),
                Price::from(close),
                Volume::from(volume),
            ),
        )
    }

    #[test]
    fn first_point_flags_are_conventional() {
        let annotated = SeriesAnnotator::annotate(&[point(0, 5.0, 10.0)]).unwrap();
        assert!(annotated[0].price_increased);
        assert!(annotated[0].volume_increased);
    }

    #[test]
    fn equal_values_are_not_increases() {
        let annotated =
            SeriesAnnotator::annotate(&[point(0, 5.0, 10.0), point(1, 5.0, 10.0)]).unwrap();
        assert!(!annotated[1].price_increased);
        assert!(!annotated[1].volume_increased);
    }

    #[test]
    fn empty_series_is_rejected() {
        assert!(matches!(
            SeriesAnnotator::annotate(&[]),
            Err(AppError::InvalidArgument(_))
        ));
    }

    #[test]
    fn format_rejects_nan_fields() {
        let ohlcv = Ohlcv::new(
            Price::from(f64::NAN),
            Price::from(20.0),
            Price::from(5.0),
            Price::from(15.0),
            Volume::from(1000.0),
        );
        assert!(format_ohlcv(&ohlcv).is_err());
    }
}
