use trade_chart_wasm::domain::chart::{MAX_VISIBLE_POINTS, ScrollWindow};

#[test]
fn full_window_at_the_series_start() {
    let series: Vec<u32> = (0..90).collect();
    let window = ScrollWindow::new(series.len());
    assert_eq!(window.range(), 0..MAX_VISIBLE_POINTS);
    assert_eq!(window.slice(&series).len(), MAX_VISIBLE_POINTS);
    assert_eq!(window.slice(&series)[0], 0);
}

#[test]
fn slice_shortens_near_the_series_end() {
    let series: Vec<u32> = (0..90).collect();
    let mut window = ScrollWindow::new(series.len());
    for _ in 0..100 {
        window.scroll_by(-1.0);
    }
    assert_eq!(window.start(), 84);
    let visible = window.slice(&series);
    assert_eq!(visible.len(), 6);
    assert_eq!(visible, &[84, 85, 86, 87, 88, 89]);
}

#[test]
fn short_series_is_fully_visible() {
    let series: Vec<u32> = (0..10).collect();
    let window = ScrollWindow::new(series.len());
    assert_eq!(window.slice(&series).len(), 10);
}

#[test]
fn mismatched_backing_series_yields_empty_slice() {
    let series: Vec<u32> = (0..5).collect();
    let window = ScrollWindow::new(90);
    assert!(window.slice(&series).is_empty());
}
