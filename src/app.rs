use leptos::html::Div;
use leptos::*;

use crate::domain::{
    catalog::SymbolCatalog,
    chart::{ChartKind, ChartState, PlotArea},
    logging::LogComponent,
    market_data::{AnnotatedPoint, Symbol, format_datum, sample_series},
};
use crate::event_utils::{EventOptions, target_event_listener_with_options};
use crate::global_state::{
    catalog_signal, selected_symbol_signal, tooltip_data_signal, tooltip_visible_signal,
};
use crate::infrastructure::CatalogHttpClient;
use crate::time_utils::format_date_local;
use crate::{log_error, log_warn};

// Plot geometry in viewBox units, matching the frame's CSS size so mouse
// offsets map to slots without extra scaling.
const CHART_WIDTH: f64 = 1000.0;
const CANDLE_HEIGHT: f64 = 600.0;
const VOLUME_HEIGHT: f64 = 200.0;

const CLR_GREEN: &str = "#00ff00";
const CLR_RED: &str = "#c43a31";

/// Hover tooltip payload: the formatted label and its anchor position.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipData {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

impl TooltipData {
    /// Build tooltip data for one hovered point. Returns `None` when the
    /// datum is incomplete; the tooltip is omitted rather than shown broken.
    pub fn for_point(point: &AnnotatedPoint, x: f64, y: f64) -> Option<Self> {
        let date_label = format_date_local(point.timestamp.as_f64());
        format_datum(&date_label, &point.ohlcv)
            .ok()
            .map(|text| Self { text, x, y })
    }
}

/// Root component: sidenav plus the chart column.
#[component]
pub fn App() -> impl IntoView {
    // Fire-and-forget catalog fetch. A failure is logged and the built-in
    // catalog stays in place.
    spawn_local(async move {
        match CatalogHttpClient::new().fetch_catalog().await {
            Ok(catalog) => catalog_signal().set(catalog),
            Err(e) => {
                log_error!(LogComponent::Presentation("App"), "asset catalog fetch failed: {e}")
            }
        }
    });

    let on_item_select = Callback::new(move |name: String| match Symbol::new(name) {
        Ok(symbol) => selected_symbol_signal().set(symbol),
        Err(e) => log_warn!(LogComponent::Presentation("Sidenav"), "ignoring selection: {e}"),
    });

    view! {
        <style>{STYLES}</style>
        <div class="trade-chart-app">
            <Sidenav on_item_select=on_item_select/>
            <main class="chart-column">
                <ScrollCandleChart/>
            </main>
        </div>
    }
}

/// Sidebar navigator over the symbol catalog: one expandable group per
/// category, a text filter that flattens groups, and a collapse toggle that
/// hides all content.
#[component]
fn Sidenav(#[prop(into)] on_item_select: Callback<String>) -> impl IntoView {
    let (collapsed, set_collapsed) = create_signal(false);
    let (filter, set_filter) = create_signal(String::new());
    let catalog = catalog_signal();

    view! {
        <aside class="sidenav" class:collapsed=move || collapsed.get()>
            <button
                class="sidenav-toggle"
                on:click=move |_| set_collapsed.update(|c| *c = !*c)
            >
                {move || if collapsed.get() { ">>" } else { "<<" }}
            </button>
            <Show when=move || !collapsed.get()>
                <h5 class="sidenav-brand">"TRADE WITH SCIENCE"</h5>
                <input
                    class="sidenav-filter"
                    type="text"
                    placeholder="Filter symbols"
                    prop:value=move || filter.get()
                    on:input=move |ev| set_filter.set(event_target_value(&ev))
                />
                {move || {
                    let text = filter.get();
                    if text.is_empty() {
                        view! {
                            <CatalogGroups catalog=catalog.get() on_item_select=on_item_select/>
                        }
                            .into_view()
                    } else {
                        view! {
                            <FilteredSymbolList
                                catalog=catalog.get()
                                filter=text
                                on_item_select=on_item_select
                            />
                        }
                            .into_view()
                    }
                }}
            </Show>
        </aside>
    }
}

#[component]
fn CatalogGroups(
    catalog: SymbolCatalog,
    #[prop(into)] on_item_select: Callback<String>,
) -> impl IntoView {
    let groups = store_value(catalog.into_groups());

    view! {
        <ul class="sidenav-menu">
            <For
                each=move || groups.get_value()
                key=|(category, _)| category.clone()
                children=move |(category, symbols)| {
                    view! { <CatalogGroup category=category symbols=symbols on_item_select=on_item_select/> }
                }
            />
        </ul>
    }
}

#[component]
fn CatalogGroup(
    category: String,
    symbols: Vec<String>,
    #[prop(into)] on_item_select: Callback<String>,
) -> impl IntoView {
    let (expanded, set_expanded) = create_signal(true);
    let symbols = store_value(symbols);
    let label = store_value(category);

    view! {
        <li class="sidenav-group">
            <button
                class="sidenav-group-label"
                on:click=move |_| set_expanded.update(|e| *e = !*e)
            >
                {move || label.get_value()}
            </button>
            <Show when=move || expanded.get()>
                <ul>
                    <For
                        each=move || symbols.get_value()
                        key=|symbol| symbol.clone()
                        children=move |symbol| {
                            let display = symbol.clone();
                            view! {
                                <li>
                                    <button
                                        class="sidenav-item"
                                        on:click=move |_| on_item_select.call(symbol.clone())
                                    >
                                        {display}
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </li>
    }
}

/// Flat symbol list shown while a filter is active. Grouping is suppressed;
/// each hit is labeled `"<category>/<symbol>"` and selecting it reports the
/// bare symbol name.
#[component]
fn FilteredSymbolList(
    catalog: SymbolCatalog,
    filter: String,
    #[prop(into)] on_item_select: Callback<String>,
) -> impl IntoView {
    let entries = store_value(catalog.filter_flat(&filter));

    view! {
        <ul class="sidenav-flat">
            <For
                each=move || entries.get_value()
                key=|entry| entry.label()
                children=move |entry| {
                    let label = entry.label();
                    let symbol = entry.symbol;
                    view! {
                        <li>
                            <button
                                class="sidenav-item"
                                on:click=move |_| on_item_select.call(symbol.clone())
                            >
                                {label}
                            </button>
                        </li>
                    }
                }
            />
        </ul>
    }
}

fn load_chart(symbol: &Symbol) -> ChartState {
    match ChartState::from_points(&sample_series(symbol)) {
        Ok(state) => state,
        Err(e) => {
            log_warn!(
                LogComponent::Presentation("ScrollCandleChart"),
                "failed to build chart for {}: {e}",
                symbol.value()
            );
            ChartState::empty()
        }
    }
}

/// Candle and volume plots over a shared scroll window, with wheel scrolling
/// and a hover tooltip.
#[component]
fn ScrollCandleChart() -> impl IntoView {
    let selected = selected_symbol_signal();
    let chart = create_rw_signal(ChartState::empty());
    let container_ref = create_node_ref::<Div>();

    // Reload (and reset the window) whenever the selection changes.
    create_effect(move |_| {
        let symbol = selected.get();
        chart.set(load_chart(&symbol));
    });

    // The wheel listener must be non-passive so the page does not scroll
    // while the chart window moves.
    create_effect(move |_| {
        if let Some(container) = container_ref.get() {
            let target: &web_sys::EventTarget = &container;
            let handle = target_event_listener_with_options(
                target,
                leptos::ev::wheel,
                &EventOptions { passive: false, ..EventOptions::default() },
                move |event: web_sys::WheelEvent| {
                    event.prevent_default();
                    chart.update(|c| c.scroll_by(event.delta_y()));
                },
            );
            on_cleanup(move || handle.remove());
        }
    });

    let handle_mouse_move = move |event: web_sys::MouseEvent| {
        let Some(frame) = container_ref.get() else {
            return;
        };
        let rect = frame.get_bounding_client_rect();
        let x = event.client_x() as f64 - rect.left();
        let y = event.client_y() as f64 - rect.top();

        chart.with(|c| {
            let visible = c.visible();
            if visible.is_empty() || rect.width() <= 0.0 {
                tooltip_visible_signal().set(false);
                return;
            }
            let index = (x / rect.width() * visible.len() as f64).floor() as usize;
            match c.visible_point(index).and_then(|point| TooltipData::for_point(point, x, y)) {
                Some(data) => {
                    tooltip_data_signal().set(Some(data));
                    tooltip_visible_signal().set(true);
                }
                None => tooltip_visible_signal().set(false),
            }
        });
    };

    view! {
        <div class="chart-container">
            <ChartHeader chart=chart/>
            <div
                class="chart-frame"
                node_ref=container_ref
                on:mousemove=handle_mouse_move
                on:mouseleave=move |_| tooltip_visible_signal().set(false)
            >
                <CandlePlot chart=chart/>
                <VolumePlot chart=chart/>
                <ChartTooltip/>
            </div>
        </div>
    }
}

#[component]
fn ChartHeader(chart: RwSignal<ChartState>) -> impl IntoView {
    let selected = selected_symbol_signal();

    view! {
        <div class="header">
            <h1>{move || selected.get().value().to_string()}</h1>
            <div class="price-info">
                <div class="price-item">
                    <div class="price-value">
                        {move || {
                            chart
                                .with(|c| {
                                    c.latest_close()
                                        .map(|p| format!("{:.2}", p.value()))
                                        .unwrap_or_else(|| "--".to_string())
                                })
                        }}
                    </div>
                    <div class="price-label">"Latest Close"</div>
                </div>
                <div class="price-item">
                    <div class="price-value">{move || chart.with(|c| c.len()).to_string()}</div>
                    <div class="price-label">"Points"</div>
                </div>
                <div class="price-item">
                    <div class="price-value">
                        {move || {
                            chart
                                .with(|c| match c.visible().last() {
                                    Some(point) if point.price_increased => "▲",
                                    Some(_) => "▼",
                                    None => "-",
                                })
                        }}
                    </div>
                    <div class="price-label">"Trend"</div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn CandlePlot(chart: RwSignal<ChartState>) -> impl IntoView {
    view! {
        <svg
            class=format!("plot {}", ChartKind::Candlestick.as_ref())
            viewBox=format!("0 0 {CHART_WIDTH} {CANDLE_HEIGHT}")
            preserveAspectRatio="none"
        >
            {move || chart.with(render_candles)}
        </svg>
    }
}

#[component]
fn VolumePlot(chart: RwSignal<ChartState>) -> impl IntoView {
    view! {
        <svg
            class=format!("plot {}", ChartKind::Volume.as_ref())
            viewBox=format!("0 0 {CHART_WIDTH} {VOLUME_HEIGHT}")
            preserveAspectRatio="none"
        >
            {move || chart.with(render_volume)}
        </svg>
    }
}

fn render_candles(chart: &ChartState) -> View {
    let visible = chart.visible();
    let Some((min, max)) = chart.visible_price_bounds() else {
        return ().into_view();
    };
    let plot = PlotArea::new(CHART_WIDTH, CANDLE_HEIGHT, min, max);
    let count = visible.len();
    let body_width = plot.slot_width(count) * 0.6;

    let mut nodes: Vec<View> = Vec::with_capacity(count * 2 + 1);

    // Reference line at the close of the whole series, not of the window.
    if let Some(close) = chart.latest_close() {
        let y = plot.value_to_y(close.value());
        nodes.push(
            view! {
                <line
                    x1=0.0
                    y1=y
                    x2=CHART_WIDTH
                    y2=y
                    stroke=CLR_GREEN
                    stroke-width=1.0
                    stroke-dasharray="5,5"
                />
            }
            .into_view(),
        );
    }

    for (index, point) in visible.iter().enumerate() {
        let x = plot.index_to_x(index, count);
        let color = if point.is_bullish() { CLR_GREEN } else { CLR_RED };
        let open = point.ohlcv.open.value();
        let close = point.ohlcv.close.value();
        let body_top = plot.value_to_y(open.max(close));
        let body_bottom = plot.value_to_y(open.min(close));

        nodes.push(
            view! {
                <line
                    x1=x
                    y1={plot.value_to_y(point.ohlcv.high.value())}
                    x2=x
                    y2={plot.value_to_y(point.ohlcv.low.value())}
                    stroke=color
                    stroke-width=1.0
                />
            }
            .into_view(),
        );
        nodes.push(
            view! {
                <rect
                    x={x - body_width / 2.0}
                    y=body_top
                    width=body_width
                    height={(body_bottom - body_top).max(1.0)}
                    fill=color
                />
            }
            .into_view(),
        );
    }

    nodes.into_view()
}

fn render_volume(chart: &ChartState) -> View {
    let visible = chart.visible();
    let Some(max_volume) = chart.visible_max_volume() else {
        return ().into_view();
    };
    let plot = PlotArea::new(CHART_WIDTH, VOLUME_HEIGHT, 0.0, max_volume);
    let count = visible.len();
    let bar_width = plot.slot_width(count) * 0.6;

    visible
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let x = plot.index_to_x(index, count);
            let y = plot.value_to_y(point.ohlcv.volume.value());
            let color = if point.volume_increased { CLR_GREEN } else { CLR_RED };
            view! {
                <rect
                    x={x - bar_width / 2.0}
                    y=y
                    width=bar_width
                    height={(VOLUME_HEIGHT - y).max(0.0)}
                    fill=color
                />
            }
        })
        .collect_view()
}

/// Tooltip anchored inside the chart frame, driven by the global hover
/// signals.
#[component]
fn ChartTooltip() -> impl IntoView {
    let tooltip_visible = tooltip_visible_signal();
    let tooltip_data = tooltip_data_signal();

    view! {
        <div
            class="tooltip"
            style:display=move || if tooltip_visible.get() { "block" } else { "none" }
            style:left=move || {
                tooltip_data.with(|data| data.as_ref().map(|t| format!("{}px", t.x)).unwrap_or_else(|| "0px".to_string()))
            }
            style:top=move || {
                tooltip_data.with(|data| data.as_ref().map(|t| format!("{}px", t.y)).unwrap_or_else(|| "0px".to_string()))
            }
        >
            {move || tooltip_data.with(|data| data.as_ref().map(|t| t.text.clone()).unwrap_or_default())}
        </div>
    }
}

const STYLES: &str = r#"
.trade-chart-app {
    font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
    display: flex;
    min-height: 100vh;
    background: #1c2733;
    color: #e0e0e0;
}

.sidenav {
    width: 240px;
    padding: 10px;
    background: #141c26;
    border-right: 1px solid #4a5d73;
}

.sidenav.collapsed {
    width: 40px;
}

.sidenav-brand {
    margin: 10px 0;
    color: #72c685;
    letter-spacing: 1px;
}

.sidenav-toggle,
.sidenav-group-label,
.sidenav-item {
    background: none;
    border: none;
    color: inherit;
    cursor: pointer;
    text-align: left;
    width: 100%;
    padding: 4px 6px;
}

.sidenav-group-label {
    font-weight: bold;
    color: #72c685;
}

.sidenav-item:hover {
    background: rgba(255, 255, 255, 0.1);
}

.sidenav-filter {
    width: 100%;
    margin-bottom: 10px;
    padding: 4px 6px;
    background: #1c2733;
    border: 1px solid #4a5d73;
    border-radius: 4px;
    color: inherit;
}

.sidenav-menu,
.sidenav-flat,
.sidenav-group ul {
    list-style: none;
    margin: 0;
    padding-left: 8px;
}

.chart-column {
    flex: 1;
    padding: 20px;
}

.header {
    margin-bottom: 15px;
}

.price-info {
    display: flex;
    gap: 40px;
}

.price-item {
    text-align: center;
}

.price-value {
    font-family: 'Courier New', monospace;
    font-size: 20px;
    font-weight: 700;
    color: #72c685;
}

.price-label {
    font-size: 12px;
    color: #a0a0a0;
    margin-top: 5px;
}

.chart-frame {
    position: relative;
    width: 1000px;
    cursor: crosshair;
}

.plot {
    display: block;
    border: 1px solid #4a5d73;
    background: #2c3e50;
}

.plot.candlestick {
    width: 1000px;
    height: 600px;
    margin-bottom: 5px;
}

.plot.volume {
    width: 1000px;
    height: 200px;
}

.tooltip {
    position: absolute;
    background: rgba(0, 0, 0, 0.9);
    color: white;
    padding: 8px 12px;
    border-radius: 6px;
    font-size: 12px;
    font-family: 'Courier New', monospace;
    white-space: pre-line;
    pointer-events: none;
    z-index: 1000;
    border: 1px solid #4a5d73;
    transform: translate(10px, -100%);
}
"#;
