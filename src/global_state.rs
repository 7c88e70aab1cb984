use crate::app::TooltipData;
use crate::domain::catalog::SymbolCatalog;
use crate::domain::market_data::Symbol;
use leptos::*;
use once_cell::sync::OnceCell;

pub struct Globals {
    pub catalog: RwSignal<SymbolCatalog>,
    pub selected_symbol: RwSignal<Symbol>,
    pub tooltip_data: RwSignal<Option<TooltipData>>,
    pub tooltip_visible: RwSignal<bool>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        catalog: create_rw_signal(SymbolCatalog::default_catalog()),
        selected_symbol: create_rw_signal(Symbol::from("EURUSD")),
        tooltip_data: create_rw_signal(None),
        tooltip_visible: create_rw_signal(false),
    })
}

/// Generate accessor functions for global signals.
///
/// Usage:
/// `global_signals! {
///     pub fn1 => field1: Type1,
///     fn2 => field2: Type2,
/// }`
#[macro_export]
macro_rules! global_signals {
    ( $( $vis:vis $name:ident => $field:ident : $ty:ty ),+ $(,)? ) => {
        $(
            $vis fn $name() -> ::leptos::RwSignal<$ty> {
                $crate::global_state::globals().$field
            }
        )+
    };
}

global_signals! {
    pub catalog_signal => catalog: SymbolCatalog,
    pub selected_symbol_signal => selected_symbol: Symbol,
    pub tooltip_data_signal => tooltip_data: Option<TooltipData>,
    pub tooltip_visible_signal => tooltip_visible: bool,
}
