use trade_chart_wasm::domain::catalog::SymbolCatalog;

fn catalog() -> SymbolCatalog {
    serde_json::from_str(r#"{"FX":["EURUSD","GBPUSD"],"Crypto":["BTCUSD"]}"#).unwrap()
}

#[test]
fn filter_flattens_across_categories() {
    let labels: Vec<String> = catalog().filter_flat("usd").iter().map(|e| e.label()).collect();
    assert_eq!(labels.len(), 3);
    assert!(labels.contains(&"FX/EURUSD".to_string()));
    assert!(labels.contains(&"FX/GBPUSD".to_string()));
    assert!(labels.contains(&"Crypto/BTCUSD".to_string()));
}

#[test]
fn filter_narrows_to_matching_symbols() {
    let labels: Vec<String> = catalog().filter_flat("eur").iter().map(|e| e.label()).collect();
    assert_eq!(labels, vec!["FX/EURUSD".to_string()]);
}

#[test]
fn filter_is_case_insensitive() {
    let catalog = catalog();
    assert_eq!(catalog.filter_flat("USD").len(), 3);
    assert_eq!(catalog.filter_flat("Usd").len(), 3);
}

#[test]
fn unmatched_filter_yields_nothing() {
    assert!(catalog().filter_flat("xyz").is_empty());
}

#[test]
fn duplicate_symbols_keep_one_entry_per_category() {
    let catalog: SymbolCatalog =
        serde_json::from_str(r#"{"FX":["XAUUSD"],"Metals":["XAUUSD"]}"#).unwrap();
    let labels: Vec<String> = catalog.filter_flat("xau").iter().map(|e| e.label()).collect();
    assert_eq!(labels.len(), 2);
    assert!(labels.contains(&"FX/XAUUSD".to_string()));
    assert!(labels.contains(&"Metals/XAUUSD".to_string()));
}

#[test]
fn entries_expose_the_bare_symbol_name() {
    let hits = catalog().filter_flat("eur");
    assert_eq!(hits[0].symbol, "EURUSD");
    assert_eq!(hits[0].category, "FX");
}
