use trade_chart_wasm::domain::catalog::SymbolCatalog;

#[test]
fn catalog_deserializes_from_the_wire_shape() {
    let catalog: SymbolCatalog =
        serde_json::from_str(r#"{"FX":["EURUSD","GBPUSD"],"Crypto":["BTCUSD"]}"#).unwrap();
    assert_eq!(catalog.group_count(), 2);
    assert_eq!(catalog.groups()["FX"], vec!["EURUSD", "GBPUSD"]);
}

#[test]
fn empty_object_is_an_empty_catalog() {
    let catalog: SymbolCatalog = serde_json::from_str("{}").unwrap();
    assert!(catalog.is_empty());
    assert_eq!(catalog.group_count(), 0);
}

#[test]
fn catalog_round_trips_through_json() {
    let catalog = SymbolCatalog::default_catalog();
    let json = serde_json::to_string(&catalog).unwrap();
    let parsed: SymbolCatalog = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, catalog);
}

#[test]
fn default_catalog_has_symbols() {
    let catalog = SymbolCatalog::default_catalog();
    assert!(!catalog.is_empty());
    assert!(catalog.groups().values().all(|symbols| !symbols.is_empty()));
}

#[test]
fn malformed_body_is_an_error() {
    assert!(serde_json::from_str::<SymbolCatalog>(r#"{"FX": "EURUSD"}"#).is_err());
    assert!(serde_json::from_str::<SymbolCatalog>("[1,2,3]").is_err());
}
