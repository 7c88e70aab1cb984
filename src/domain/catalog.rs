//! Symbol catalog aggregate: grouped instrument names for the sidenav.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One hit of a flattened catalog search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub category: String,
    pub symbol: String,
}

impl CatalogEntry {
    /// Flat list label, `"<category>/<symbol>"`.
    pub fn label(&self) -> String {
        format!("{}/{}", self.category, self.symbol)
    }
}

/// Mapping from category name to an ordered list of symbol names.
///
/// Deserializes from a plain JSON object, the wire shape of the asset
/// endpoint. No uniqueness is enforced across categories; a symbol may
/// legally appear under more than one of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolCatalog {
    groups: BTreeMap<String, Vec<String>>,
}

impl SymbolCatalog {
    pub fn new(groups: BTreeMap<String, Vec<String>>) -> Self {
        Self { groups }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn groups(&self) -> &BTreeMap<String, Vec<String>> {
        &self.groups
    }

    /// Owned `(category, symbols)` pairs for view iteration.
    pub fn into_groups(self) -> Vec<(String, Vec<String>)> {
        self.groups.into_iter().collect()
    }

    /// Flatten the catalog to every symbol whose name contains `filter`,
    /// case-insensitively, across all categories. Category grouping is
    /// suppressed in the result; an empty filter matches everything.
    pub fn filter_flat(&self, filter: &str) -> Vec<CatalogEntry> {
        let needle = filter.to_lowercase();
        self.groups
            .iter()
            .flat_map(|(category, symbols)| {
                symbols
                    .iter()
                    .filter(|symbol| symbol.to_lowercase().contains(&needle))
                    .map(|symbol| CatalogEntry {
                        category: category.clone(),
                        symbol: symbol.clone(),
                    })
            })
            .collect()
    }

    /// Built-in catalog shown until the asset endpoint answers.
    pub fn default_catalog() -> Self {
        let mut groups = BTreeMap::new();
        groups.insert(
            "FX".to_string(),
            vec!["EURUSD".to_string(), "GBPUSD".to_string(), "USDJPY".to_string()],
        );
        groups.insert(
            "Crypto".to_string(),
            vec!["BTCUSD".to_string(), "ETHUSD".to_string()],
        );
        groups.insert(
            "Index".to_string(),
            vec!["SPX500".to_string(), "NAS100".to_string()],
        );
        Self { groups }
    }
}
