use crate::domain::catalog::SymbolCatalog;
use crate::domain::errors::AppError;
use crate::domain::logging::{LogComponent, get_logger};
use gloo_net::http::Request;

/// Local development endpoint serving the asset list.
pub const DEFAULT_ASSETS_BASE_URL: &str = "http://127.0.0.1:6050";

/// REST client for the asset catalog endpoint.
#[derive(Clone)]
pub struct CatalogHttpClient {
    base_url: String,
}

impl Default for CatalogHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogHttpClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_ASSETS_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn assets_url(&self) -> String {
        format!("{}/assets", self.base_url)
    }

    /// Fetch the symbol catalog. One shot: no retry, no timeout. The caller
    /// decides what to do with a failure; the UI only logs it.
    pub async fn fetch_catalog(&self) -> Result<SymbolCatalog, AppError> {
        let url = self.assets_url();
        get_logger().info(
            LogComponent::Infrastructure("CatalogAPI"),
            &format!("fetching symbol catalog from {url}"),
        );

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("failed to fetch asset catalog: {e:?}")))?;

        if !response.ok() {
            return Err(AppError::Network(format!("HTTP error: {}", response.status())));
        }

        let catalog: SymbolCatalog = response
            .json()
            .await
            .map_err(|e| AppError::Network(format!("failed to parse catalog JSON: {e:?}")))?;

        get_logger().info(
            LogComponent::Infrastructure("CatalogAPI"),
            &format!("loaded {} symbol groups", catalog.group_count()),
        );

        Ok(catalog)
    }
}
