use crate::domain::errors::AppError;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::tickers::Symbol;
use gloo_net::http::Request;

/// Fetches the static ticker symbol list (a JSON array of strings) that
/// feeds autocomplete. Loaded once per page.
#[derive(Debug, Clone)]
pub struct TickerCatalogClient {
    resource_path: String,
}

impl TickerCatalogClient {
    pub fn new(resource_path: &str) -> Self {
        Self { resource_path: resource_path.to_string() }
    }

    pub async fn fetch(&self) -> Result<Vec<Symbol>, AppError> {
        let response = Request::get(&self.resource_path)
            .send()
            .await
            .map_err(|e| AppError::ResourceLoad(format!("Error loading tickers: {e:?}")))?;

        if !response.ok() {
            return Err(AppError::ResourceLoad(format!(
                "Ticker catalog returned HTTP {}",
                response.status()
            )));
        }

        let raw: Vec<String> = response
            .json()
            .await
            .map_err(|e| AppError::ResourceLoad(format!("Malformed ticker catalog: {e:?}")))?;

        let symbols: Vec<Symbol> =
            raw.iter().filter_map(|s| Symbol::new(s.clone()).ok()).collect();

        get_logger().info(
            LogComponent::Infrastructure("TickerCatalog"),
            &format!("✅ Loaded {} ticker symbols from {}", symbols.len(), self.resource_path),
        );

        Ok(symbols)
    }
}
