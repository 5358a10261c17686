use crate::domain::calculators::{
    GrowthRequest, GrowthResult, HistoricalSeries, HistoryPeriod, ProjectionRequest,
    ProjectionResult,
};
use crate::domain::errors::{AppError, NetworkResult};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::tickers::Symbol;
use gloo_net::http::Request;
use serde::Serialize;
use serde::de::DeserializeOwned;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// HTTP client for the calculator backend.
#[derive(Debug, Clone)]
pub struct CalcApiClient {
    base_url: String,
}

impl Default for CalcApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CalcApiClient {
    pub fn new() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string() }
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_string() }
    }

    pub fn compound_growth_url(&self) -> String {
        format!("{}/api/compound-growth", self.base_url)
    }

    pub fn price_projection_url(&self) -> String {
        format!("{}/api/price-projection", self.base_url)
    }

    pub fn historical_url(&self, ticker: &Symbol, period: HistoryPeriod) -> String {
        format!(
            "{}/api/historical?ticker={}&period={}",
            self.base_url,
            ticker.value(),
            period.as_ref()
        )
    }

    /// `POST /api/compound-growth`
    pub async fn compound_growth(&self, request: &GrowthRequest) -> NetworkResult<GrowthResult> {
        self.post_json(&self.compound_growth_url(), request).await
    }

    /// `POST /api/price-projection`
    pub async fn price_projection(
        &self,
        request: &ProjectionRequest,
    ) -> NetworkResult<ProjectionResult> {
        self.post_json(&self.price_projection_url(), request).await
    }

    /// `GET /api/historical?ticker=..&period=..`
    pub async fn historical(
        &self,
        ticker: &Symbol,
        period: HistoryPeriod,
    ) -> NetworkResult<HistoricalSeries> {
        let url = self.historical_url(ticker, period);
        get_logger().info(
            LogComponent::Infrastructure("CalcAPI"),
            &format!("📡 GET {}", url),
        );

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Failed to send request: {e:?}")))?;

        Self::decode(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> NetworkResult<T> {
        get_logger().info(LogComponent::Infrastructure("CalcAPI"), &format!("📡 POST {}", url));

        let response = Request::post(url)
            .json(body)
            .map_err(|e| AppError::Network(format!("Failed to encode request body: {e:?}")))?
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Failed to send request: {e:?}")))?;

        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: gloo_net::http::Response) -> NetworkResult<T> {
        if !response.ok() {
            return Err(AppError::Network(format!(
                "HTTP error: {} {}",
                response.status(),
                response.status_text()
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Network(format!("Failed to parse JSON: {e:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn historical_url_carries_ticker_and_period() {
        let client = CalcApiClient::new();
        let url = client.historical_url(&Symbol::from("aapl"), HistoryPeriod::OneYear);
        assert_eq!(url, "http://localhost:8000/api/historical?ticker=AAPL&period=1y");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = CalcApiClient::with_base_url("https://calc.example.com/");
        assert_eq!(
            client.compound_growth_url(),
            "https://calc.example.com/api/compound-growth"
        );
        assert_eq!(
            client.price_projection_url(),
            "https://calc.example.com/api/price-projection"
        );
    }
}
