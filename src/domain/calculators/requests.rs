use crate::domain::calculators::{ContributionFrequency, HistoryPeriod, Horizon, ProjectionModel};
use crate::domain::errors::AppError;
use crate::domain::tickers::Symbol;
use serde::Serialize;

/// Request Descriptor for `POST /api/compound-growth`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthRequest {
    pub years: u32,
    pub rate: f64,
    pub principal: f64,
    pub contribution: f64,
    pub frequency: ContributionFrequency,
}

impl GrowthRequest {
    /// Field-level validation before anything touches the network.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.years == 0 {
            return Err(AppError::Validation("Years must be at least 1.".to_string()));
        }
        if !self.rate.is_finite() || !self.principal.is_finite() || !self.contribution.is_finite()
        {
            return Err(AppError::Validation("Please enter valid numbers.".to_string()));
        }
        if self.principal < 0.0 || self.contribution < 0.0 {
            return Err(AppError::Validation("Amounts cannot be negative.".to_string()));
        }
        Ok(())
    }
}

/// Request Descriptor for `POST /api/price-projection`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionRequest {
    pub ticker: Symbol,
    pub horizon: Horizon,
    pub model: ProjectionModel,
}

impl ProjectionRequest {
    /// Build from raw form fields. An empty ticker blocks submission here,
    /// before any network call.
    pub fn from_fields(ticker: &str, horizon: u32, model: ProjectionModel) -> Result<Self, AppError> {
        let ticker = Symbol::new(ticker.to_string())
            .map_err(|_| AppError::Validation("Please enter a ticker symbol.".to_string()))?;
        if horizon == 0 {
            return Err(AppError::Validation("Horizon must be at least 1 day.".to_string()));
        }
        Ok(Self { ticker, horizon: Horizon::from(horizon), model })
    }
}

/// Query parameters for `GET /api/historical`.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalQuery {
    pub ticker: Symbol,
    pub period: HistoryPeriod,
}

impl HistoricalQuery {
    pub fn from_fields(ticker: &str, period: HistoryPeriod) -> Result<Self, AppError> {
        let ticker = Symbol::new(ticker.to_string())
            .map_err(|_| AppError::Validation("Please enter a ticker symbol.".to_string()))?;
        Ok(Self { ticker, period })
    }
}
