use crate::domain::errors::AppError;
use serde::Deserialize;

/// One yearly balance sample in the growth series.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GrowthPoint {
    pub year: f64,
    pub value: f64,
}

/// Result Record for the compound growth calculator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GrowthResult {
    pub final_value: f64,
    pub total_invested: f64,
    pub total_gain: f64,
    pub growth_data: Vec<GrowthPoint>,
}

impl GrowthResult {
    /// Shape check before rendering; a violation is a network-level failure,
    /// never a partial render.
    pub fn validate(&self) -> Result<(), AppError> {
        if !self.final_value.is_finite()
            || !self.total_invested.is_finite()
            || !self.total_gain.is_finite()
        {
            return Err(AppError::Network("Growth response contains invalid numbers".to_string()));
        }
        if self.growth_data.is_empty() {
            return Err(AppError::Network("Growth response has no data points".to_string()));
        }
        if self.growth_data.iter().any(|p| !p.year.is_finite() || !p.value.is_finite()) {
            return Err(AppError::Network("Growth series contains invalid points".to_string()));
        }
        Ok(())
    }
}

/// Result Record for the price projection calculator. The error metric
/// fields are optional - older backends omit them entirely.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectionResult {
    pub current_price: f64,
    pub projected_price: f64,
    pub low_price: f64,
    pub high_price: f64,
    #[serde(default)]
    pub r2_score: Option<f64>,
    #[serde(default)]
    pub mean_absolute_error: Option<f64>,
    #[serde(default)]
    pub mean_squared_error: Option<f64>,
}

impl ProjectionResult {
    pub fn validate(&self) -> Result<(), AppError> {
        let prices =
            [self.current_price, self.projected_price, self.low_price, self.high_price];
        if prices.iter().any(|p| !p.is_finite()) {
            return Err(AppError::Network(
                "Projection response contains invalid prices".to_string(),
            ));
        }
        Ok(())
    }
}

/// Result Record for the historical chart: parallel date/price sequences.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoricalSeries {
    pub dates: Vec<String>,
    pub prices: Vec<f64>,
}

impl HistoricalSeries {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.dates.len() != self.prices.len() {
            return Err(AppError::Network(
                "Historical response has mismatched dates/prices".to_string(),
            ));
        }
        if self.dates.is_empty() {
            return Err(AppError::Network(
                "No historical data available for this ticker/period".to_string(),
            ));
        }
        if self.prices.iter().any(|p| !p.is_finite()) {
            return Err(AppError::Network(
                "Historical response contains invalid prices".to_string(),
            ));
        }
        Ok(())
    }
}

/// Optional model metric for a result tile; absent metrics render as `N/A`.
pub fn format_metric(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.4}", v),
        None => "N/A".to_string(),
    }
}

/// `$1,234,567.89`-style display formatting for result tiles.
pub fn format_usd(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, frac)
}
