use crate::domain::calculators::{GrowthResult, HistoricalSeries, ProjectionRequest, ProjectionResult};
use crate::domain::tickers::Symbol;
use crate::infrastructure::rendering::{ChartDataset, LineChartSpec};

// Shared dataset palette (dark theme)
const SKY: &str = "#38bdf8";
const SKY_FILL: &str = "rgba(56, 189, 248, 0.2)";
const RED: &str = "#f87171";

/// Portfolio value over the years, one filled line.
pub fn growth_chart_spec(result: &GrowthResult) -> LineChartSpec {
    LineChartSpec {
        x_labels: None,
        datasets: vec![ChartDataset {
            label: "Portfolio Value ($)".to_string(),
            points: result.growth_data.iter().map(|p| (p.year, p.value)).collect(),
            stroke: SKY,
            fill: Some(SKY_FILL),
            dashed: false,
            point_radius: 0.0,
        }],
    }
}

/// Two-point projection: today's price to the projected one, plus a dashed
/// low/high confidence band at the endpoints.
pub fn projection_chart_spec(
    request: &ProjectionRequest,
    result: &ProjectionResult,
) -> LineChartSpec {
    LineChartSpec {
        x_labels: Some(vec![
            "Today".to_string(),
            format!("+{} Days", request.horizon.value()),
        ]),
        datasets: vec![
            ChartDataset {
                label: "Price Projection".to_string(),
                points: vec![(0.0, result.current_price), (1.0, result.projected_price)],
                stroke: SKY,
                fill: Some(SKY_FILL),
                dashed: false,
                point_radius: 5.0,
            },
            ChartDataset {
                label: "Low/High Range".to_string(),
                points: vec![(0.0, result.low_price), (1.0, result.high_price)],
                stroke: RED,
                fill: None,
                dashed: true,
                point_radius: 0.0,
            },
        ],
    }
}

/// Closing price history, one filled line over date labels.
pub fn historical_chart_spec(symbol: &Symbol, series: &HistoricalSeries) -> LineChartSpec {
    LineChartSpec {
        x_labels: Some(series.dates.clone()),
        datasets: vec![ChartDataset {
            label: format!("{} Price", symbol.value()),
            points: series
                .prices
                .iter()
                .enumerate()
                .map(|(i, &price)| (i as f64, price))
                .collect(),
            stroke: SKY,
            fill: Some(SKY_FILL),
            dashed: false,
            point_radius: 0.0,
        }],
    }
}
