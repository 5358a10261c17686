use marketcalc_wasm::domain::calculators::{
    GrowthResult, HistoricalSeries, ProjectionResult,
};
use marketcalc_wasm::domain::errors::AppError;
use serde_json::json;

#[test]
fn projection_decodes_without_optional_metrics() {
    let result: ProjectionResult = serde_json::from_value(json!({
        "current_price": 150.0,
        "projected_price": 162.0,
        "low_price": 140.0,
        "high_price": 175.0
    }))
    .unwrap();

    assert_eq!(result.projected_price, 162.0);
    assert_eq!(result.r2_score, None);
    assert!(result.validate().is_ok());
}

#[test]
fn projection_decodes_with_metrics() {
    let result: ProjectionResult = serde_json::from_value(json!({
        "current_price": 150.0,
        "projected_price": 162.0,
        "low_price": 140.0,
        "high_price": 175.0,
        "r2_score": 0.87,
        "mean_absolute_error": 1.2,
        "mean_squared_error": 2.9
    }))
    .unwrap();

    assert_eq!(result.r2_score, Some(0.87));
    assert!(result.validate().is_ok());
}

#[test]
fn projection_missing_fields_is_a_decode_error() {
    // Backend error bodies ({"error": ...}) must not decode into a result
    let decoded = serde_json::from_value::<ProjectionResult>(json!({
        "error": "Invalid ticker or no data available"
    }));
    assert!(decoded.is_err());
}

#[test]
fn projection_rejects_non_finite_prices() {
    let result = ProjectionResult {
        current_price: 150.0,
        projected_price: f64::NAN,
        low_price: 140.0,
        high_price: 175.0,
        r2_score: None,
        mean_absolute_error: None,
        mean_squared_error: None,
    };
    assert!(matches!(result.validate(), Err(AppError::Network(_))));
}

#[test]
fn growth_result_requires_data_points() {
    let result: GrowthResult = serde_json::from_value(json!({
        "final_value": 1000.0,
        "total_invested": 900.0,
        "total_gain": 100.0,
        "growth_data": []
    }))
    .unwrap();
    assert!(matches!(result.validate(), Err(AppError::Network(_))));
}

#[test]
fn growth_result_roundtrip() {
    let result: GrowthResult = serde_json::from_value(json!({
        "final_value": 173839.6,
        "total_invested": 70000.0,
        "total_gain": 103839.6,
        "growth_data": [{"year": 1, "value": 16877.0}, {"year": 2, "value": 24251.0}]
    }))
    .unwrap();

    assert!(result.validate().is_ok());
    assert_eq!(result.growth_data.len(), 2);
    assert_eq!(result.growth_data[0].year, 1.0);
}

#[test]
fn historical_series_rejects_mismatched_lengths() {
    let series = HistoricalSeries {
        dates: vec!["2025-01-02".to_string(), "2025-01-03".to_string()],
        prices: vec![101.5],
    };
    assert!(matches!(series.validate(), Err(AppError::Network(_))));
}

#[test]
fn historical_series_rejects_empty_payload() {
    // The backend signals unknown tickers with empty arrays and a 200
    let series: HistoricalSeries =
        serde_json::from_value(json!({"dates": [], "prices": []})).unwrap();
    assert!(matches!(series.validate(), Err(AppError::Network(_))));
}

#[test]
fn historical_series_accepts_parallel_arrays() {
    let series: HistoricalSeries = serde_json::from_value(json!({
        "dates": ["2025-01-02", "2025-01-03"],
        "prices": [101.5, 103.25]
    }))
    .unwrap();
    assert!(series.validate().is_ok());
}
