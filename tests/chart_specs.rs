use marketcalc_wasm::application::{
    growth_chart_spec, historical_chart_spec, projection_chart_spec,
};
use marketcalc_wasm::domain::calculators::{
    GrowthPoint, GrowthResult, HistoricalSeries, ProjectionModel, ProjectionRequest,
    ProjectionResult,
};
use marketcalc_wasm::domain::tickers::Symbol;

fn projection_fixture() -> (ProjectionRequest, ProjectionResult) {
    let request = ProjectionRequest::from_fields("AAPL", 30, ProjectionModel::Linear).unwrap();
    let result = ProjectionResult {
        current_price: 150.0,
        projected_price: 162.0,
        low_price: 140.0,
        high_price: 175.0,
        r2_score: None,
        mean_absolute_error: None,
        mean_squared_error: None,
    };
    (request, result)
}

#[test]
fn projection_spec_has_projection_line_and_dashed_band() {
    let (request, result) = projection_fixture();
    let spec = projection_chart_spec(&request, &result);

    assert_eq!(
        spec.x_labels,
        Some(vec!["Today".to_string(), "+30 Days".to_string()])
    );
    assert_eq!(spec.datasets.len(), 2);

    let projection = &spec.datasets[0];
    assert_eq!(projection.points, vec![(0.0, 150.0), (1.0, 162.0)]);
    assert!(!projection.dashed);
    assert!(projection.fill.is_some());

    let band = &spec.datasets[1];
    assert_eq!(band.points, vec![(0.0, 140.0), (1.0, 175.0)]);
    assert!(band.dashed);
    assert!(band.fill.is_none());
}

#[test]
fn growth_spec_plots_year_value_pairs() {
    let result = GrowthResult {
        final_value: 24251.0,
        total_invested: 22000.0,
        total_gain: 2251.0,
        growth_data: vec![
            GrowthPoint { year: 1.0, value: 16877.0 },
            GrowthPoint { year: 2.0, value: 24251.0 },
        ],
    };

    let spec = growth_chart_spec(&result);
    assert_eq!(spec.datasets.len(), 1);
    assert_eq!(spec.datasets[0].points, vec![(1.0, 16877.0), (2.0, 24251.0)]);
    assert_eq!(spec.x_labels, None);
}

#[test]
fn historical_spec_indexes_prices_over_date_labels() {
    let series = HistoricalSeries {
        dates: vec!["2025-01-02".to_string(), "2025-01-03".to_string()],
        prices: vec![101.5, 103.25],
    };

    let spec = historical_chart_spec(&Symbol::from("AAPL"), &series);
    assert_eq!(spec.datasets.len(), 1);
    assert_eq!(spec.datasets[0].label, "AAPL Price");
    assert_eq!(spec.datasets[0].points, vec![(0.0, 101.5), (1.0, 103.25)]);
    assert_eq!(spec.x_labels.as_ref().map(|l| l.len()), Some(2));
}
