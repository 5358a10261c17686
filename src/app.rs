use leptos::html::Canvas;
use leptos::*;
use std::cell::Cell;
use std::rc::Rc;
use std::str::FromStr;
use wasm_bindgen::JsCast;

use crate::{
    application::{
        AutocompleteController, SubmissionFlow, SubmissionPhase, growth_chart_spec,
        historical_chart_spec, projection_chart_spec,
    },
    domain::{
        calculators::{
            ContributionFrequency, GrowthRequest, GrowthResult, HistoricalQuery, HistoryPeriod,
            ProjectionModel, ProjectionRequest, ProjectionResult, format_metric, format_usd,
        },
        errors::AppError,
        logging::{LogComponent, get_logger},
        tickers::DropdownState,
    },
    infrastructure::{http::CalcApiClient, rendering::ChartSlot},
};

/// Relative path of the static ticker catalog.
const TICKER_CATALOG_PATH: &str = "tickers.json";

/// 🦀 Главный компонент MarketCalc на Leptos
#[component]
pub fn App() -> impl IntoView {
    view! {
        <style>
            {r#"
            .marketcalc-app {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                background: linear-gradient(135deg, #0f172a 0%, #1e3a5f 100%);
                min-height: 100vh;
                padding: 20px;
                color: #e5e7eb;
            }

            .header {
                text-align: center;
                margin-bottom: 20px;
                background: rgba(255, 255, 255, 0.08);
                backdrop-filter: blur(10px);
                padding: 20px;
                border-radius: 15px;
                border: 1px solid rgba(255, 255, 255, 0.15);
            }

            .panels {
                display: flex;
                flex-wrap: wrap;
                gap: 20px;
                justify-content: center;
                align-items: flex-start;
            }

            .panel {
                background: rgba(0, 0, 0, 0.35);
                border: 1px solid #334155;
                border-radius: 12px;
                padding: 20px;
                width: 680px;
            }

            .panel h2 {
                margin-top: 0;
                color: #38bdf8;
            }

            .field-row {
                display: flex;
                align-items: center;
                gap: 10px;
                margin: 8px 0;
            }

            .field-row label {
                width: 180px;
                color: #94a3b8;
                font-size: 14px;
            }

            .field-row input, .field-row select {
                background: #1e293b;
                color: #e5e7eb;
                border: 1px solid #475569;
                border-radius: 6px;
                padding: 6px 10px;
                font-size: 14px;
                width: 180px;
            }

            .submit-btn {
                background: #38bdf8;
                color: #0f172a;
                border: none;
                padding: 8px 18px;
                border-radius: 6px;
                cursor: pointer;
                font-weight: 600;
                margin-top: 10px;
            }

            .submit-btn:hover {
                background: #7dd3fc;
            }

            .autocomplete {
                position: relative;
                display: inline-block;
            }

            .ticker-list {
                position: absolute;
                top: 100%;
                left: 0;
                right: 0;
                background: #1e293b;
                border: 1px solid #475569;
                border-radius: 0 0 6px 6px;
                z-index: 100;
                max-height: 260px;
                overflow-y: auto;
            }

            .suggestion {
                padding: 6px 10px;
                cursor: pointer;
                font-size: 14px;
            }

            .suggestion:hover {
                background: #334155;
                color: #38bdf8;
            }

            .loading {
                color: #fbbf24;
                margin: 10px 0;
            }

            .notice {
                color: #f87171;
                background: rgba(248, 113, 113, 0.12);
                border: 1px solid #f87171;
                border-radius: 6px;
                padding: 8px 12px;
                margin: 10px 0;
                font-size: 14px;
            }

            .results {
                display: flex;
                gap: 24px;
                flex-wrap: wrap;
                margin: 12px 0;
            }

            .result-item {
                text-align: center;
            }

            .result-value {
                font-size: 20px;
                font-weight: 700;
                color: #72c685;
                font-family: 'Courier New', monospace;
            }

            .result-label {
                font-size: 12px;
                color: #94a3b8;
                margin-top: 4px;
            }

            canvas {
                border: 1px solid #334155;
                border-radius: 10px;
                background: #0f172a;
                margin-top: 10px;
            }
            "#}
        </style>
        <div class="marketcalc-app">
            <Header />
            <div class="panels">
                <CompoundGrowthPanel />
                <PriceProjectionPanel />
                <HistoricalChartPanel />
            </div>
        </div>
    }
}

/// 📊 Заголовок приложения
#[component]
fn Header() -> impl IntoView {
    view! {
        <div class="header">
            <h1>"📊 MarketCalc"</h1>
            <p>"Compound growth • Price projection • Historical charts — Leptos + Canvas"</p>
        </div>
    }
}

/// Loading indicator plus user-visible notice, shared by every panel.
#[component]
fn SubmissionStatus(flow: SubmissionFlow) -> impl IntoView {
    let phase = flow.phase;
    let notice = flow.notice;
    view! {
        <Show when=move || phase.get() == SubmissionPhase::Loading>
            <div class="loading">"⏳ Loading..."</div>
        </Show>
        <Show when=move || notice.get().is_some()>
            <div class="notice">{move || notice.get().unwrap_or_default()}</div>
        </Show>
    }
}

/// Ticker input with the suggestion dropdown.
///
/// A window-level click anywhere but this input closes the dropdown; a
/// mousedown on a suggestion commits it before that click ever fires.
#[component]
fn TickerAutocomplete(
    controller: AutocompleteController,
    input_id: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    // Клик вне поля ввода закрывает список подсказок
    let dismisser = controller.clone();
    let listener = window_event_listener(ev::click, move |event| {
        let clicked_input = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .map(|element| element.id() == input_id)
            .unwrap_or(false);
        if !clicked_input {
            dismisser.dismiss();
        }
    });
    on_cleanup(move || listener.remove());

    let query = controller.query;
    let suggestions = controller.suggestions;
    let dropdown = controller.dropdown;
    let on_input_controller = controller.clone();
    let picker_controller = controller.clone();

    view! {
        <div class="autocomplete">
            <input
                id=input_id
                type="text"
                autocomplete="off"
                placeholder=placeholder
                prop:value=move || query.get()
                on:input=move |ev| on_input_controller.on_input(event_target_value(&ev))
            />
            <Show when=move || dropdown.get() == DropdownState::Open>
                {
                    let picker = picker_controller.clone();
                    view! {
                        <div class="ticker-list">
                            <For
                                each=move || suggestions.get()
                                key=|symbol| symbol.value().to_string()
                                children=move |symbol| {
                                    let label = symbol.value().to_string();
                                    let picker = picker.clone();
                                    view! {
                                        <div
                                            class="suggestion"
                                            on:mousedown=move |_| picker.select(&symbol)
                                        >
                                            {label}
                                        </div>
                                    }
                                }
                            />
                        </div>
                    }
                }
            </Show>
        </div>
    }
}

/// 💰 Панель калькулятора сложного процента
#[component]
fn CompoundGrowthPanel() -> impl IntoView {
    let flow = SubmissionFlow::new("CompoundGrowth");
    let api = CalcApiClient::new();
    let chart = Rc::new(ChartSlot::new("growthChart", 640, 360));

    let (years, set_years) = create_signal("10".to_string());
    let (rate, set_rate) = create_signal("7".to_string());
    let (principal, set_principal) = create_signal("10000".to_string());
    let (contribution, set_contribution) = create_signal("500".to_string());
    let (frequency, set_frequency) = create_signal(ContributionFrequency::Monthly);
    let (result, set_result) = create_signal::<Option<GrowthResult>>(None);
    let phase = flow.phase;

    let on_calculate = {
        let flow = flow.clone();
        move |_| {
            let request = match build_growth_request(
                &years.get_untracked(),
                &rate.get_untracked(),
                &principal.get_untracked(),
                &contribution.get_untracked(),
                frequency.get_untracked(),
            ) {
                Ok(request) => request,
                Err(error) => {
                    flow.reject(&error);
                    return;
                }
            };

            let api = api.clone();
            let chart = Rc::clone(&chart);
            flow.run(
                move || async move {
                    let result = api.compound_growth(&request).await?;
                    result.validate()?;
                    Ok(result)
                },
                move |outcome: GrowthResult| {
                    let spec = growth_chart_spec(&outcome);
                    set_result.set(Some(outcome));
                    if let Err(error) = chart.replace(&spec) {
                        get_logger().error(
                            LogComponent::Presentation("CompoundGrowth"),
                            &format!("Chart render failed: {}", error),
                        );
                    }
                },
            );
        }
    };

    view! {
        <div class="panel">
            <h2>"💰 Compound Growth"</h2>
            <div class="field-row">
                <label>"Years"</label>
                <input type="number" prop:value=move || years.get()
                    on:input=move |ev| set_years.set(event_target_value(&ev)) />
            </div>
            <div class="field-row">
                <label>"Annual rate (%)"</label>
                <input type="number" prop:value=move || rate.get()
                    on:input=move |ev| set_rate.set(event_target_value(&ev)) />
            </div>
            <div class="field-row">
                <label>"Starting principal ($)"</label>
                <input type="number" prop:value=move || principal.get()
                    on:input=move |ev| set_principal.set(event_target_value(&ev)) />
            </div>
            <div class="field-row">
                <label>"Contribution ($)"</label>
                <input type="number" prop:value=move || contribution.get()
                    on:input=move |ev| set_contribution.set(event_target_value(&ev)) />
            </div>
            <div class="field-row">
                <label>"Contribution frequency"</label>
                <select on:change=move |ev| {
                    set_frequency.set(
                        ContributionFrequency::from_str(&event_target_value(&ev))
                            .unwrap_or_default(),
                    )
                }>
                    <option value="monthly">{ContributionFrequency::Monthly.label()}</option>
                    <option value="quarterly">{ContributionFrequency::Quarterly.label()}</option>
                    <option value="annually">{ContributionFrequency::Annually.label()}</option>
                </select>
            </div>
            <button class="submit-btn" on:click=on_calculate>"Calculate"</button>

            <SubmissionStatus flow=flow.clone() />

            <div
                class="results"
                style:display=move || display_when_ready(phase.get())
            >
                {move || {
                    result.get().map(|r| {
                        view! {
                            <div class="result-item">
                                <div class="result-value">{format_usd(r.final_value)}</div>
                                <div class="result-label">"Final Value"</div>
                            </div>
                            <div class="result-item">
                                <div class="result-value">{format_usd(r.total_invested)}</div>
                                <div class="result-label">"Total Invested"</div>
                            </div>
                            <div class="result-item">
                                <div class="result-value">{format_usd(r.total_gain)}</div>
                                <div class="result-label">"Total Gain"</div>
                            </div>
                        }
                    })
                }}
            </div>
            <canvas
                id="growthChart"
                width="640"
                height="360"
                style:display=move || display_when_ready(phase.get())
            />
        </div>
    }
}

/// 📈 Панель прогноза цены
#[component]
fn PriceProjectionPanel() -> impl IntoView {
    let flow = SubmissionFlow::new("PriceProjection");
    let api = CalcApiClient::new();
    let chart = Rc::new(ChartSlot::new("projectionChart", 640, 360));
    let autocomplete = AutocompleteController::new("PriceProjection");
    autocomplete.load_catalog(TICKER_CATALOG_PATH);

    let (horizon, set_horizon) = create_signal("30".to_string());
    let (model, set_model) = create_signal(ProjectionModel::Linear);
    let (result, set_result) = create_signal::<Option<ProjectionResult>>(None);
    let phase = flow.phase;
    let query = autocomplete.query;

    let on_run = {
        let flow = flow.clone();
        move |_| {
            let request = match build_projection_request(
                &query.get_untracked(),
                &horizon.get_untracked(),
                model.get_untracked(),
            ) {
                Ok(request) => request,
                Err(error) => {
                    flow.reject(&error);
                    return;
                }
            };

            let api = api.clone();
            let chart = Rc::clone(&chart);
            flow.run(
                move || async move {
                    let result = api.price_projection(&request).await?;
                    result.validate()?;
                    Ok((request, result))
                },
                move |(request, outcome): (ProjectionRequest, ProjectionResult)| {
                    let spec = projection_chart_spec(&request, &outcome);
                    set_result.set(Some(outcome));
                    if let Err(error) = chart.replace(&spec) {
                        get_logger().error(
                            LogComponent::Presentation("PriceProjection"),
                            &format!("Chart render failed: {}", error),
                        );
                    }
                },
            );
        }
    };

    view! {
        <div class="panel">
            <h2>"📈 Price Projection"</h2>
            <div class="field-row">
                <label>"Ticker"</label>
                <TickerAutocomplete
                    controller=autocomplete.clone()
                    input_id="ticker"
                    placeholder="e.g. AAPL"
                />
            </div>
            <div class="field-row">
                <label>"Horizon (days)"</label>
                <input type="number" prop:value=move || horizon.get()
                    on:input=move |ev| set_horizon.set(event_target_value(&ev)) />
            </div>
            <div class="field-row">
                <label>"Model"</label>
                <select on:change=move |ev| {
                    set_model.set(
                        ProjectionModel::from_str(&event_target_value(&ev)).unwrap_or_default(),
                    )
                }>
                    <option value="linear">{ProjectionModel::Linear.label()}</option>
                    <option value="rf">{ProjectionModel::RandomForest.label()}</option>
                </select>
            </div>
            <button class="submit-btn" on:click=on_run>"Run Projection"</button>

            <SubmissionStatus flow=flow.clone() />

            <div
                class="results"
                style:display=move || display_when_ready(phase.get())
            >
                {move || {
                    result.get().map(|r| {
                        view! {
                            <div class="result-item">
                                <div class="result-value">{format_usd(r.current_price)}</div>
                                <div class="result-label">"Current Price"</div>
                            </div>
                            <div class="result-item">
                                <div class="result-value">{format_usd(r.projected_price)}</div>
                                <div class="result-label">"Projected Price"</div>
                            </div>
                            <div class="result-item">
                                <div class="result-value">{format_usd(r.low_price)}</div>
                                <div class="result-label">"Low Estimate"</div>
                            </div>
                            <div class="result-item">
                                <div class="result-value">{format_usd(r.high_price)}</div>
                                <div class="result-label">"High Estimate"</div>
                            </div>
                            <div class="result-item">
                                <div class="result-value">{format_metric(r.r2_score)}</div>
                                <div class="result-label">"R² Score"</div>
                            </div>
                            <div class="result-item">
                                <div class="result-value">{format_metric(r.mean_absolute_error)}</div>
                                <div class="result-label">"MAE"</div>
                            </div>
                            <div class="result-item">
                                <div class="result-value">{format_metric(r.mean_squared_error)}</div>
                                <div class="result-label">"MSE"</div>
                            </div>
                        }
                    })
                }}
            </div>
            <canvas
                id="projectionChart"
                width="640"
                height="360"
                style:display=move || display_when_ready(phase.get())
            />
        </div>
    }
}

/// 🕰️ Панель исторического графика
#[component]
fn HistoricalChartPanel() -> impl IntoView {
    let flow = SubmissionFlow::new("HistoricalChart");
    let api = CalcApiClient::new();
    let chart = Rc::new(ChartSlot::new("historicalChart", 640, 360));
    let autocomplete = AutocompleteController::with_query("HistoricalChart", "AAPL");
    autocomplete.load_catalog(TICKER_CATALOG_PATH);

    let (period, set_period) = create_signal(HistoryPeriod::OneYear);
    let phase = flow.phase;
    let query = autocomplete.query;
    let canvas_ref = create_node_ref::<Canvas>();

    let run_update = {
        let flow = flow.clone();
        move || {
            let query_fields = match HistoricalQuery::from_fields(
                &query.get_untracked(),
                period.get_untracked(),
            ) {
                Ok(fields) => fields,
                Err(error) => {
                    flow.reject(&error);
                    return;
                }
            };

            let api = api.clone();
            let chart = Rc::clone(&chart);
            flow.run(
                move || async move {
                    let series = api.historical(&query_fields.ticker, query_fields.period).await?;
                    series.validate()?;
                    Ok((query_fields.ticker, series))
                },
                move |(ticker, series)| {
                    let spec = historical_chart_spec(&ticker, &series);
                    if let Err(error) = chart.replace(&spec) {
                        get_logger().error(
                            LogComponent::Presentation("HistoricalChart"),
                            &format!("Chart render failed: {}", error),
                        );
                    }
                },
            );
        }
    };

    // Первичная отрисовка после монтирования canvas
    let initial_done = Rc::new(Cell::new(false));
    let initial_run = run_update.clone();
    create_effect(move |_| {
        if canvas_ref.get().is_some() && !initial_done.get() {
            initial_done.set(true);
            initial_run();
        }
    });

    let on_update = run_update.clone();

    view! {
        <div class="panel">
            <h2>"🕰️ Historical Chart"</h2>
            <div class="field-row">
                <label>"Ticker"</label>
                <TickerAutocomplete
                    controller=autocomplete.clone()
                    input_id="hist-ticker"
                    placeholder="e.g. AAPL"
                />
            </div>
            <div class="field-row">
                <label>"Date range"</label>
                <select on:change=move |ev| {
                    set_period.set(
                        HistoryPeriod::from_str(&event_target_value(&ev)).unwrap_or_default(),
                    )
                }>
                    <option value="1mo">{HistoryPeriod::OneMonth.label()}</option>
                    <option value="3mo">{HistoryPeriod::ThreeMonths.label()}</option>
                    <option value="6mo">{HistoryPeriod::SixMonths.label()}</option>
                    <option value="1y" selected=true>{HistoryPeriod::OneYear.label()}</option>
                    <option value="2y">{HistoryPeriod::TwoYears.label()}</option>
                    <option value="5y">{HistoryPeriod::FiveYears.label()}</option>
                    <option value="max">{HistoryPeriod::Max.label()}</option>
                </select>
            </div>
            <button class="submit-btn" on:click=move |_| on_update()>"Update Chart"</button>

            <SubmissionStatus flow=flow.clone() />

            <canvas
                id="historicalChart"
                node_ref=canvas_ref
                width="640"
                height="360"
                style:display=move || display_when_ready(phase.get())
            />
        </div>
    }
}

fn display_when_ready(phase: SubmissionPhase) -> &'static str {
    if phase == SubmissionPhase::Ready { "block" } else { "none" }
}

fn parse_u32(label: &str, raw: &str) -> Result<u32, AppError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| AppError::Validation(format!("Please enter a valid {}.", label)))
}

fn parse_f64(label: &str, raw: &str) -> Result<f64, AppError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| AppError::Validation(format!("Please enter a valid {}.", label)))
}

fn build_growth_request(
    years: &str,
    rate: &str,
    principal: &str,
    contribution: &str,
    frequency: ContributionFrequency,
) -> Result<GrowthRequest, AppError> {
    let request = GrowthRequest {
        years: parse_u32("number of years", years)?,
        rate: parse_f64("annual rate", rate)?,
        principal: parse_f64("principal", principal)?,
        contribution: parse_f64("contribution", contribution)?,
        frequency,
    };
    request.validate()?;
    Ok(request)
}

fn build_projection_request(
    ticker: &str,
    horizon: &str,
    model: ProjectionModel,
) -> Result<ProjectionRequest, AppError> {
    if ticker.trim().is_empty() {
        return Err(AppError::Validation("Please enter a ticker symbol.".to_string()));
    }
    let horizon = parse_u32("horizon", horizon)?;
    ProjectionRequest::from_fields(ticker, horizon, model)
}
