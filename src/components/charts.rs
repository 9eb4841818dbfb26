// ============================================================================
// CHART COMPONENTS - fetch stats, hand the data to ApexCharts through FFI
// ============================================================================
// The chart library runs on the JS side; each component owns an empty
// container div and pushes its data across once the fetch resolves, deferred
// one tick so the container exists in the DOM.
// ============================================================================

use gloo_timers::callback::Timeout;
use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_session;
use crate::models::incident::{IncidentCategory, IncidentStatus};
use crate::services::{stats_service, ApiClient};
use crate::utils::charts_ffi::{render_area_chart, render_bar_chart, render_donut_chart};

#[derive(Serialize)]
struct ChartSeries {
    name: String,
    data: Vec<u32>,
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

/// Line/area chart of the last 7 days of incidents per status
#[function_component(Last7DaysAreaChart)]
pub fn last_7_days_area_chart() -> Html {
    let error = use_state(|| None::<String>);

    {
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let api = ApiClient::new();
                match stats_service::fetch_last_7_days(&api).await {
                    Ok(stats) => {
                        let categories = to_js(&stats.dates);
                        let series = to_js(&vec![
                            ChartSeries { name: "Open".to_string(), data: stats.open },
                            ChartSeries { name: "In Progress".to_string(), data: stats.in_progress },
                            ChartSeries { name: "Solved".to_string(), data: stats.solved },
                        ]);
                        Timeout::new(100, move || {
                            render_area_chart("chart-last-7-days", categories, series);
                        })
                        .forget();
                    }
                    Err(e) => {
                        log::error!("❌ Failed to fetch last-7-days stats: {}", e);
                        error.set(Some("Failed to fetch statistics".to_string()));
                    }
                }
            });
            || ()
        });
    }

    html! {
        <div class="chart-container">
            if let Some(message) = (*error).clone() {
                <p class="error-text">{message}</p>
            } else {
                <div id="chart-last-7-days" class="chart"></div>
            }
        </div>
    }
}

/// Donut of the status distribution over the last 3 months
#[function_component(ThreeMonthsDonut)]
pub fn three_months_donut() -> Html {
    let error = use_state(|| None::<String>);

    {
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let api = ApiClient::new();
                match stats_service::fetch_last_3_months(&api).await {
                    Ok(stats) => {
                        // Fixed status order; the map has no stable iteration
                        let labels: Vec<&str> =
                            IncidentStatus::ALL.iter().map(|s| s.label()).collect();
                        let counts: Vec<u32> = IncidentStatus::ALL
                            .iter()
                            .map(|s| stats.get(s.as_param()).copied().unwrap_or(0))
                            .collect();
                        let labels = to_js(&labels);
                        let counts = to_js(&counts);
                        Timeout::new(100, move || {
                            render_donut_chart("chart-three-months", labels, counts);
                        })
                        .forget();
                    }
                    Err(e) => {
                        log::error!("❌ Failed to fetch last-3-months stats: {}", e);
                        error.set(Some("Failed to fetch statistics".to_string()));
                    }
                }
            });
            || ()
        });
    }

    html! {
        <div class="chart-container">
            if let Some(message) = (*error).clone() {
                <p class="error-text">{message}</p>
            } else {
                <div id="chart-three-months" class="chart"></div>
            }
        </div>
    }
}

/// Donut of the current status distribution
#[function_component(StatusDistributionDonut)]
pub fn status_distribution_donut() -> Html {
    let error = use_state(|| None::<String>);

    {
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let api = ApiClient::new();
                match stats_service::fetch_status_distribution(&api).await {
                    Ok(stats) => {
                        let labels: Vec<&str> =
                            IncidentStatus::ALL.iter().map(|s| s.label()).collect();
                        let counts: Vec<u32> = IncidentStatus::ALL
                            .iter()
                            .map(|s| stats.get(s.as_param()).copied().unwrap_or(0))
                            .collect();
                        let labels = to_js(&labels);
                        let counts = to_js(&counts);
                        Timeout::new(100, move || {
                            render_donut_chart("chart-status-distribution", labels, counts);
                        })
                        .forget();
                    }
                    Err(e) => {
                        log::error!("❌ Failed to fetch status distribution: {}", e);
                        error.set(Some("Failed to fetch statistics".to_string()));
                    }
                }
            });
            || ()
        });
    }

    html! {
        <div class="chart-container">
            if let Some(message) = (*error).clone() {
                <p class="error-text">{message}</p>
            } else {
                <div id="chart-status-distribution" class="chart"></div>
            }
        </div>
    }
}

/// Bar chart of incidents per category. Sector admins get no category
/// breakdown from the backend, so the component renders nothing for them.
#[function_component(CategoryBarChart)]
pub fn category_bar_chart() -> Html {
    let session = use_session();
    let error = use_state(|| None::<String>);

    let is_sector_admin = session
        .user
        .as_ref()
        .map(|u| u.role().is_sector_admin())
        .unwrap_or(false);

    {
        let error = error.clone();
        use_effect_with(is_sector_admin, move |skip| {
            if !*skip {
                spawn_local(async move {
                    let api = ApiClient::new();
                    match stats_service::fetch_category_stats(&api).await {
                        Ok(stats) => {
                            let categories: Vec<&str> =
                                IncidentCategory::ALL.iter().map(|c| c.label()).collect();
                            let counts: Vec<u32> = IncidentCategory::ALL
                                .iter()
                                .map(|c| stats.get(c.as_param()).copied().unwrap_or(0))
                                .collect();
                            let categories = to_js(&categories);
                            let series = to_js(&vec![ChartSeries {
                                name: "Incidents".to_string(),
                                data: counts,
                            }]);
                            Timeout::new(100, move || {
                                render_bar_chart("chart-by-category", categories, series);
                            })
                            .forget();
                        }
                        Err(e) => {
                            log::error!("❌ Failed to fetch category stats: {}", e);
                            error.set(Some("Failed to fetch statistics".to_string()));
                        }
                    }
                });
            }
            || ()
        });
    }

    if is_sector_admin {
        return Html::default();
    }

    html! {
        <div class="chart-container">
            if let Some(message) = (*error).clone() {
                <p class="error-text">{message}</p>
            } else {
                <div id="chart-by-category" class="chart"></div>
            }
        </div>
    }
}
