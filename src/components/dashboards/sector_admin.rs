use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::app::Route;
use crate::components::charts::{Last7DaysAreaChart, ThreeMonthsDonut};
use crate::components::incident_card::IncidentCard;
use crate::models::incident::{Incident, IncidentStatus};
use crate::services::{incident_service, ApiClient};

#[derive(Properties, PartialEq)]
pub struct SectorAdminDashboardProps {
    pub on_navigate: Callback<Route>,
}

/// Pick up to three incidents for the sector dashboard: open ones first,
/// then in-progress, then solved, newest first within each bucket.
fn dashboard_incidents(incidents: &[Incident]) -> Vec<Incident> {
    let mut result = Vec::new();
    for status in IncidentStatus::ALL {
        let mut bucket: Vec<Incident> = incidents
            .iter()
            .filter(|i| i.status == status)
            .cloned()
            .collect();
        bucket.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        for incident in bucket {
            if result.len() < 3 {
                result.push(incident);
            }
        }
        if result.len() >= 3 {
            break;
        }
    }
    result
}

/// Sector view: triage queue plus the statistics row. The backend already
/// scopes the rows to the admin's sector.
#[function_component(SectorAdminDashboard)]
pub fn sector_admin_dashboard(props: &SectorAdminDashboardProps) -> Html {
    let incidents = use_state(Vec::<Incident>::new);
    let loading = use_state(|| true);

    {
        let incidents = incidents.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let api = ApiClient::new();
                match incident_service::fetch_recent_incidents(&api).await {
                    Ok(rows) => incidents.set(rows),
                    Err(e) => log::error!("❌ Failed to fetch incidents: {}", e),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let display = dashboard_incidents(&incidents);

    let on_see_all = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Route::Incidents))
    };

    let on_see_more = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Route::Statistics))
    };

    html! {
        <main class="dashboard-body">
            <section class="dashboard-section">
                <h2>{"Latest Incidents"}</h2>
                if *loading {
                    <div class="loading-container">{"Loading..."}</div>
                } else if display.is_empty() {
                    <div class="no-incidents">{"No incidents in your sector"}</div>
                } else {
                    <div class="incident-grid dashboard">
                        { for display.iter().map(|incident| html! {
                            <IncidentCard key={incident.id} incident={incident.clone()} />
                        }) }
                        <div
                            class="incident-card new-incident-card"
                            title="See All Incidents"
                            onclick={on_see_all}
                        >
                            {"See All"}
                        </div>
                    </div>
                }
            </section>

            <section class="dashboard-section">
                <h2>{"Statistics"}</h2>
                <div class="charts-row">
                    <ThreeMonthsDonut />
                    <Last7DaysAreaChart />
                </div>
                <div class="see-more-btn-container">
                    <button class="see-more-btn" onclick={on_see_more}>{"See More"}</button>
                </div>
            </section>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::incident::{IncidentCategory, IncidentPriority};

    fn incident(id: i64, status: IncidentStatus, created_at: &str) -> Incident {
        Incident {
            id,
            title: format!("incident {}", id),
            description: "desc".to_string(),
            category: IncidentCategory::Network,
            priority: IncidentPriority::Medium,
            status,
            created_at: created_at.to_string(),
            reporter_id: 1,
            resolver_id: None,
        }
    }

    #[test]
    fn open_incidents_fill_the_queue_first() {
        let rows = vec![
            incident(1, IncidentStatus::Solved, "2025-05-05T10:00:00"),
            incident(2, IncidentStatus::Open, "2025-05-01T10:00:00"),
            incident(3, IncidentStatus::InProgress, "2025-05-04T10:00:00"),
            incident(4, IncidentStatus::Open, "2025-05-03T10:00:00"),
        ];
        let display = dashboard_incidents(&rows);
        let ids: Vec<i64> = display.iter().map(|i| i.id).collect();
        // Newest open first, then the in-progress one
        assert_eq!(ids, vec![4, 2, 3]);
    }

    #[test]
    fn short_lists_are_returned_whole() {
        let rows = vec![incident(1, IncidentStatus::Solved, "2025-05-05T10:00:00")];
        assert_eq!(dashboard_incidents(&rows).len(), 1);
        assert!(dashboard_incidents(&[]).is_empty());
    }
}
