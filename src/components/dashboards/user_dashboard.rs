use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::app::Route;
use crate::components::incident_card::IncidentCard;
use crate::models::incident::{Incident, IncidentStatus};
use crate::services::{incident_service, ApiClient};

#[derive(Properties, PartialEq)]
pub struct UserDashboardProps {
    pub on_navigate: Callback<Route>,
}

/// Plain user view: own open incidents plus the report shortcut
#[function_component(UserDashboard)]
pub fn user_dashboard(props: &UserDashboardProps) -> Html {
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

    let mut open_incidents: Vec<Incident> = incidents
        .iter()
        .filter(|i| i.status == IncidentStatus::Open)
        .cloned()
        .collect();
    open_incidents.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    open_incidents.truncate(3);

    let on_report = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Route::ReportIncident))
    };

    html! {
        <main class="dashboard-body">
            <section class="dashboard-section">
                <h2>{"Open Incidents"}</h2>
                if *loading {
                    <div class="loading-container">{"Loading..."}</div>
                } else if open_incidents.is_empty() {
                    <div class="no-incidents">{"No open incidents"}</div>
                } else {
                    <div class="incident-grid dashboard">
                        { for open_incidents.iter().map(|incident| html! {
                            <IncidentCard key={incident.id} incident={incident.clone()} />
                        }) }
                        <div
                            class="incident-card new-incident-card"
                            title="Report New Incident"
                            onclick={on_report}
                        >
                            {"+"}
                        </div>
                    </div>
                }
            </section>

            <section class="dashboard-section">
                <h2>{"About the Dashboard"}</h2>
                <p>
                    {"Welcome to your dashboard. Here you can view your most recent open \
                      incidents, track their progress, and quickly report new ones."}
                </p>
            </section>
        </main>
    }
}
