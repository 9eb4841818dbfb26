use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::app::Route;
use crate::components::incident_card::IncidentCard;
use crate::models::incident::Incident;
use crate::services::{incident_service, ApiClient};

#[derive(Properties, PartialEq)]
pub struct SystemAdminDashboardProps {
    pub on_navigate: Callback<Route>,
}

/// System-wide view: the three most recent incidents across all sectors
#[function_component(SystemAdminDashboard)]
pub fn system_admin_dashboard(props: &SystemAdminDashboardProps) -> Html {
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

    let mut latest = (*incidents).clone();
    latest.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    latest.truncate(3);

    let on_see_all = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Route::Incidents))
    };

    html! {
        <main class="dashboard-body">
            <h2>{"Recent Incidents"}</h2>
            if *loading {
                <p>{"Loading..."}</p>
            } else {
                <div class="incident-grid dashboard">
                    { for latest.iter().map(|incident| html! {
                        <IncidentCard key={incident.id} incident={incident.clone()} />
                    }) }
                    <div
                        class="incident-card new-incident-card"
                        title="View All Incidents"
                        onclick={on_see_all}
                    >
                        {"+"}
                    </div>
                </div>
            }
        </main>
    }
}
