use yew::prelude::*;

use crate::models::incident::Incident;
use crate::utils::format_datetime;

#[derive(Properties, PartialEq)]
pub struct IncidentCardProps {
    pub incident: Incident,
}

/// Dashboard card for one incident
#[function_component(IncidentCard)]
pub fn incident_card(props: &IncidentCardProps) -> Html {
    let incident = &props.incident;
    let status_class = incident.status.as_param();

    html! {
        <div class={classes!("incident-card", status_class)}>
            <div class="info-bar">
                <span class={classes!("status", status_class)}>
                    {incident.status.label()}
                </span>
                <span class={classes!("priority", incident.priority.as_param())}>
                    {incident.priority.label()}
                </span>
            </div>
            <h3>{&incident.title}</h3>
            <p>{&incident.description}</p>
            <div class="incident-date">{format_datetime(&incident.created_at)}</div>
        </div>
    }
}
