use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::hooks::use_session;
use crate::models::incident::{IncidentCategory, IncidentPriority, NewIncident};
use crate::services::{incident_service, ApiClient};

#[derive(Properties, PartialEq)]
pub struct IncidentFormProps {
    /// Called after a successful submission
    pub on_done: Callback<()>,
}

#[function_component(IncidentForm)]
pub fn incident_form(props: &IncidentFormProps) -> Html {
    let session = use_session();
    let title = use_state(String::new);
    let description = use_state(String::new);
    let category = use_state(|| IncidentCategory::Hardware);
    let priority = use_state(|| IncidentPriority::Low);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_title = {
        let title = title.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                title.set(input.value());
            }
        })
    };

    let on_description = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                description.set(area.value());
            }
        })
    };

    let on_category = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                if let Some(parsed) = IncidentCategory::from_param(&select.value()) {
                    category.set(parsed);
                }
            }
        })
    };

    let on_priority = {
        let priority = priority.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                if let Some(parsed) = IncidentPriority::from_param(&select.value()) {
                    priority.set(parsed);
                }
            }
        })
    };

    let on_submit = {
        let title = title.clone();
        let description = description.clone();
        let category = category.clone();
        let priority = priority.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let on_done = props.on_done.clone();
        let user = session.user.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let reporter_id = match &user {
                Some(u) => u.id,
                None => {
                    error.set(Some("Please log in to report an incident".to_string()));
                    return;
                }
            };

            if title.trim().is_empty() {
                error.set(Some("Title is required".to_string()));
                return;
            }
            if description.trim().is_empty() {
                error.set(Some("Description is required".to_string()));
                return;
            }

            let incident = NewIncident {
                title: (*title).clone(),
                description: (*description).clone(),
                category: *category,
                priority: *priority,
                reporter_id,
            };

            let error = error.clone();
            let submitting = submitting.clone();
            let on_done = on_done.clone();
            submitting.set(true);
            error.set(None);

            spawn_local(async move {
                let api = ApiClient::new();
                match incident_service::create_incident(&api, &incident).await {
                    Ok(created) => {
                        log::info!("✅ Incident created with id {}", created.id);
                        on_done.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ Failed to create incident: {}", e);
                        error.set(Some(e));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="incident-form-page">
            <div class="incident-form-container">
                <form class="incident-form" onsubmit={on_submit}>
                    <h2>{"Report New Incident"}</h2>
                    <input
                        type="text"
                        placeholder="Title"
                        value={(*title).clone()}
                        oninput={on_title}
                        required=true
                    />
                    <textarea
                        placeholder="Description"
                        value={(*description).clone()}
                        oninput={on_description}
                        required=true
                    />
                    <select onchange={on_category}>
                        { for IncidentCategory::ALL.iter().map(|c| html! {
                            <option value={c.as_param()} selected={*category == *c}>{c.label()}</option>
                        }) }
                    </select>
                    <select onchange={on_priority}>
                        { for IncidentPriority::ALL.iter().map(|p| html! {
                            <option value={p.as_param()} selected={*priority == *p}>{p.label()}</option>
                        }) }
                    </select>
                    <button type="submit" disabled={*submitting}>
                        { if *submitting { "Submitting..." } else { "Submit Incident" } }
                    </button>
                    if let Some(message) = (*error).clone() {
                        <p class="error">{message}</p>
                    }
                </form>
            </div>
        </div>
    }
}
