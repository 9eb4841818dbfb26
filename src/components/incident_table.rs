use chrono::NaiveDate;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::search_bar::SearchBar;
use crate::hooks::{use_incident_list, use_session};
use crate::models::incident::{Incident, IncidentCategory, IncidentPriority, IncidentStatus};
use crate::models::user::Role;
use crate::services::{incident_service, ApiClient};
use crate::utils::format_datetime;
use crate::viewmodels::incident_list::{LoadPhase, SortOrder};

#[derive(Clone, Copy, PartialEq, Eq)]
enum FilterPopover {
    None,
    Priority,
    Status,
    Category,
}

/// The incident list: search, multi-select filters with staged edits, sort
/// toggle, probe pagination and the row-level status control for sector
/// admins.
#[function_component(IncidentTable)]
pub fn incident_table() -> Html {
    let session = use_session();
    let handle = use_incident_list();
    let popover = use_state(|| FilterPopover::None);
    let details = use_state(|| None::<Incident>);

    // Snapshot for this render; callbacks mutate through the handle
    let vm = handle.vm.borrow().clone();

    let role = session
        .user
        .as_ref()
        .map(|u| u.role())
        .unwrap_or(Role::User);
    let is_sector_admin = role.is_sector_admin();
    let is_system_admin = role == Role::System;
    let show_category = !is_sector_admin;

    let mut column_count = 6;
    if show_category {
        column_count += 1;
    }
    if is_sector_admin {
        column_count += 1;
    }
    if is_system_admin {
        column_count += 1;
    }

    let toggle_popover = |target: FilterPopover| {
        let popover = popover.clone();
        Callback::from(move |_: MouseEvent| {
            popover.set(if *popover == target {
                FilterPopover::None
            } else {
                target
            });
        })
    };

    let apply_and_close = {
        let apply = handle.apply_filters.clone();
        let popover = popover.clone();
        Callback::from(move |_: MouseEvent| {
            apply.emit(());
            popover.set(FilterPopover::None);
        })
    };

    let on_date_input = {
        let set_draft_date = handle.set_draft_date.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let value = input.value();
                set_draft_date.emit(NaiveDate::parse_from_str(&value, "%Y-%m-%d").ok());
            }
        })
    };

    let on_date_clear = {
        let clear_date = handle.clear_date.clone();
        Callback::from(move |_: MouseEvent| clear_date.emit(()))
    };

    let on_date_apply = {
        let apply = handle.apply_filters.clone();
        Callback::from(move |_: MouseEvent| apply.emit(()))
    };

    let on_sort_toggle = {
        let toggle = handle.toggle_created_sort.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    let on_prev = {
        let prev = handle.prev_page.clone();
        Callback::from(move |_: MouseEvent| prev.emit(()))
    };

    let on_next = {
        let next = handle.next_page.clone();
        Callback::from(move |_: MouseEvent| next.emit(()))
    };

    let open_details = {
        let details = details.clone();
        Callback::from(move |id: i64| {
            let details = details.clone();
            spawn_local(async move {
                let api = ApiClient::new();
                match incident_service::get_incident(&api, id).await {
                    Ok(incident) => details.set(Some(incident)),
                    Err(e) => log::error!("❌ Failed to load incident {}: {}", id, e),
                }
            });
        })
    };

    let close_details = {
        let details = details.clone();
        Callback::from(move |_| details.set(None))
    };

    let sort_arrow = match vm.sort_order {
        SortOrder::Asc => "▲",
        SortOrder::Desc => "▼",
    };

    let draft_date_value = vm
        .draft
        .created_at
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    html! {
        <div class="incident-list-container">
            <div class="list-toolbar">
                <div class="search-bar-container">
                    <SearchBar query={vm.query.clone()} on_change={handle.set_query.clone()} />
                </div>
                <div class="date-filter">
                    <input type="date" value={draft_date_value} onchange={on_date_input} />
                    <button type="button" onclick={on_date_apply}>{"Apply"}</button>
                    if vm.committed.created_at.is_some() || vm.draft.created_at.is_some() {
                        <button type="button" onclick={on_date_clear}>{"Clear"}</button>
                    }
                </div>
                if !vm.committed.is_empty() {
                    <span class="filters-active">{"Filters applied"}</span>
                }
            </div>

            if matches!(vm.phase, LoadPhase::Idle | LoadPhase::Loading) {
                <p class="loading-text">{"Loading incidents..."}</p>
            }
            if let LoadPhase::Error(message) = &vm.phase {
                <p class="error-text">{message.clone()}</p>
            }
            if let Some(message) = &vm.action_error {
                <p class="error-text">{message.clone()}</p>
            }

            <div class="incident-table-wrapper">
                <table class="incident-table">
                    <thead>
                        <tr>
                            <th colspan={column_count.to_string()} class="table-title">{"Reported Incidents"}</th>
                        </tr>
                        <tr>
                            <th>{"No"}</th>
                            <th>{"Title"}</th>
                            <th>{"Description"}</th>

                            if show_category {
                                <th>
                                    {"Category"}
                                    <span class="filter-toggle" onclick={toggle_popover(FilterPopover::Category)}>{"▾"}</span>
                                    if *popover == FilterPopover::Category {
                                        <div class="filter-modal">
                                            <div class="filter-modal-content">
                                                <p><strong>{"Filter Category"}</strong></p>
                                                { for IncidentCategory::ALL.iter().map(|c| {
                                                    let toggle = handle.toggle_draft_category.clone();
                                                    let category = *c;
                                                    html! {
                                                        <div>
                                                            <input
                                                                type="checkbox"
                                                                checked={vm.draft.category.contains(c)}
                                                                onchange={Callback::from(move |_| toggle.emit(category))}
                                                            />
                                                            <label>{c.label()}</label>
                                                        </div>
                                                    }
                                                }) }
                                                <button onclick={apply_and_close.clone()}>{"Apply"}</button>
                                            </div>
                                        </div>
                                    }
                                </th>
                            }

                            <th>
                                {"Priority"}
                                <span class="filter-toggle" onclick={toggle_popover(FilterPopover::Priority)}>{"▾"}</span>
                                if *popover == FilterPopover::Priority {
                                    <div class="filter-modal">
                                        <div class="filter-modal-content">
                                            <p><strong>{"Filter Priority"}</strong></p>
                                            { for IncidentPriority::ALL.iter().map(|p| {
                                                let toggle = handle.toggle_draft_priority.clone();
                                                let priority = *p;
                                                html! {
                                                    <div>
                                                        <input
                                                            type="checkbox"
                                                            checked={vm.draft.priority.contains(p)}
                                                            onchange={Callback::from(move |_| toggle.emit(priority))}
                                                        />
                                                        <label>{p.label()}</label>
                                                    </div>
                                                }
                                            }) }
                                            <button onclick={apply_and_close.clone()}>{"Apply"}</button>
                                        </div>
                                    </div>
                                }
                            </th>

                            <th>
                                {"Status"}
                                <span class="filter-toggle" onclick={toggle_popover(FilterPopover::Status)}>{"▾"}</span>
                                if *popover == FilterPopover::Status {
                                    <div class="filter-modal">
                                        <div class="filter-modal-content">
                                            <p><strong>{"Filter Status"}</strong></p>
                                            { for IncidentStatus::ALL.iter().map(|s| {
                                                let toggle = handle.toggle_draft_status.clone();
                                                let status = *s;
                                                html! {
                                                    <div>
                                                        <input
                                                            type="checkbox"
                                                            checked={vm.draft.status.contains(s)}
                                                            onchange={Callback::from(move |_| toggle.emit(status))}
                                                        />
                                                        <label>{s.label()}</label>
                                                    </div>
                                                }
                                            }) }
                                            <button onclick={apply_and_close.clone()}>{"Apply"}</button>
                                        </div>
                                    </div>
                                }
                            </th>

                            <th>
                                {"Created At"}
                                <span class="sort-toggle" onclick={on_sort_toggle}>{sort_arrow}</span>
                            </th>

                            if is_sector_admin {
                                <th>{"Update"}</th>
                            }
                            if is_system_admin {
                                <th></th>
                            }
                        </tr>
                    </thead>
                    <tbody>
                        { for vm.incidents.iter().enumerate().map(|(index, incident)| {
                            let row_number = vm.page * vm.page_size + index + 1;
                            let highlighted = vm.highlighted.contains(&incident.id);
                            let row_class = classes!(
                                format!("{}-row", incident.status.as_param()),
                                highlighted.then_some("row-updated"),
                            );

                            let on_title_click = {
                                let open_details = open_details.clone();
                                let id = incident.id;
                                Callback::from(move |_: MouseEvent| open_details.emit(id))
                            };

                            let status_select = if is_sector_admin {
                                let update_status = handle.update_status.clone();
                                let id = incident.id;
                                let onchange = Callback::from(move |e: Event| {
                                    if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                                        if let Some(status) = IncidentStatus::from_param(&select.value()) {
                                            update_status.emit((id, status));
                                        }
                                    }
                                });
                                let current = incident.status;
                                Some(html! {
                                    <td>
                                        <select onchange={onchange}>
                                            { for IncidentStatus::ALL.iter().map(|s| html! {
                                                <option value={s.as_param()} selected={current == *s}>{s.label()}</option>
                                            }) }
                                        </select>
                                    </td>
                                })
                            } else {
                                None
                            };

                            let delete_cell = if is_system_admin {
                                let delete = handle.delete_incident.clone();
                                let id = incident.id;
                                let onclick = Callback::from(move |_: MouseEvent| {
                                    let confirmed = web_sys::window()
                                        .and_then(|w| w.confirm_with_message("Delete this incident?").ok())
                                        .unwrap_or(false);
                                    if confirmed {
                                        delete.emit(id);
                                    }
                                });
                                Some(html! {
                                    <td>
                                        <button type="button" class="delete-btn" onclick={onclick}>{"🗑"}</button>
                                    </td>
                                })
                            } else {
                                None
                            };

                            html! {
                                <tr key={incident.id} class={row_class}>
                                    <td>{row_number}</td>
                                    <td class="incident-title" onclick={on_title_click}>{&incident.title}</td>
                                    <td>{&incident.description}</td>
                                    if show_category {
                                        <td>{incident.category.label()}</td>
                                    }
                                    <td>
                                        <span class={classes!("priority-badge", incident.priority.as_param())}>
                                            {incident.priority.label()}
                                        </span>
                                    </td>
                                    <td>
                                        <span class={classes!("status-badge", incident.status.as_param())}>
                                            {incident.status.label()}
                                        </span>
                                    </td>
                                    <td>{format_datetime(&incident.created_at)}</td>
                                    { status_select }
                                    { delete_cell }
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            </div>

            if !vm.is_searching() {
                <div class="pagination">
                    <button onclick={on_prev} disabled={!vm.can_prev()}>{"Previous"}</button>
                    <span>{format!(" Page {} ", vm.page + 1)}</span>
                    <button onclick={on_next} disabled={!vm.has_next_page}>{"Next"}</button>
                </div>
            }

            if let Some(incident) = (*details).clone() {
                <IncidentDetailsModal incident={incident} on_close={close_details} />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct IncidentDetailsModalProps {
    incident: Incident,
    on_close: Callback<()>,
}

#[function_component(IncidentDetailsModal)]
fn incident_details_modal(props: &IncidentDetailsModalProps) -> Html {
    let incident = &props.incident;
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal-content incident-details">
                <h2>{&incident.title}</h2>
                <div class="info-bar">
                    <span class={classes!("status-badge", incident.status.as_param())}>
                        {incident.status.label()}
                    </span>
                    <span class={classes!("priority-badge", incident.priority.as_param())}>
                        {incident.priority.label()}
                    </span>
                    <span class="category-badge">{incident.category.label()}</span>
                </div>
                <p class="details-description">{&incident.description}</p>
                <div class="incident-date">{format_datetime(&incident.created_at)}</div>
                <div class="modal-actions">
                    <button type="button" onclick={on_close}>{"Close"}</button>
                </div>
            </div>
        </div>
    }
}
