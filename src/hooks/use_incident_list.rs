use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::models::incident::{IncidentCategory, IncidentPriority, IncidentStatus};
use crate::services::{self, ApiClient};
use crate::viewmodels::incident_list::IncidentListVm;

/// Everything the incident table needs: the view-model plus callbacks that
/// mutate it and trigger a re-render.
#[derive(Clone)]
pub struct UseIncidentListHandle {
    pub vm: Rc<RefCell<IncidentListVm>>,
    pub set_query: Callback<String>,
    pub toggle_draft_status: Callback<IncidentStatus>,
    pub toggle_draft_priority: Callback<IncidentPriority>,
    pub toggle_draft_category: Callback<IncidentCategory>,
    pub set_draft_date: Callback<Option<NaiveDate>>,
    pub clear_date: Callback<()>,
    pub apply_filters: Callback<()>,
    pub toggle_created_sort: Callback<()>,
    pub next_page: Callback<()>,
    pub prev_page: Callback<()>,
    pub update_status: Callback<(i64, IncidentStatus)>,
    pub delete_incident: Callback<i64>,
}

/// Wires the pure view-model to the browser: debounced fetch dispatch,
/// stale-result discarding and the transient row highlight.
///
/// Only the debounce timer is cancellable; an in-flight request runs to
/// completion and its result is dropped by the generation check when a newer
/// fetch has been issued meanwhile.
#[hook]
pub fn use_incident_list() -> UseIncidentListHandle {
    let vm = use_mut_ref(|| IncidentListVm::new(CONFIG.list_config.items_per_page as usize));
    let update = use_force_update();

    // Debounced reaction to query/filter/sort/page changes. Each change
    // re-renders, which replaces the pending timeout; only the last state
    // within the quiet window actually dispatches.
    {
        let vm = vm.clone();
        let update = update.clone();
        let inputs = vm.borrow().inputs_key();
        use_effect_with(inputs, move |_| {
            let timeout = Timeout::new(CONFIG.list_config.search_debounce_ms, move || {
                let (generation, plan) = {
                    let mut vm = vm.borrow_mut();
                    let generation = vm.begin_fetch();
                    (generation, vm.plan())
                };
                update.force_update();

                spawn_local(async move {
                    let api = ApiClient::new();
                    let result = services::fetch_incidents(&api, &plan).await;
                    let applied = vm.borrow_mut().resolve(generation, result);
                    if applied {
                        update.force_update();
                    } else {
                        log::info!("🕑 Discarding stale incident fetch (generation {})", generation);
                    }
                });
            });
            move || drop(timeout)
        });
    }

    let set_query = {
        let vm = vm.clone();
        let update = update.clone();
        Callback::from(move |query: String| {
            vm.borrow_mut().set_query(query);
            update.force_update();
        })
    };

    let toggle_draft_status = {
        let vm = vm.clone();
        let update = update.clone();
        Callback::from(move |status: IncidentStatus| {
            vm.borrow_mut().toggle_draft_status(status);
            update.force_update();
        })
    };

    let toggle_draft_priority = {
        let vm = vm.clone();
        let update = update.clone();
        Callback::from(move |priority: IncidentPriority| {
            vm.borrow_mut().toggle_draft_priority(priority);
            update.force_update();
        })
    };

    let toggle_draft_category = {
        let vm = vm.clone();
        let update = update.clone();
        Callback::from(move |category: IncidentCategory| {
            vm.borrow_mut().toggle_draft_category(category);
            update.force_update();
        })
    };

    let set_draft_date = {
        let vm = vm.clone();
        let update = update.clone();
        Callback::from(move |date: Option<NaiveDate>| {
            vm.borrow_mut().set_draft_date(date);
            update.force_update();
        })
    };

    let clear_date = {
        let vm = vm.clone();
        let update = update.clone();
        Callback::from(move |_| {
            vm.borrow_mut().clear_date();
            update.force_update();
        })
    };

    let apply_filters = {
        let vm = vm.clone();
        let update = update.clone();
        Callback::from(move |_| {
            vm.borrow_mut().apply_filters();
            update.force_update();
        })
    };

    let toggle_created_sort = {
        let vm = vm.clone();
        let update = update.clone();
        Callback::from(move |_| {
            vm.borrow_mut().toggle_created_sort();
            update.force_update();
        })
    };

    let next_page = {
        let vm = vm.clone();
        let update = update.clone();
        Callback::from(move |_| {
            vm.borrow_mut().next_page();
            update.force_update();
        })
    };

    let prev_page = {
        let vm = vm.clone();
        let update = update.clone();
        Callback::from(move |_| {
            vm.borrow_mut().prev_page();
            update.force_update();
        })
    };

    // Row-level status update: PATCH one incident, patch the row in place on
    // success and highlight it briefly. No refetch, no automatic retry.
    let update_status = {
        let vm = vm.clone();
        let update = update.clone();
        Callback::from(move |(id, new_status): (i64, IncidentStatus)| {
            let vm = vm.clone();
            let update = update.clone();
            spawn_local(async move {
                let api = ApiClient::new();
                match services::update_incident_status(&api, id, new_status).await {
                    Ok(updated) => {
                        {
                            let mut vm = vm.borrow_mut();
                            vm.patch_status(updated.id, updated.status);
                            vm.mark_updated(updated.id);
                        }
                        update.force_update();

                        let vm = vm.clone();
                        let update = update.clone();
                        Timeout::new(CONFIG.list_config.status_highlight_ms, move || {
                            vm.borrow_mut().clear_highlight(id);
                            update.force_update();
                        })
                        .forget();
                    }
                    Err(e) => {
                        log::error!("❌ Failed to update incident {} status: {}", id, e);
                        vm.borrow_mut()
                            .set_action_error(format!("Failed to update status: {}", e));
                        update.force_update();
                    }
                }
            });
        })
    };

    let delete_incident = {
        let vm = vm.clone();
        let update = update.clone();
        Callback::from(move |id: i64| {
            let vm = vm.clone();
            let update = update.clone();
            spawn_local(async move {
                let api = ApiClient::new();
                match services::delete_incident(&api, id).await {
                    Ok(()) => {
                        vm.borrow_mut().remove_incident(id);
                        update.force_update();
                    }
                    Err(e) => {
                        log::error!("❌ Failed to delete incident {}: {}", id, e);
                        vm.borrow_mut()
                            .set_action_error(format!("Failed to delete incident: {}", e));
                        update.force_update();
                    }
                }
            });
        })
    };

    UseIncidentListHandle {
        vm,
        set_query,
        toggle_draft_status,
        toggle_draft_priority,
        toggle_draft_category,
        set_draft_date,
        clear_date,
        apply_filters,
        toggle_created_sort,
        next_page,
        prev_page,
        update_status,
        delete_incident,
    }
}
