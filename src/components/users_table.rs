use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::register_form::RegisterForm;
use crate::components::search_bar::SearchBar;
use crate::components::user_edit_modal::UserEditModal;
use crate::config::CONFIG;
use crate::models::user::{User, UserUpdate};
use crate::services::{user_service, ApiClient};
use crate::utils::format_datetime;

/// User management for system admins: debounced search, skip/limit paging
/// with the same full-page probe as the incident list, add/edit modals and
/// per-row delete.
#[function_component(UsersTable)]
pub fn users_table() -> Html {
    let users = use_state(Vec::<User>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let query = use_state(String::new);
    let page = use_state(|| 0usize);
    let editing = use_state(|| None::<User>);
    let show_register = use_state(|| false);
    let generation = use_mut_ref(|| 0u64);

    let page_size = CONFIG.list_config.items_per_page as usize;

    // Debounced fetch on query/page changes; the generation guard drops
    // whatever lands after a newer request was issued.
    {
        let users = users.clone();
        let loading = loading.clone();
        let error = error.clone();
        let generation = generation.clone();
        let deps = ((*query).clone(), *page);
        use_effect_with(deps, move |(query, page)| {
            let query = query.clone();
            let page = *page;
            let timeout = Timeout::new(CONFIG.list_config.search_debounce_ms, move || {
                *generation.borrow_mut() += 1;
                let my_generation = *generation.borrow();
                loading.set(true);

                spawn_local(async move {
                    let api = ApiClient::new();
                    let skip = page * page_size;
                    let result = if query.is_empty() {
                        user_service::fetch_users(&api, skip, page_size).await
                    } else {
                        user_service::search_users(&api, &query, skip, page_size).await
                    };

                    if *generation.borrow() != my_generation {
                        log::info!("🕑 Discarding stale user fetch (generation {})", my_generation);
                        return;
                    }

                    match result {
                        Ok(rows) => {
                            users.set(rows);
                            error.set(None);
                        }
                        Err(e) => {
                            log::error!("❌ Failed to fetch users: {}", e);
                            error.set(Some("Failed to fetch users.".to_string()));
                        }
                    }
                    loading.set(false);
                });
            });
            move || drop(timeout)
        });
    }

    let on_query = {
        let query = query.clone();
        let page = page.clone();
        Callback::from(move |value: String| {
            query.set(value);
            page.set(0);
        })
    };

    let on_prev = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| {
            page.set((*page).saturating_sub(1));
        })
    };

    let has_next_page = users.len() >= page_size;
    let on_next = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| {
            page.set(*page + 1);
        })
    };

    let on_add_user = {
        let show_register = show_register.clone();
        Callback::from(move |_: MouseEvent| show_register.set(true))
    };

    let on_register_close = {
        let show_register = show_register.clone();
        Callback::from(move |_| show_register.set(false))
    };

    let on_edit_cancel = {
        let editing = editing.clone();
        Callback::from(move |_| editing.set(None))
    };

    // PUT the edit, then patch the visible row in place
    let on_edit_save = {
        let users = users.clone();
        let editing = editing.clone();
        Callback::from(move |update: UserUpdate| {
            let Some(selected) = (*editing).clone() else {
                return;
            };
            let users = users.clone();
            let editing = editing.clone();
            spawn_local(async move {
                let api = ApiClient::new();
                match user_service::update_user(&api, selected.id, &update).await {
                    Ok(updated) => {
                        let patched: Vec<User> = users
                            .iter()
                            .map(|u| if u.id == updated.id { updated.clone() } else { u.clone() })
                            .collect();
                        users.set(patched);
                        editing.set(None);
                    }
                    Err(e) => {
                        log::error!("❌ Failed to update user {}: {}", selected.id, e);
                        if let Some(win) = web_sys::window() {
                            let _ = win.alert_with_message(&format!("Failed to update user: {}", e));
                        }
                    }
                }
            });
        })
    };

    let on_delete = {
        let users = users.clone();
        Callback::from(move |id: i64| {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message("Delete this user?").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let users = users.clone();
            spawn_local(async move {
                let api = ApiClient::new();
                match user_service::delete_user(&api, id).await {
                    Ok(()) => {
                        let remaining: Vec<User> =
                            users.iter().filter(|u| u.id != id).cloned().collect();
                        users.set(remaining);
                    }
                    Err(e) => {
                        log::error!("❌ Failed to delete user {}: {}", id, e);
                        if let Some(win) = web_sys::window() {
                            let _ = win.alert_with_message(&format!("Failed to delete user: {}", e));
                        }
                    }
                }
            });
        })
    };

    html! {
        <div class="users-container">
            if *loading {
                <div class="loading-overlay">
                    <div class="spinner"></div>
                </div>
            }

            <div class="users-header">
                <div class="add-user" onclick={on_add_user}>
                    <span class="add-user-plus">{"+"}</span>
                    <p>{"Add New User"}</p>
                </div>
                <div class="search-bar-container">
                    <SearchBar query={(*query).clone()} on_change={on_query} />
                </div>
            </div>

            if let Some(message) = (*error).clone() {
                <div class="error-banner">{message}</div>
            }

            <table class="users-table">
                <thead>
                    <tr><th colspan="7" class="table-title">{"Users List"}</th></tr>
                    <tr>
                        <th>{"No"}</th>
                        <th>{"Name"}</th>
                        <th>{"Email"}</th>
                        <th>{"Role"}</th>
                        <th>{"Sector"}</th>
                        <th>{"Created at"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for users.iter().enumerate().map(|(index, user)| {
                        let on_edit = {
                            let editing = editing.clone();
                            let user = user.clone();
                            Callback::from(move |_: MouseEvent| editing.set(Some(user.clone())))
                        };
                        let on_delete_row = {
                            let on_delete = on_delete.clone();
                            let id = user.id;
                            Callback::from(move |_: MouseEvent| on_delete.emit(id))
                        };
                        html! {
                            <tr key={user.id}>
                                <td>
                                    <span class="edit-icon" onclick={on_edit}>{"✎"}</span>
                                    {index + 1 + *page * page_size}
                                </td>
                                <td>{&user.name}</td>
                                <td>{&user.email}</td>
                                <td>{&user.role}</td>
                                <td>{user.sector.clone().unwrap_or_default()}</td>
                                <td>{format_datetime(&user.created_at)}</td>
                                <td>
                                    <button type="button" class="delete-btn" onclick={on_delete_row}>{"🗑"}</button>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>

            <div class="pagination">
                <button onclick={on_prev} disabled={*page == 0}>{"Previous"}</button>
                <span>{format!(" Page {} ", *page + 1)}</span>
                <button onclick={on_next} disabled={!has_next_page}>{"Next"}</button>
            </div>

            if let Some(user) = (*editing).clone() {
                <div class="modal-backdrop">
                    <div class="modal-content">
                        <UserEditModal
                            user={user}
                            on_save={on_edit_save.clone()}
                            on_cancel={on_edit_cancel.clone()}
                        />
                    </div>
                </div>
            }

            if *show_register {
                <div class="modal-backdrop">
                    <div class="modal-content">
                        <RegisterForm on_close={on_register_close.clone()} />
                    </div>
                </div>
            }
        </div>
    }
}
