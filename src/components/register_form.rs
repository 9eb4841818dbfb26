use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::user::{RegisterPayload, Role, Sector};
use crate::services::{auth_service, ApiClient};

#[derive(Properties, PartialEq)]
pub struct RegisterFormProps {
    pub on_close: Callback<()>,
}

/// "Add User" modal. The coarse role + sector selection is collapsed into
/// the backend's concrete role tag on submit; an admin with no matching
/// sector becomes the system admin.
#[function_component(RegisterForm)]
pub fn register_form(props: &RegisterFormProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let repeat_password = use_state(String::new);
    let role_choice = use_state(|| "user".to_string());
    let sector = use_state(String::new);
    let error = use_state(|| None::<String>);

    let text_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                state.set(input.value());
            }
        })
    };

    let on_name = text_input(&name);
    let on_email = text_input(&email);
    let on_password = text_input(&password);
    let on_repeat = text_input(&repeat_password);

    let on_role = {
        let role_choice = role_choice.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                role_choice.set(select.value());
            }
        })
    };

    let on_sector = {
        let sector = sector.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                sector.set(select.value());
            }
        })
    };

    let on_submit = {
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let repeat_password = repeat_password.clone();
        let role_choice = role_choice.clone();
        let sector = sector.clone();
        let error = error.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
                error.set(Some("Please fill in all required fields".to_string()));
                return;
            }
            if *password != *repeat_password {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            let final_role = Role::registration_tag(&role_choice, &sector);
            let payload = RegisterPayload {
                name: (*name).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
                role: final_role.to_string(),
                sector: (*sector).clone(),
            };

            let error = error.clone();
            let on_close = on_close.clone();
            spawn_local(async move {
                let api = ApiClient::new();
                match auth_service::register_user(&api, &payload).await {
                    Ok(created) => {
                        log::info!("✅ User created with id {}", created.user_id);
                        on_close.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ Registration failed: {}", e);
                        error.set(Some(e));
                    }
                }
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <form class="register-modal" onsubmit={on_submit}>
            <h2 class="register-title">{"Add User"}</h2>

            <div class="register-row">
                <label class="register-label">
                    {"Name"}
                    <input type="text" value={(*name).clone()} oninput={on_name} required=true />
                </label>
                <label class="register-label">
                    {"Email"}
                    <input type="email" value={(*email).clone()} oninput={on_email} required=true />
                </label>
            </div>

            <div class="register-row">
                <label class="register-label">
                    {"Password"}
                    <input type="password" value={(*password).clone()} oninput={on_password} required=true />
                </label>
                <label class="register-label">
                    {"Repeat Password"}
                    <input type="password" value={(*repeat_password).clone()} oninput={on_repeat} required=true />
                </label>
            </div>

            <div class="register-row">
                <label class="register-label">
                    {"Role"}
                    <select onchange={on_role}>
                        <option value="user" selected={*role_choice == "user"}>{"User"}</option>
                        <option value="admin" selected={*role_choice == "admin"}>{"Admin"}</option>
                    </select>
                </label>
                <label class="register-label">
                    {"Sector"}
                    <select onchange={on_sector}>
                        <option value="" selected={sector.is_empty()}>{"Choose a sector"}</option>
                        { for Sector::ALL.iter().map(|s| html! {
                            <option value={s.label()} selected={*sector == s.label()}>{s.label()}</option>
                        }) }
                    </select>
                </label>
            </div>

            if let Some(message) = (*error).clone() {
                <p class="register-error">{message}</p>
            }

            <div class="register-actions">
                <button type="submit" class="btn btn-primary">{"Add"}</button>
                <button type="button" class="btn btn-secondary" onclick={on_cancel}>{"Close"}</button>
            </div>
        </form>
    }
}
