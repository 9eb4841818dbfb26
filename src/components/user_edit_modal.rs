use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::user::{User, UserUpdate};

#[derive(Properties, PartialEq)]
pub struct UserEditModalProps {
    pub user: User,
    pub on_save: Callback<UserUpdate>,
    pub on_cancel: Callback<()>,
}

#[function_component(UserEditModal)]
pub fn user_edit_modal(props: &UserEditModalProps) -> Html {
    let name = use_state(|| props.user.name.clone());
    let email = use_state(|| props.user.email.clone());
    let role = use_state(|| props.user.role.clone());
    let sector = use_state(|| props.user.sector.clone().unwrap_or_default());
    let password = use_state(String::new);

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
    let on_role = text_input(&role);
    let on_sector = text_input(&sector);
    let on_password = text_input(&password);

    let on_save = {
        let name = name.clone();
        let email = email.clone();
        let role = role.clone();
        let sector = sector.clone();
        let password = password.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |_| {
            let update = UserUpdate {
                name: (*name).clone(),
                email: (*email).clone(),
                role: (*role).clone(),
                sector: (*sector).clone(),
                // Empty password means "leave unchanged"
                password: if password.is_empty() {
                    None
                } else {
                    Some((*password).clone())
                },
            };
            on_save.emit(update);
        })
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_| on_cancel.emit(()))
    };

    html! {
        <div class="modal">
            <h2>{"Edit User"}</h2>
            <label>
                {"Name:"}
                <input type="text" value={(*name).clone()} oninput={on_name} />
            </label>
            <label>
                {"Email:"}
                <input type="email" value={(*email).clone()} oninput={on_email} />
            </label>
            <label>
                {"Role:"}
                <input type="text" value={(*role).clone()} oninput={on_role} />
            </label>
            <label>
                {"Sector:"}
                <input type="text" value={(*sector).clone()} oninput={on_sector} />
            </label>
            <label>
                {"Password (optional):"}
                <input type="password" value={(*password).clone()} oninput={on_password} />
            </label>
            <div class="modal-actions">
                <button onclick={on_save}>{"Save"}</button>
                <button type="button" onclick={on_cancel}>{"Cancel"}</button>
            </div>
        </div>
    }
}
