use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_session;
use crate::services::auth_service;

#[function_component(LoginScreen)]
pub fn login_screen() -> Html {
    let session = use_session();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        let login = session.login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let email_value = (*email).trim().to_string();
            let password_value = (*password).clone();

            // Required fields are checked here; nothing incomplete goes out
            if email_value.is_empty() || password_value.is_empty() {
                error.set(Some("Please fill in email and password".to_string()));
                return;
            }

            let error = error.clone();
            let loading = loading.clone();
            let login = login.clone();
            loading.set(true);
            error.set(None);

            spawn_local(async move {
                match auth_service::login(&email_value, &password_value).await {
                    Ok(auth) => {
                        if auth.user.is_none() {
                            log::error!("❌ Login response carried no user");
                            error.set(Some("Login failed: malformed server response".to_string()));
                        } else {
                            login.emit(auth);
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Login failed: {}", e);
                        error.set(Some(e));
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-logo">
                        <div class="logo-icon">{"🚨"}</div>
                    </div>
                    <h1>{"Incident Tracker"}</h1>
                    <p>{"Report and track incidents"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            placeholder="Email"
                            value={(*email).clone()}
                            oninput={on_email}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="Password"
                            value={(*password).clone()}
                            oninput={on_password}
                            required=true
                        />
                    </div>

                    <button class="login-btn" type="submit" disabled={*loading}>
                        { if *loading { "Logging in..." } else { "Login" } }
                    </button>

                    if let Some(message) = (*error).clone() {
                        <p class="error-text">{message}</p>
                    }
                </form>
            </div>
        </div>
    }
}
