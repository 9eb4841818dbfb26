// ============================================================================
// SESSION - current user + token, persisted to localStorage
// ============================================================================
// One provider at the root of the tree; everything below consumes it through
// the context handle instead of reaching for a global.
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::auth::AuthResult;
use crate::models::user::User;
use crate::services::{auth_service, ApiClient};
use crate::utils::{
    load_raw, remove_from_storage, save_raw, save_to_storage, STORAGE_KEY_TOKEN,
    STORAGE_KEY_USER,
};

/// Context handle exposed to consumers. `loading` stays true until the
/// stored session has been read, so views never render under an unknown
/// auth state.
#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    pub user: Option<User>,
    pub loading: bool,
    pub login: Callback<AuthResult>,
    pub logout: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let user = use_state(|| None::<User>);
    let loading = use_state(|| true);

    // Hydrate from storage on mount. A corrupt stored user is discarded
    // together with the token rather than propagated.
    {
        let user = user.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            let stored_token = load_raw(STORAGE_KEY_TOKEN);
            let stored_user = load_raw(STORAGE_KEY_USER);

            match (stored_token, stored_user) {
                (Some(_), Some(raw)) => match serde_json::from_str::<User>(&raw) {
                    Ok(parsed) => {
                        log::info!("✅ Session restored for {}", parsed.email);
                        user.set(Some(parsed));

                        // Refresh the cached profile in the background; the
                        // stored copy keeps the UI usable if this fails
                        let user = user.clone();
                        spawn_local(async move {
                            let api = ApiClient::new();
                            match auth_service::fetch_current_user(&api).await {
                                Ok(fresh) => {
                                    let _ = save_to_storage(STORAGE_KEY_USER, &fresh);
                                    user.set(Some(fresh));
                                }
                                Err(e) => {
                                    log::warn!("⚠️ Could not refresh profile: {}", e);
                                }
                            }
                        });
                    }
                    Err(e) => {
                        log::warn!("⚠️ Corrupt user in storage, clearing session: {}", e);
                        let _ = remove_from_storage(STORAGE_KEY_USER);
                        let _ = remove_from_storage(STORAGE_KEY_TOKEN);
                    }
                },
                _ => {
                    log::info!("ℹ️ No stored session");
                }
            }
            loading.set(false);
            || ()
        });
    }

    let login = {
        let user = user.clone();
        Callback::from(move |auth: AuthResult| {
            let _ = save_raw(STORAGE_KEY_TOKEN, &auth.access_token);
            match auth.user {
                Some(logged_in) => {
                    let _ = save_to_storage(STORAGE_KEY_USER, &logged_in);
                    log::info!("✅ Logged in: {}", logged_in.email);
                    user.set(Some(logged_in));
                }
                None => {
                    log::warn!("⚠️ Login response carried no user payload");
                }
            }
        })
    };

    let logout = {
        let user = user.clone();
        Callback::from(move |_| {
            let _ = remove_from_storage(STORAGE_KEY_TOKEN);
            let _ = remove_from_storage(STORAGE_KEY_USER);
            log::info!("👋 Logout");
            user.set(None);
        })
    };

    let handle = SessionHandle {
        user: (*user).clone(),
        loading: *loading,
        login,
        logout,
    };

    html! {
        <ContextProvider<SessionHandle> context={handle}>
            { props.children.clone() }
        </ContextProvider<SessionHandle>>
    }
}
