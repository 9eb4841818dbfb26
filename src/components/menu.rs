use yew::prelude::*;

use crate::components::app::Route;
use crate::hooks::use_session;
use crate::models::user::Role;

#[derive(Properties, PartialEq)]
pub struct MenuProps {
    pub on_navigate: Callback<Route>,
}

/// Header with the welcome line and the nav links the current role gets
#[function_component(Menu)]
pub fn menu(props: &MenuProps) -> Html {
    let session = use_session();

    let Some(user) = session.user.clone() else {
        return Html::default();
    };
    let role = user.role();
    let is_admin = role.is_admin();

    let nav = |target: Route| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(target))
    };

    let on_logout = {
        let logout = session.logout.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| {
            logout.emit(());
            on_navigate.emit(Route::Dashboard);
        })
    };

    let sector_suffix = match role {
        Role::Sector(sector) => format!(", {}", sector.label()),
        _ => String::new(),
    };

    html! {
        <header class={classes!("dashboard-container", is_admin.then_some("admin-header"))}>
            <h1 class="dashboard-title">
                <a class="welcome-link" onclick={nav(Route::Dashboard)}>
                    {format!("Welcome {}{}", user.name, sector_suffix)}
                </a>
            </h1>

            <div class="admin-nav-right">
                <nav class="dashboard-nav">
                    <ul>
                        <li><a onclick={nav(Route::Dashboard)}>{"Homepage"}</a></li>
                        if role == Role::System {
                            <li><a onclick={nav(Route::Users)}>{"Users"}</a></li>
                        }
                        if !is_admin {
                            <li><a onclick={nav(Route::ReportIncident)}>{"Report Incident"}</a></li>
                        }
                        <li><a onclick={nav(Route::Incidents)}>{"Incidents"}</a></li>
                        <li><a onclick={nav(Route::Statistics)}>{"Statistics"}</a></li>
                    </ul>
                </nav>
                <button onclick={on_logout} class="logout-button">{"Logout"}</button>
            </div>
        </header>
    }
}
