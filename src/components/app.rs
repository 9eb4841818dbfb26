use yew::prelude::*;

use crate::components::dashboards::Dashboard;
use crate::components::incident_form::IncidentForm;
use crate::components::incident_table::IncidentTable;
use crate::components::login_screen::LoginScreen;
use crate::components::menu::Menu;
use crate::components::statistics::StatisticsPage;
use crate::components::users_table::UsersTable;
use crate::hooks::use_session;
use crate::models::user::Role;
use crate::session::SessionProvider;

/// Client-side views. No URL routing; the backend owns all data, so view
/// switching is plain state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Route {
    Dashboard,
    Incidents,
    ReportIncident,
    Users,
    Statistics,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionProvider>
            <AppShell />
        </SessionProvider>
    }
}

#[function_component(AppShell)]
fn app_shell() -> Html {
    let session = use_session();
    let route = use_state(|| Route::Dashboard);

    // Do not flash the login screen while the stored session is being read
    if session.loading {
        return html! { <div class="app-loading">{"Loading..."}</div> };
    }

    let Some(user) = session.user.clone() else {
        return html! { <LoginScreen /> };
    };

    let on_navigate = {
        let route = route.clone();
        Callback::from(move |target: Route| route.set(target))
    };

    // User management is system-admin territory; everyone else lands back
    // on their dashboard
    let effective_route = if *route == Route::Users && user.role() != Role::System {
        Route::Dashboard
    } else {
        *route
    };

    let content = match effective_route {
        Route::Dashboard => html! { <Dashboard on_navigate={on_navigate.clone()} /> },
        Route::Incidents => html! { <IncidentTable /> },
        Route::ReportIncident => {
            let on_done = {
                let on_navigate = on_navigate.clone();
                Callback::from(move |_| on_navigate.emit(Route::Incidents))
            };
            html! { <IncidentForm on_done={on_done} /> }
        }
        Route::Users => html! { <UsersTable /> },
        Route::Statistics => html! { <StatisticsPage /> },
    };

    html! {
        <>
            <Menu on_navigate={on_navigate.clone()} />
            { content }
        </>
    }
}
