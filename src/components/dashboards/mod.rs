pub mod sector_admin;
pub mod system_admin;
pub mod user_dashboard;

pub use sector_admin::SectorAdminDashboard;
pub use system_admin::SystemAdminDashboard;
pub use user_dashboard::UserDashboard;

use yew::prelude::*;

use crate::components::app::Route;
use crate::hooks::use_session;
use crate::models::user::Role;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub on_navigate: Callback<Route>,
}

/// Role-based dashboard dispatch. Total over `Role`, so every tag the
/// backend can emit lands on exactly one variant; unknown tags were already
/// collapsed to `Role::User` when the session user was parsed.
#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let session = use_session();

    let Some(user) = session.user.clone() else {
        return Html::default();
    };

    match user.role() {
        Role::System => html! { <SystemAdminDashboard on_navigate={props.on_navigate.clone()} /> },
        Role::Sector(_) => html! { <SectorAdminDashboard on_navigate={props.on_navigate.clone()} /> },
        Role::User => html! { <UserDashboard on_navigate={props.on_navigate.clone()} /> },
    }
}
