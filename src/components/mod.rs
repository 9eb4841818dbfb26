pub mod app;
pub mod charts;
pub mod dashboards;
pub mod incident_card;
pub mod incident_form;
pub mod incident_table;
pub mod login_screen;
pub mod menu;
pub mod register_form;
pub mod search_bar;
pub mod statistics;
pub mod user_edit_modal;
pub mod users_table;

pub use app::App;
pub use charts::{CategoryBarChart, Last7DaysAreaChart, StatusDistributionDonut, ThreeMonthsDonut};
pub use dashboards::Dashboard;
pub use incident_card::IncidentCard;
pub use incident_form::IncidentForm;
pub use incident_table::IncidentTable;
pub use login_screen::LoginScreen;
pub use menu::Menu;
pub use register_form::RegisterForm;
pub use search_bar::SearchBar;
pub use statistics::StatisticsPage;
pub use user_edit_modal::UserEditModal;
pub use users_table::UsersTable;
