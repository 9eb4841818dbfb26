pub mod use_incident_list;
pub mod use_session;

pub use use_incident_list::{use_incident_list, UseIncidentListHandle};
pub use use_session::use_session;
