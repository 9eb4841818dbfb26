pub mod incident_list;

pub use incident_list::{
    FetchPlan, IncidentFilters, IncidentListVm, LoadPhase, QueryInputs, SortKey, SortOrder,
};
