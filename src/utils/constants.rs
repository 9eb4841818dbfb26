// localStorage keys
pub const STORAGE_KEY_TOKEN: &str = "incidentTracker_token";
pub const STORAGE_KEY_USER: &str = "incidentTracker_user";
