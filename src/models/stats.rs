use serde::Deserialize;
use std::collections::HashMap;

/// GET /stats/last-7-days: per-day counts as parallel arrays
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct Last7DaysStats {
    pub dates: Vec<String>,
    pub open: Vec<u32>,
    pub in_progress: Vec<u32>,
    pub solved: Vec<u32>,
}

/// GET /stats/by-category: category name -> count
pub type CategoryStats = HashMap<String, u32>;

/// GET /stats/status-distribution and /stats/last-3-months: status -> count
pub type StatusDistribution = HashMap<String, u32>;
