use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum IncidentStatus {
    Open,
    InProgress,
    Solved,
}

impl IncidentStatus {
    pub const ALL: [IncidentStatus; 3] = [
        IncidentStatus::Open,
        IncidentStatus::InProgress,
        IncidentStatus::Solved,
    ];

    /// Wire value, also used as CSS class
    pub fn as_param(&self) -> &'static str {
        match self {
            IncidentStatus::Open => "open",
            IncidentStatus::InProgress => "in_progress",
            IncidentStatus::Solved => "solved",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IncidentStatus::Open => "Open",
            IncidentStatus::InProgress => "In Progress",
            IncidentStatus::Solved => "Solved",
        }
    }

    pub fn from_param(param: &str) -> Option<IncidentStatus> {
        Self::ALL.into_iter().find(|s| s.as_param() == param)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum IncidentPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl IncidentPriority {
    pub const ALL: [IncidentPriority; 4] = [
        IncidentPriority::Low,
        IncidentPriority::Medium,
        IncidentPriority::High,
        IncidentPriority::Critical,
    ];

    pub fn as_param(&self) -> &'static str {
        match self {
            IncidentPriority::Low => "low",
            IncidentPriority::Medium => "medium",
            IncidentPriority::High => "high",
            IncidentPriority::Critical => "critical",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IncidentPriority::Low => "Low",
            IncidentPriority::Medium => "Medium",
            IncidentPriority::High => "High",
            IncidentPriority::Critical => "Critical",
        }
    }

    pub fn from_param(param: &str) -> Option<IncidentPriority> {
        Self::ALL.into_iter().find(|p| p.as_param() == param)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum IncidentCategory {
    Hardware,
    Software,
    Network,
    Security,
    Other,
}

impl IncidentCategory {
    pub const ALL: [IncidentCategory; 5] = [
        IncidentCategory::Hardware,
        IncidentCategory::Software,
        IncidentCategory::Network,
        IncidentCategory::Security,
        IncidentCategory::Other,
    ];

    pub fn as_param(&self) -> &'static str {
        match self {
            IncidentCategory::Hardware => "hardware",
            IncidentCategory::Software => "software",
            IncidentCategory::Network => "network",
            IncidentCategory::Security => "security",
            IncidentCategory::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IncidentCategory::Hardware => "Hardware",
            IncidentCategory::Software => "Software",
            IncidentCategory::Network => "Network",
            IncidentCategory::Security => "Security",
            IncidentCategory::Other => "Other",
        }
    }

    pub fn from_param(param: &str) -> Option<IncidentCategory> {
        Self::ALL.into_iter().find(|c| c.as_param() == param)
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Incident {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: IncidentCategory,
    pub priority: IncidentPriority,
    pub status: IncidentStatus,
    pub created_at: String,
    pub reporter_id: i64,
    #[serde(default)]
    pub resolver_id: Option<i64>,
}

/// Payload for POST /incidents/
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct NewIncident {
    pub title: String,
    pub description: String,
    pub category: IncidentCategory,
    pub priority: IncidentPriority,
    pub reporter_id: i64,
}
