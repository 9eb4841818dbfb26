use crate::models::incident::{Incident, IncidentStatus, NewIncident};
use crate::services::api_client::ApiClient;
use crate::utils::encode_query_value;
use crate::viewmodels::incident_list::FetchPlan;

/// Build the request path for a list or search fetch.
///
/// The wire contract is snake_case throughout. Multi-select filters go out
/// as repeated parameters and are omitted entirely when the selection is
/// empty; the visible 0-based page becomes the API's 1-based `page`.
pub fn plan_path(plan: &FetchPlan) -> String {
    match plan {
        FetchPlan::Search { q, skip, limit } => format!(
            "/incidents/search?q={}&skip={}&limit={}",
            encode_query_value(q),
            skip,
            limit
        ),
        FetchPlan::List {
            page,
            page_size,
            filters,
            sort_by,
            sort_order,
        } => {
            let mut params: Vec<String> = vec![
                format!("page={}", page + 1),
                format!("page_size={}", page_size),
            ];
            for status in &filters.status {
                params.push(format!("status={}", status.as_param()));
            }
            for priority in &filters.priority {
                params.push(format!("priority={}", priority.as_param()));
            }
            for category in &filters.category {
                params.push(format!("category={}", category.as_param()));
            }
            if let Some(date) = filters.created_at {
                params.push(format!("start_date={}", date.format("%Y-%m-%d")));
            }
            params.push(format!("sort_by={}", sort_by.as_param()));
            params.push(format!("sort_order={}", sort_order.as_param()));
            format!("/incidents/?{}", params.join("&"))
        }
    }
}

/// Fetch one page of incidents according to the plan
pub async fn fetch_incidents(
    client: &ApiClient,
    plan: &FetchPlan,
) -> Result<Vec<Incident>, String> {
    client.get_json::<Vec<Incident>>(&plan_path(plan)).await
}

/// GET /incidents/ with no parameters; the backend scopes rows by role.
/// Used by the dashboards for their "latest incidents" cards.
pub async fn fetch_recent_incidents(client: &ApiClient) -> Result<Vec<Incident>, String> {
    client.get_json::<Vec<Incident>>("/incidents/").await
}

/// PATCH /incidents/{id}/status. Returns the updated incident, which the
/// caller patches into the visible page in place.
pub async fn update_incident_status(
    client: &ApiClient,
    id: i64,
    new_status: IncidentStatus,
) -> Result<Incident, String> {
    log::info!("🔧 Updating incident {} status to {}", id, new_status.as_param());
    let path = format!("/incidents/{}/status?new_status={}", id, new_status.as_param());
    client.patch_json::<Incident>(&path).await
}

/// POST /incidents/
pub async fn create_incident(
    client: &ApiClient,
    incident: &NewIncident,
) -> Result<Incident, String> {
    log::info!("📝 Reporting incident: {}", incident.title);
    let body = serde_json::to_value(incident)
        .map_err(|e| format!("Serialization error: {}", e))?;
    client.post_json::<Incident>("/incidents/", body).await
}

/// GET /incidents/{id}
pub async fn get_incident(client: &ApiClient, id: i64) -> Result<Incident, String> {
    client.get_json::<Incident>(&format!("/incidents/{}", id)).await
}

/// DELETE /incidents/{id}
pub async fn delete_incident(client: &ApiClient, id: i64) -> Result<(), String> {
    log::info!("🗑️ Deleting incident {}", id);
    client.delete(&format!("/incidents/{}", id)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::incident::{IncidentCategory, IncidentPriority};
    use crate::viewmodels::incident_list::{IncidentFilters, SortKey, SortOrder};
    use chrono::NaiveDate;

    fn list_plan(filters: IncidentFilters, page: usize) -> FetchPlan {
        FetchPlan::List {
            page,
            page_size: 10,
            filters,
            sort_by: SortKey::CreatedAt,
            sort_order: SortOrder::Desc,
        }
    }

    #[test]
    fn empty_filters_are_omitted_from_the_path() {
        let path = plan_path(&list_plan(IncidentFilters::default(), 0));
        assert_eq!(
            path,
            "/incidents/?page=1&page_size=10&sort_by=created_at&sort_order=desc"
        );
    }

    #[test]
    fn multi_select_filters_repeat_the_parameter() {
        let filters = IncidentFilters {
            status: vec![IncidentStatus::Open, IncidentStatus::Solved],
            priority: vec![IncidentPriority::Critical],
            category: vec![IncidentCategory::Network],
            created_at: None,
        };
        let path = plan_path(&list_plan(filters, 0));
        assert!(path.contains("status=open&status=solved"));
        assert!(path.contains("priority=critical"));
        assert!(path.contains("category=network"));
    }

    #[test]
    fn date_filter_is_a_single_day_in_iso_form() {
        let filters = IncidentFilters {
            created_at: NaiveDate::from_ymd_opt(2025, 3, 4),
            ..IncidentFilters::default()
        };
        let path = plan_path(&list_plan(filters, 0));
        assert!(path.contains("start_date=2025-03-04"));
    }

    #[test]
    fn visible_page_index_maps_to_one_based_page_param() {
        let path = plan_path(&list_plan(IncidentFilters::default(), 2));
        assert!(path.contains("page=3&page_size=10"));
    }

    #[test]
    fn search_path_carries_the_encoded_query_only() {
        let plan = FetchPlan::Search {
            q: "router down".to_string(),
            skip: 0,
            limit: 10,
        };
        assert_eq!(plan_path(&plan), "/incidents/search?q=router%20down&skip=0&limit=10");
    }

    #[test]
    fn sort_keys_serialize_to_wire_names() {
        let plan = FetchPlan::List {
            page: 0,
            page_size: 10,
            filters: IncidentFilters::default(),
            sort_by: SortKey::Priority,
            sort_order: SortOrder::Asc,
        };
        let path = plan_path(&plan);
        assert!(path.contains("sort_by=priority&sort_order=asc"));
    }
}
