use crate::models::stats::{CategoryStats, Last7DaysStats, StatusDistribution};
use crate::services::api_client::ApiClient;

pub async fn fetch_last_7_days(client: &ApiClient) -> Result<Last7DaysStats, String> {
    client.get_json::<Last7DaysStats>("/stats/last-7-days").await
}

/// Per-category counts. The backend returns nothing useful for sector
/// admins, so callers skip the fetch for them.
pub async fn fetch_category_stats(client: &ApiClient) -> Result<CategoryStats, String> {
    client.get_json::<CategoryStats>("/stats/by-category").await
}

pub async fn fetch_status_distribution(
    client: &ApiClient,
) -> Result<StatusDistribution, String> {
    client.get_json::<StatusDistribution>("/stats/status-distribution").await
}

pub async fn fetch_last_3_months(client: &ApiClient) -> Result<StatusDistribution, String> {
    client.get_json::<StatusDistribution>("/stats/last-3-months").await
}
