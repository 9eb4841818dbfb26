use crate::models::user::{User, UserUpdate};
use crate::services::api_client::ApiClient;
use crate::utils::encode_query_value;

/// GET /users/ with skip/limit paging. System admin only.
pub async fn fetch_users(
    client: &ApiClient,
    skip: usize,
    limit: usize,
) -> Result<Vec<User>, String> {
    let path = format!("/users/?skip={}&limit={}", skip, limit);
    client.get_json::<Vec<User>>(&path).await
}

/// GET /users/search
pub async fn search_users(
    client: &ApiClient,
    q: &str,
    skip: usize,
    limit: usize,
) -> Result<Vec<User>, String> {
    let path = format!(
        "/users/search?q={}&skip={}&limit={}",
        encode_query_value(q),
        skip,
        limit
    );
    client.get_json::<Vec<User>>(&path).await
}

/// PUT /users/{id}. Returns the updated user, which the caller patches
/// into the visible page in place.
pub async fn update_user(
    client: &ApiClient,
    id: i64,
    update: &UserUpdate,
) -> Result<User, String> {
    log::info!("✏️ Updating user {}", id);
    let body = serde_json::to_value(update)
        .map_err(|e| format!("Serialization error: {}", e))?;
    client.put_json::<User>(&format!("/users/{}", id), body).await
}

/// DELETE /users/{id}
pub async fn delete_user(client: &ApiClient, id: i64) -> Result<(), String> {
    log::info!("🗑️ Deleting user {}", id);
    client.delete(&format!("/users/{}", id)).await
}
