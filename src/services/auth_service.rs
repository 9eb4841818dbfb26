use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::auth::{AuthResult, LoginRequest, RegisterResponse};
use crate::models::user::{RegisterPayload, User};
use crate::services::api_client::{error_message, ApiClient};

/// POST /auth/login with email and password.
///
/// This goes out as a plain request, not through `ApiClient`: a 401 here
/// means wrong credentials, and running it through the refresh-and-retry
/// path would turn every typo into a forced logout.
pub async fn login(email: &str, password: &str) -> Result<AuthResult, String> {
    let url = format!("{}/auth/login", CONFIG.backend_url());
    let request_body = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    log::info!("🔐 Logging in: {}", email);

    let response = Request::post(&url)
        .json(&request_body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let payload = response
        .json::<serde_json::Value>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    normalize_auth_payload(&payload)
}

/// Normalize the login payload for the session store. The backend usually
/// nests the user under `user`; some deployments return the user fields at
/// the top level, in which case the whole payload is treated as the user.
pub fn normalize_auth_payload(payload: &serde_json::Value) -> Result<AuthResult, String> {
    let access_token = payload
        .get("access_token")
        .and_then(|v| v.as_str())
        .ok_or_else(|| "No access token in login response".to_string())?
        .to_string();

    let user = match payload.get("user") {
        Some(nested) if !nested.is_null() => {
            serde_json::from_value::<User>(nested.clone()).ok()
        }
        _ => serde_json::from_value::<User>(payload.clone()).ok(),
    };

    Ok(AuthResult { access_token, user })
}

/// POST /users/create. Requires a system-admin token.
pub async fn register_user(
    client: &ApiClient,
    payload: &RegisterPayload,
) -> Result<RegisterResponse, String> {
    log::info!("📝 Registering user: {} ({})", payload.email, payload.role);
    let body = serde_json::to_value(payload)
        .map_err(|e| format!("Serialization error: {}", e))?;
    client.post_json::<RegisterResponse>("/users/create", body).await
}

/// GET /auth/me
pub async fn fetch_current_user(client: &ApiClient) -> Result<User, String> {
    client.get_json::<User>("/auth/me").await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_user_is_preferred() {
        let payload = json!({
            "access_token": "tok-1",
            "token_type": "bearer",
            "user": {
                "id": 3,
                "name": "Dana",
                "email": "dana@example.com",
                "role": "admin_network",
                "sector": "Network",
                "created_at": "2025-01-01T00:00:00"
            }
        });
        let result = normalize_auth_payload(&payload).unwrap();
        assert_eq!(result.access_token, "tok-1");
        assert_eq!(result.user.unwrap().name, "Dana");
    }

    #[test]
    fn whole_payload_is_the_user_when_no_user_key() {
        let payload = json!({
            "access_token": "tok-2",
            "token_type": "bearer",
            "id": 4,
            "name": "Eli",
            "email": "eli@example.com",
            "role": "user"
        });
        let result = normalize_auth_payload(&payload).unwrap();
        assert_eq!(result.user.unwrap().email, "eli@example.com");
    }

    #[test]
    fn missing_token_is_an_error() {
        let payload = json!({ "token_type": "bearer" });
        assert!(normalize_auth_payload(&payload).is_err());
    }

    #[test]
    fn unparseable_user_yields_token_only() {
        let payload = json!({ "access_token": "tok-3", "user": { "id": "not-a-number" } });
        let result = normalize_auth_payload(&payload).unwrap();
        assert_eq!(result.access_token, "tok-3");
        assert!(result.user.is_none());
    }
}
