// ============================================================================
// API CLIENT - HTTP transport only (stateless)
// ============================================================================
// Attaches the bearer token and handles expired-token recovery; no domain
// logic lives here.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use web_sys::RequestCredentials;

use crate::config::CONFIG;
use crate::models::auth::{ErrorBody, RefreshResponse};
use crate::utils::{
    load_raw, remove_from_storage, save_raw, STORAGE_KEY_TOKEN, STORAGE_KEY_USER,
};

/// API client. Every request carries `Authorization: Bearer <token>` when a
/// token is stored. A 401 triggers one refresh-and-replay; a second 401 (or a
/// failed refresh) clears the session and sends the app back to the login
/// entry point, so a stale token can never loop.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url().to_string(),
        }
    }

    fn authorized(builder: RequestBuilder) -> RequestBuilder {
        match load_raw(STORAGE_KEY_TOKEN) {
            Some(token) if !token.is_empty() => {
                builder.header("Authorization", &format!("Bearer {}", token))
            }
            _ => builder,
        }
    }

    /// Build and send one attempt. The request is rebuilt from scratch for
    /// the replay, so the fresh token is picked up.
    async fn dispatch(
        &self,
        method: &str,
        url: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<Response, String> {
        let builder = match method {
            "GET" => Request::get(url),
            "POST" => Request::post(url),
            "PUT" => Request::put(url),
            "PATCH" => Request::patch(url),
            "DELETE" => Request::delete(url),
            other => return Err(format!("Unsupported method: {}", other)),
        };
        let builder = Self::authorized(builder);

        match body {
            Some(json) => builder
                .json(json)
                .map_err(|e| format!("Request build error: {}", e))?
                .send()
                .await
                .map_err(|e| format!("Network error: {}", e)),
            None => builder
                .send()
                .await
                .map_err(|e| format!("Network error: {}", e)),
        }
    }

    /// Send a request, transparently surviving one expired access token.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Response, String> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.dispatch(method, &url, body.as_ref()).await?;

        if response.status() != 401 {
            return Ok(response);
        }

        log::warn!("🔑 401 on {} {}, refreshing access token...", method, path);
        match self.refresh_access_token().await {
            Ok(token) => {
                let _ = save_raw(STORAGE_KEY_TOKEN, &token);
                let retried = self.dispatch(method, &url, body.as_ref()).await?;
                if retried.status() == 401 {
                    log::error!("❌ Still unauthorized after refresh, forcing logout");
                    self.force_logout();
                    return Err("Session expired".to_string());
                }
                log::info!("✅ Request replayed with refreshed token");
                Ok(retried)
            }
            Err(e) => {
                log::error!("❌ Token refresh failed: {}", e);
                self.force_logout();
                Err("Session expired".to_string())
            }
        }
    }

    /// POST /auth/refresh, authenticated by the HTTP-only refresh cookie
    async fn refresh_access_token(&self) -> Result<String, String> {
        let url = format!("{}/auth/refresh", self.base_url);
        let response = Request::post(&url)
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        let refreshed = response
            .json::<RefreshResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;
        Ok(refreshed.access_token)
    }

    fn force_logout(&self) {
        let _ = remove_from_storage(STORAGE_KEY_TOKEN);
        let _ = remove_from_storage(STORAGE_KEY_USER);
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href("/login");
        }
    }

    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, String> {
        let response = self.request("GET", path, None).await?;
        Self::decode(response).await
    }

    pub async fn post_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<T, String> {
        let response = self.request("POST", path, Some(body)).await?;
        Self::decode(response).await
    }

    pub async fn put_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<T, String> {
        let response = self.request("PUT", path, Some(body)).await?;
        Self::decode(response).await
    }

    pub async fn patch_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, String> {
        let response = self.request("PATCH", path, None).await?;
        Self::decode(response).await
    }

    /// DELETE returning no useful body
    pub async fn delete(&self, path: &str) -> Result<(), String> {
        let response = self.request("DELETE", path, None).await?;
        if !response.ok() {
            return Err(error_message(response).await);
        }
        Ok(())
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, String> {
        if !response.ok() {
            return Err(error_message(response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the backend's error `detail` when there is one, otherwise a
/// generic HTTP message.
pub async fn error_message(response: Response) -> String {
    let status = response.status();
    let status_text = response.status_text();
    match response.json::<ErrorBody>().await {
        Ok(body) => body
            .into_message()
            .unwrap_or_else(|| format!("HTTP {}: {}", status, status_text)),
        Err(_) => format!("HTTP {}: {}", status, status_text),
    }
}
