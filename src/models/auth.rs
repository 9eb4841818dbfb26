use serde::{Deserialize, Serialize};

use crate::models::user::User;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct RefreshResponse {
    pub access_token: String,
}

/// Error payload shape the backend uses for non-2xx responses
#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.detail.or(self.message)
    }
}

/// POST /users/create response
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: i64,
}

/// Normalized login result handed to the session store
#[derive(Clone, PartialEq, Debug)]
pub struct AuthResult {
    pub access_token: String,
    pub user: Option<User>,
}
