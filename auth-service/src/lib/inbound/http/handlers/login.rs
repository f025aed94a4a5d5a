use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::MSG_LOGIN_SUCCESS;
use crate::account::models::Credentials;
use crate::account::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

/// HTTP request body for authenticating an account (raw JSON).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

pub async fn login(
    State(state): State<AppState>,
    body: Option<Json<LoginRequestBody>>,
) -> Result<ApiSuccess, ApiError> {
    let Json(body) = body.ok_or(ApiError::Validation)?;

    state
        .auth_service
        .login(Credentials::new(body.username, body.password))
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, MSG_LOGIN_SUCCESS))
}
