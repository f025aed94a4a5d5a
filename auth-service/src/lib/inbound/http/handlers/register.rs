use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::MSG_REGISTER_SUCCESS;
use crate::account::models::Credentials;
use crate::account::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

/// HTTP request body for registering an account (raw JSON).
///
/// Fields default to empty so an absent field and an empty one take the
/// same validation path in the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

pub async fn register(
    State(state): State<AppState>,
    body: Option<Json<RegisterRequestBody>>,
) -> Result<ApiSuccess, ApiError> {
    // A missing or malformed body gets the same response as empty fields
    let Json(body) = body.ok_or(ApiError::Validation)?;

    state
        .auth_service
        .register(Credentials::new(body.username, body.password))
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::CREATED, MSG_REGISTER_SUCCESS))
}
