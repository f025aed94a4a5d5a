use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::account::errors::AccountError;

pub mod index;
pub mod login;
pub mod register;

/// Fixed wire messages. The auth endpoints answer with these exact strings
/// and nothing else, so no error path can leak internal detail.
pub const MSG_REGISTER_SUCCESS: &str = "Usuario registrado exitosamente";
pub const MSG_LOGIN_SUCCESS: &str = "Autenticación satisfactoria";
pub const MSG_MISSING_CREDENTIALS: &str = "Usuario y contraseña son requeridos";
pub const MSG_DUPLICATE_USER: &str = "El usuario ya existe";
pub const MSG_AUTHENTICATION_FAILED: &str = "Error en la autenticación";
pub const MSG_NOT_FOUND: &str = "Ruta no encontrada";
pub const MSG_INTERNAL_ERROR: &str = "Error interno del servidor";

/// Response body shared by every auth endpoint outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody {
    pub success: bool,
    pub message: String,
}

impl ApiResponseBody {
    pub fn success(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }

    pub fn failure(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiSuccess(StatusCode, Json<ApiResponseBody>);

impl ApiSuccess {
    pub fn new(status: StatusCode, message: &str) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::success(message)))
    }
}

impl IntoResponse for ApiSuccess {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Transport-level error selected from the domain outcome.
///
/// Variants carry no message text except the internal detail, which is
/// logged and never surfaced, so the uniform-message policy holds by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Validation,
    DuplicateUser,
    Authentication,
    NotFound,
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation => (StatusCode::BAD_REQUEST, MSG_MISSING_CREDENTIALS),
            ApiError::DuplicateUser => (StatusCode::BAD_REQUEST, MSG_DUPLICATE_USER),
            ApiError::Authentication => (StatusCode::UNAUTHORIZED, MSG_AUTHENTICATION_FAILED),
            ApiError::NotFound => (StatusCode::NOT_FOUND, MSG_NOT_FOUND),
            ApiError::InternalServerError(detail) => {
                tracing::error!(detail = %detail, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL_ERROR)
            }
        };

        (status, Json(ApiResponseBody::failure(message))).into_response()
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::MissingCredentials => ApiError::Validation,
            AccountError::UsernameAlreadyExists(_) => ApiError::DuplicateUser,
            AccountError::InvalidCredentials => ApiError::Authentication,
            AccountError::Password(_) | AccountError::Store(_) | AccountError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}
