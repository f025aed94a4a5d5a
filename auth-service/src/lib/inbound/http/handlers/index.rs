use axum::Json;
use serde::Serialize;

/// Service description returned from the root path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexResponseData {
    pub mensaje: String,
    pub descripcion: String,
    pub endpoints: IndexEndpoints,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEndpoints {
    pub registro: String,
    pub login: String,
}

pub async fn index() -> Json<IndexResponseData> {
    Json(IndexResponseData {
        mensaje: "Bienvenido al Servicio Web de Autenticación".to_string(),
        descripcion: "API REST para registro e inicio de sesión de usuarios".to_string(),
        endpoints: IndexEndpoints {
            registro: "POST /api/auth/register".to_string(),
            login: "POST /api/auth/login".to_string(),
        },
    })
}
