use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "message": "API is healthy",
            "timestamp": chrono::Utc::now().to_rfc3339()
        })),
    )
}

pub async fn api_info() -> impl IntoResponse {
    Json(json!({
        "name": "Gran Fondo API",
        "version": env!("CARGO_PKG_VERSION"),
        "message": "API endpoints available",
        "endpoints": {
            "health": "/health",
            "auth": {
                "login": "/api/auth/login",
                "logout": "/api/auth/logout",
            },
            "listing": "/api/sportz/listing",
        }
    }))
}
