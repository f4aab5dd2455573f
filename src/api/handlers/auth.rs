//! Authentication stubs. There is no account system behind the site; these
//! endpoints return canned envelopes so the front-end login flow can be
//! exercised end to end.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;

const MOCK_TOKEN: &str = "mock-jwt-token";

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

pub async fn login(Json(req): Json<LoginRequest>) -> impl IntoResponse {
    if req.email.is_empty() || req.password.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Email and password are required" })),
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "message": "Login successful",
            "token": MOCK_TOKEN,
            "user": { "id": 1, "email": req.email }
        })),
    )
}

pub async fn logout() -> impl IntoResponse {
    Json(json!({
        "success": true,
        "message": "Logout successful"
    }))
}
