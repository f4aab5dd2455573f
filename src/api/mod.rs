pub mod handlers;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::new()
        // Health and index endpoints
        .route("/health", get(handlers::root::health_check))
        .route("/api", get(handlers::root::api_info))
        // Auth stubs
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/auth/logout", post(handlers::auth::logout))
        // Same-origin proxy for the upstream listing API. CORS headers are
        // set per-request in the handler so the Origin can be echoed back.
        .route(
            "/api/sportz/listing",
            get(handlers::listing::proxy).options(handlers::listing::preflight),
        )
        // Add state to the router
        .with_state(state)
        // Middleware
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
