pub mod pages;
pub mod templates;

use std::path::PathBuf;

use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::api::state::AppState;

pub fn create_web_routes(state: AppState) -> Router {
    let public_dir = PathBuf::from(&state.settings.assets.public_dir);

    Router::new()
        .route("/", get(pages::home::home_page))
        .route("/news", get(pages::news::news_page))
        .route("/news/:slug", get(pages::news::news_detail_page))
        .route("/gallery", get(pages::gallery::gallery_page))
        .route("/about-us", get(pages::about::about_page))
        .route(
            "/contact-us",
            get(pages::contact::contact_page).post(pages::contact::contact_submit),
        )
        .nest_service(
            "/static-assets",
            ServeDir::new(public_dir.join("static-assets")),
        )
        .nest_service("/images", ServeDir::new(public_dir.join("images")))
        .with_state(state)
}
