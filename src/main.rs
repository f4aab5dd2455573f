use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use granfondo::{
    api::{self, state::AppState},
    config::Settings,
    events::FsAssetStore,
    feed::JsonFileEventFeed,
    listing::SportzClient,
    web,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "granfondo=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let settings = Settings::new().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config: {}. Using defaults.", e);
        Settings::default()
    });

    tracing::info!(
        "Starting Gran Fondo server on {}:{}",
        settings.server.host,
        settings.server.port
    );

    let feed = Arc::new(JsonFileEventFeed::new(&settings.events.feed_path));
    let assets = Arc::new(FsAssetStore::new(&settings.assets.public_dir));
    let listing = Arc::new(SportzClient::new(settings.upstream.listing_url.clone()));
    let settings = Arc::new(settings);

    let state = AppState::new(settings.clone(), feed, assets, listing);

    // Combine API and web routes
    let app = api::create_app(state.clone()).merge(web::create_web_routes(state));

    let listener = tokio::net::TcpListener::bind(format!(
        "{}:{}",
        settings.server.host, settings.server.port
    ))
    .await?;

    tracing::info!(
        "Server listening on http://{}:{}",
        settings.server.host,
        settings.server.port
    );

    axum::serve(listener, app).await?;

    Ok(())
}
