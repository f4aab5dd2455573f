use std::sync::Arc;

use crate::{
    config::Settings,
    events::AssetStore,
    feed::EventFeed,
    listing::ListingClient,
};

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub feed: Arc<dyn EventFeed>,
    pub assets: Arc<dyn AssetStore>,
    pub listing: Arc<dyn ListingClient>,
}

impl AppState {
    pub fn new(
        settings: Arc<Settings>,
        feed: Arc<dyn EventFeed>,
        assets: Arc<dyn AssetStore>,
        listing: Arc<dyn ListingClient>,
    ) -> Self {
        Self {
            settings,
            feed,
            assets,
            listing,
        }
    }
}
