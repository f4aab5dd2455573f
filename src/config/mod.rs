use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub assets: AssetConfig,
    pub events: EventsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub base_url: String,
}

/// Upstream Sportz content API used by the news/gallery pages and the
/// same-origin proxy.
#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    pub listing_url: String,
    /// Default entity filter for news listings ("1,4").
    pub news_entities: String,
    /// Default entity filter for gallery listings ("2,4").
    pub gallery_entities: String,
    pub inum: String,
    /// Base URL for the upstream WAF image variants.
    pub waf_image_base: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssetConfig {
    /// Directory the static routes serve from; root-relative image paths in
    /// the event feed are verified against it.
    pub public_dir: String,
    pub map_svg: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EventsConfig {
    pub feed_path: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            // Start with default values
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("server.base_url", "http://localhost:8080")?
            .set_default(
                "upstream.listing_url",
                "https://stg-washington-freedom.sportz.io/apiv3/listing",
            )?
            .set_default("upstream.news_entities", "1,4")?
            .set_default("upstream.gallery_entities", "2,4")?
            .set_default("upstream.inum", "10")?
            .set_default(
                "upstream.waf_image_base",
                "https://stg-rr.sportz.io/static-assets/waf-images",
            )?
            .set_default("assets.public_dir", "public")?
            .set_default("assets.map_svg", "/static-assets/images/event-map.svg")?
            .set_default("events.feed_path", "data/events.json")?
            // Add config file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (with GRANFONDO__ prefix, double underscore separates levels)
            .add_source(Environment::with_prefix("GRANFONDO").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                base_url: "http://localhost:8080".to_string(),
            },
            upstream: UpstreamConfig {
                listing_url: "https://stg-washington-freedom.sportz.io/apiv3/listing"
                    .to_string(),
                news_entities: "1,4".to_string(),
                gallery_entities: "2,4".to_string(),
                inum: "10".to_string(),
                waf_image_base: "https://stg-rr.sportz.io/static-assets/waf-images"
                    .to_string(),
            },
            assets: AssetConfig {
                public_dir: "public".to_string(),
                map_svg: "/static-assets/images/event-map.svg".to_string(),
            },
            events: EventsConfig {
                feed_path: "data/events.json".to_string(),
            },
        }
    }
}
