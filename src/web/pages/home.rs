use askama::Template;
use axum::{extract::State, response::IntoResponse};

use crate::{
    api::state::AppState,
    domain::{DisplayItem, NewsCard, RawEventRecord},
    events::map::{default_country, default_markers, MapMarker, ViewBox},
    events::{classify_and_format, classify_for_country},
    listing::ListingQuery,
    web::templates::{nav_items, HtmlTemplate, NavItem},
};

/// A marker with its position already resolved to percent offsets.
pub struct MarkerView {
    pub country: String,
    pub flag_src: Option<String>,
    pub svg_id: Option<String>,
    pub left_pct: f64,
    pub top_pct: f64,
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub nav: Vec<NavItem>,
    pub strip: Vec<DisplayItem>,
    pub map_svg_src: String,
    pub markers: Vec<MarkerView>,
    pub panel_country: Option<String>,
    pub panel_flag: Option<String>,
    pub panel_events: Vec<DisplayItem>,
    pub latest_news: Vec<NewsCard>,
    pub gallery_teaser: Vec<NewsCard>,
}

fn marker_views(markers: &[MapMarker], view_box: Option<&ViewBox>) -> Vec<MarkerView> {
    markers
        .iter()
        .map(|m| {
            let (left_pct, top_pct) = m.resolved_pct(view_box);
            MarkerView {
                country: m.country.clone(),
                flag_src: m.flag_src(),
                svg_id: m.svg_id.clone(),
                left_pct,
                top_pct,
            }
        })
        .collect()
}

fn load_records(state: &AppState) -> Vec<RawEventRecord> {
    state.feed.load().unwrap_or_else(|e| {
        tracing::warn!("Event feed unavailable, rendering empty strip: {}", e);
        Vec::new()
    })
}

pub async fn home_page(State(state): State<AppState>) -> impl IntoResponse {
    let records = load_records(&state);
    let strip = classify_and_format(&records, state.assets.as_ref());

    let markers = default_markers();
    let map_svg_src = state.settings.assets.map_svg.clone();
    let svg_path = format!(
        "{}/{}",
        state.settings.assets.public_dir.trim_end_matches('/'),
        map_svg_src.trim_start_matches('/')
    );
    let view_box = std::fs::read_to_string(&svg_path)
        .ok()
        .and_then(|svg| ViewBox::from_svg(&svg));

    let panel_country = default_country(&records, &markers);
    let panel_events = panel_country
        .as_deref()
        .map(|country| classify_for_country(&records, country, state.assets.as_ref()))
        .unwrap_or_default();
    let panel_flag = panel_country.as_deref().and_then(|country| {
        markers
            .iter()
            .find(|m| m.country.eq_ignore_ascii_case(country.trim()))
            .and_then(|m| m.flag_src())
    });

    let upstream = &state.settings.upstream;
    let latest_news = match state
        .listing
        .fetch_page(&ListingQuery::news(upstream, 1))
        .await
    {
        Ok(response) => response
            .items()
            .iter()
            .take(3)
            .map(|item| NewsCard::from_listing(item, &upstream.waf_image_base, "/news"))
            .collect(),
        Err(e) => {
            tracing::warn!("Latest news unavailable: {}", e);
            Vec::new()
        }
    };

    let gallery_teaser = match state
        .listing
        .fetch_page(&ListingQuery::gallery(upstream, 1))
        .await
    {
        Ok(response) => response
            .items()
            .iter()
            .take(3)
            .map(|item| NewsCard::from_listing(item, &upstream.waf_image_base, "/gallery"))
            .collect(),
        Err(e) => {
            tracing::warn!("Gallery teaser unavailable: {}", e);
            Vec::new()
        }
    };

    HtmlTemplate(HomeTemplate {
        nav: nav_items("/"),
        strip,
        map_svg_src,
        markers: marker_views(&markers, view_box.as_ref()),
        panel_country,
        panel_flag,
        panel_events,
        latest_news,
        gallery_teaser,
    })
}
