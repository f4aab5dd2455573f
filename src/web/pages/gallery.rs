use askama::Template;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};

use crate::{
    api::state::AppState,
    domain::NewsCard,
    listing::{ListingPager, ListingQuery},
    web::pages::news::PageQuery,
    web::templates::{nav_items, HtmlTemplate, NavItem},
};

const PAGE_SIZE: u32 = 8;

#[derive(Template)]
#[template(path = "gallery.html")]
pub struct GalleryTemplate {
    pub nav: Vec<NavItem>,
    pub cards: Vec<NewsCard>,
    pub page: u32,
    pub has_prev: bool,
    pub has_next: bool,
}

pub async fn gallery_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> impl IntoResponse {
    let page = query.page.unwrap_or(1).max(1);
    let upstream = &state.settings.upstream;

    let mut pager = ListingPager::new();
    pager.begin(page);
    match state
        .listing
        .fetch_page(&ListingQuery::gallery(upstream, page))
        .await
    {
        Ok(response) => {
            pager.complete(page, &response);
        }
        Err(e) => {
            tracing::warn!("Gallery listing unavailable: {}", e);
            pager.fail(page);
        }
    }

    let cards: Vec<NewsCard> = pager
        .items()
        .iter()
        .map(|item| NewsCard::from_listing(item, &upstream.waf_image_base, "/gallery"))
        .collect();
    let has_next = match pager.total() {
        Some(total) => i64::from(page) * i64::from(PAGE_SIZE) < total,
        None => pager.can_load_more(),
    };

    HtmlTemplate(GalleryTemplate {
        nav: nav_items("/gallery"),
        cards,
        page,
        has_prev: page > 1,
        has_next,
    })
}
