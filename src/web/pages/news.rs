use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    api::state::AppState,
    domain::NewsCard,
    listing::{ListingPager, ListingQuery},
    web::templates::{nav_items, HtmlTemplate, NavItem},
};

const PAGE_SIZE: u32 = 12;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
}

#[derive(Template)]
#[template(path = "news.html")]
pub struct NewsTemplate {
    pub nav: Vec<NavItem>,
    pub cards: Vec<NewsCard>,
    pub page: u32,
    pub has_prev: bool,
    pub has_next: bool,
}

pub async fn news_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> impl IntoResponse {
    let page = query.page.unwrap_or(1).max(1);
    let upstream = &state.settings.upstream;

    let mut pager = ListingPager::new();
    pager.begin(page);
    match state
        .listing
        .fetch_page(&ListingQuery::news(upstream, page))
        .await
    {
        Ok(response) => {
            pager.complete(page, &response);
        }
        Err(e) => {
            // Degrade to an empty grid rather than surfacing the upstream error.
            tracing::warn!("News listing unavailable: {}", e);
            pager.fail(page);
        }
    }

    let cards: Vec<NewsCard> = pager
        .items()
        .iter()
        .map(|item| NewsCard::from_listing(item, &upstream.waf_image_base, "/news"))
        .collect();
    let has_next = match pager.total() {
        Some(total) => i64::from(page) * i64::from(PAGE_SIZE) < total,
        None => pager.can_load_more(),
    };

    HtmlTemplate(NewsTemplate {
        nav: nav_items("/news"),
        cards,
        page,
        has_prev: page > 1,
        has_next,
    })
}

#[derive(Template)]
#[template(path = "news_detail.html")]
pub struct NewsDetailTemplate {
    pub nav: Vec<NavItem>,
    pub slug: String,
    pub title: String,
}

pub async fn news_detail_page(Path(slug): Path<String>) -> impl IntoResponse {
    // Article bodies live upstream; this shell page names the story and
    // links back to the listing.
    let title = slug
        .split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    HtmlTemplate(NewsDetailTemplate {
        nav: nav_items("/news"),
        slug,
        title,
    })
}
