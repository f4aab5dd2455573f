//! Same-origin proxy for the upstream Sportz listing API. Browsers cannot
//! call the upstream directly (no CORS there), so this endpoint relays the
//! response verbatim and adds permissive CORS headers of its own.

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::{api::state::AppState, listing::ListingQuery};

#[derive(Debug, Deserialize)]
pub struct ProxyParams {
    pub page: Option<u32>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<u32>,
    pub entities: Option<String>,
    pub inum: Option<String>,
}

/// Echo the request Origin when present (with `Vary: Origin` so caches keep
/// per-origin copies), else allow any.
fn cors_headers(request_headers: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::new();
    match request_headers.get(header::ORIGIN) {
        Some(origin) => {
            headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
            headers.insert(header::VARY, HeaderValue::from_static("Origin"));
        }
        None => {
            headers.insert(
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static("*"),
            );
        }
    }
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET,OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    headers
}

pub async fn preflight(headers: HeaderMap) -> Response {
    (StatusCode::NO_CONTENT, cors_headers(&headers)).into_response()
}

pub async fn proxy(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ProxyParams>,
) -> Response {
    let mut response_headers = cors_headers(&headers);
    let upstream_cfg = &state.settings.upstream;
    let query = ListingQuery::new(
        params.page.unwrap_or(1),
        params.page_size.unwrap_or(12),
        params
            .entities
            .as_deref()
            .unwrap_or(&upstream_cfg.news_entities),
        params.inum.as_deref().unwrap_or(&upstream_cfg.inum),
    );

    match state.listing.fetch_raw(&query).await {
        Ok(upstream) => {
            if let Ok(content_type) = HeaderValue::from_str(&upstream.content_type) {
                response_headers.insert(header::CONTENT_TYPE, content_type);
            }
            let status =
                StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, response_headers, upstream.body).into_response()
        }
        Err(e) => {
            tracing::error!("Listing proxy upstream failure: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                response_headers,
                Json(json!({
                    "message": "Failed to fetch Sportz listing",
                    "error": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}
