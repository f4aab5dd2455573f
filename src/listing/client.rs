use async_trait::async_trait;

use crate::config::UpstreamConfig;
use crate::domain::ListingResponse;
use crate::error::{AppError, Result};

/// Normalized query against the upstream listing API. `otherent` and
/// `exclent` are always sent empty; the upstream requires them.
#[derive(Debug, Clone)]
pub struct ListingQuery {
    pub page: u32,
    pub page_size: u32,
    pub entities: String,
    pub inum: String,
}

impl ListingQuery {
    pub fn new(page: u32, page_size: u32, entities: &str, inum: &str) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
            entities: entities.to_string(),
            inum: inum.to_string(),
        }
    }

    /// News listing defaults (entities "1,4", page size 12).
    pub fn news(upstream: &UpstreamConfig, page: u32) -> Self {
        Self::new(page, 12, &upstream.news_entities, &upstream.inum)
    }

    /// Gallery listing defaults (entities "2,4", page size 8).
    pub fn gallery(upstream: &UpstreamConfig, page: u32) -> Self {
        Self::new(page, 8, &upstream.gallery_entities, &upstream.inum)
    }

    fn params(&self) -> [(&'static str, String); 6] {
        [
            ("entities", self.entities.clone()),
            ("otherent", String::new()),
            ("exclent", String::new()),
            ("pgnum", self.page.to_string()),
            ("inum", self.inum.clone()),
            ("pgsize", self.page_size.to_string()),
        ]
    }
}

/// Verbatim upstream response, relayed by the same-origin proxy.
#[derive(Debug, Clone)]
pub struct UpstreamPayload {
    pub status: u16,
    pub content_type: String,
    pub body: String,
}

#[async_trait]
pub trait ListingClient: Send + Sync {
    /// Fetches and deserializes a listing page.
    async fn fetch_page(&self, query: &ListingQuery) -> Result<ListingResponse>;

    /// Fetches a listing page without interpreting the body, for the proxy.
    async fn fetch_raw(&self, query: &ListingQuery) -> Result<UpstreamPayload>;
}

/// Client for the Sportz content API.
pub struct SportzClient {
    http: reqwest::Client,
    listing_url: String,
}

impl SportzClient {
    pub fn new(listing_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            listing_url,
        }
    }
}

#[async_trait]
impl ListingClient for SportzClient {
    async fn fetch_page(&self, query: &ListingQuery) -> Result<ListingResponse> {
        let response = self
            .http
            .get(&self.listing_url)
            .query(&query.params())
            .send()
            .await
            .map_err(|e| AppError::External(e.to_string()))?;

        response
            .json::<ListingResponse>()
            .await
            .map_err(|e| AppError::External(e.to_string()))
    }

    async fn fetch_raw(&self, query: &ListingQuery) -> Result<UpstreamPayload> {
        let response = self
            .http
            .get(&self.listing_url)
            .query(&query.params())
            .send()
            .await
            .map_err(|e| AppError::External(e.to_string()))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/json")
            .to_string();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::External(e.to_string()))?;

        Ok(UpstreamPayload {
            status,
            content_type,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_clamps_page_and_size() {
        let q = ListingQuery::new(0, 0, "1,4", "10");
        assert_eq!(q.page, 1);
        assert_eq!(q.page_size, 1);

        let params = q.params();
        assert!(params.contains(&("pgnum", "1".to_string())));
        assert!(params.contains(&("otherent", String::new())));
        assert!(params.contains(&("exclent", String::new())));
    }
}
