use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::events::mapper::DEFAULT_IMAGE;

/// One asset from the upstream Sportz listing API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingItem {
    pub asset_id: i64,
    pub asset_title: String,
    #[serde(default)]
    pub title_alias: Option<String>,
    #[serde(default)]
    pub pri_ent_url: Option<String>,
    #[serde(default)]
    pub sec_ent_disp_name: Option<String>,
    #[serde(default)]
    pub published_date: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub image_file_name: Option<String>,
    #[serde(default)]
    pub image_data: Option<ListingImageData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingImageData {
    #[serde(default)]
    pub imagepath: Option<String>,
    #[serde(default)]
    pub image_file_name: Option<String>,
}

/// Upstream listing envelope. The API reports pagination under either
/// `content.pagination.total` or `meta.pagination.count` depending on the
/// asset type, so both are modelled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingResponse {
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default)]
    pub content: Option<ListingContent>,
    #[serde(default)]
    pub meta: Option<ListingMeta>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingContent {
    #[serde(default)]
    pub items: Option<Vec<ListingItem>>,
    #[serde(default)]
    pub pagination: Option<ContentPagination>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentPagination {
    #[serde(default)]
    pub total: Option<i64>,
    #[serde(default)]
    pub current_page: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingMeta {
    #[serde(default)]
    pub pagination: Option<MetaPagination>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetaPagination {
    #[serde(default)]
    pub count: Option<i64>,
    #[serde(default)]
    pub current_page: Option<i64>,
}

impl ListingResponse {
    pub fn items(&self) -> &[ListingItem] {
        self.content
            .as_ref()
            .and_then(|c| c.items.as_deref())
            .unwrap_or(&[])
    }

    pub fn total(&self) -> Option<i64> {
        self.content
            .as_ref()
            .and_then(|c| c.pagination.as_ref())
            .and_then(|p| p.total)
            .or_else(|| {
                self.meta
                    .as_ref()
                    .and_then(|m| m.pagination.as_ref())
                    .and_then(|p| p.count)
            })
    }
}

/// Card model shared by the news and gallery grids.
#[derive(Debug, Clone, Serialize)]
pub struct NewsCard {
    pub id: i64,
    pub title: String,
    pub image: String,
    pub category: String,
    pub date: Option<String>,
    pub href: String,
}

impl NewsCard {
    pub fn from_listing(item: &ListingItem, waf_base: &str, fallback_prefix: &str) -> Self {
        Self {
            id: item.asset_id,
            title: item.asset_title.clone(),
            image: item.waf_image_url(waf_base),
            category: item
                .sec_ent_disp_name
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "News".to_string()),
            date: item.published_label(),
            href: item.href(fallback_prefix),
        }
    }
}

impl ListingItem {
    /// Builds the upstream WAF image variant URL, e.g.
    /// `<base>/60/9b/35/16-9/<file>?v=3.27&w=600`. Image paths ending in
    /// `/0/` are the raw variant and get rewritten to the 16:9 crop.
    pub fn waf_image_url(&self, waf_base: &str) -> String {
        let path = self
            .image_data
            .as_ref()
            .and_then(|d| d.imagepath.as_deref())
            .filter(|p| !p.is_empty())
            .or(self.image_path.as_deref())
            .unwrap_or("");
        let file = self
            .image_data
            .as_ref()
            .and_then(|d| d.image_file_name.as_deref())
            .filter(|f| !f.is_empty())
            .or(self.image_file_name.as_deref())
            .unwrap_or("");

        if path.is_empty() || file.is_empty() {
            return DEFAULT_IMAGE.to_string();
        }

        let raw = path.trim_start_matches('/');
        let mut base = raw.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        if let Some(stripped) = base.strip_suffix("/0/") {
            base = format!("{}/16-9/", stripped);
        }

        format!("{}/{}{}?v=3.27&w=600", waf_base.trim_end_matches('/'), base, file)
    }

    /// Destination for the card link: the entity URL when present
    /// (absolute or normalized to root-relative), else a local detail route.
    pub fn href(&self, fallback_prefix: &str) -> String {
        if let Some(raw) = self.pri_ent_url.as_deref().filter(|u| !u.is_empty()) {
            if raw.starts_with("http://") || raw.starts_with("https://") {
                return raw.to_string();
            }
            if raw.starts_with('/') {
                return raw.to_string();
            }
            return format!("/{}", raw);
        }
        let slug = self
            .title_alias
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| self.asset_id.to_string());
        format!("{}/{}", fallback_prefix.trim_end_matches('/'), slug)
    }

    /// Short human date ("Jan 05, 2024") from the upstream publish
    /// timestamp; None when absent or unrecognizable.
    pub fn published_label(&self) -> Option<String> {
        let raw = self.published_date.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        let date = DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.date_naive())
            .or_else(|_| {
                NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date())
            })
            .or_else(|_| {
                NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date())
            })
            .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
            .ok()?;
        Some(date.format("%b %d, %Y").to_string())
    }
}
