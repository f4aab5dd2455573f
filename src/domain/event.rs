use serde::{Deserialize, Serialize};

/// One record of the event feed, as shipped in `data/events.json`.
///
/// Date strings are kept verbatim: anything that is not a strict
/// `YYYY-MM-DD` (a bare year, an empty string) is treated as "no date" by
/// the classifier, never as an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEventRecord {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    pub title: String,
    #[serde(default)]
    pub city: Option<String>,
    pub country: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub news_button_text: Option<String>,
    #[serde(default)]
    pub news_link: Option<String>,
    #[serde(default)]
    pub flag: Option<String>,
}

/// Lifecycle bucket of an event relative to "today" at UTC midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Live,
    Previous,
}

impl EventStatus {
    /// Sort rank: live events lead the strip, previous ones trail it.
    pub fn rank(&self) -> u8 {
        match self {
            EventStatus::Live => 0,
            EventStatus::Upcoming => 1,
            EventStatus::Previous => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Live => "live",
            EventStatus::Previous => "previous",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "UPCOMING",
            EventStatus::Live => "LIVE",
            EventStatus::Previous => "PREVIOUS",
        }
    }
}

/// Display-ready event item produced by the classifier.
///
/// `id` is the 1-based position in the input list, assigned before sorting,
/// so reordering never changes identity. `cta_href` is omitted from the
/// serialized form entirely when the link is disabled.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayItem {
    pub id: usize,
    pub status: EventStatus,
    pub date_text: String,
    pub image_src: String,
    pub cta_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_href: Option<String>,
    pub disabled: bool,
    pub title: String,
    pub city: Option<String>,
    pub country: String,
    pub flag: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl DisplayItem {
    /// Flag image path for the country badge, when the record carries a
    /// flag id.
    pub fn flag_src(&self) -> Option<String> {
        let id = self.flag.as_deref()?.trim();
        if id.is_empty() {
            return None;
        }
        Some(format!("/static-assets/images/flags/{}.png", id))
    }
}
