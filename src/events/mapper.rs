//! Event classifier/formatter.
//!
//! Turns raw feed records into sorted, display-ready strip items: each gets
//! a lifecycle status relative to "today" (UTC), a formatted date label, a
//! resolved image path and a CTA. The home-page strip and the map panel
//! share this one routine so the two surfaces can never drift apart.

use std::cmp::Ordering;

use chrono::{Datelike, NaiveDate, Utc};

use crate::domain::{DisplayItem, EventStatus, RawEventRecord};
use crate::events::assets::AssetStore;

pub const DEFAULT_IMAGE: &str = "/images/common/default.webp";
pub const COMING_SOON: &str = "COMING SOON";

const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Strict `YYYY-MM-DD` parse. A bare year ("2025"), an empty string or any
/// other shape is "no date", never an error.
pub fn parse_feed_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// A link is disabled when it is absent, empty, `#`, or a `javascript:`
/// pseudo-URL.
pub fn is_disabled_link(link: Option<&str>) -> bool {
    match link {
        None => true,
        Some(raw) => {
            let trimmed = raw.trim();
            trimmed.is_empty()
                || trimmed == "#"
                || trimmed.to_ascii_lowercase().starts_with("javascript:")
        }
    }
}

fn date_parts(d: NaiveDate) -> (String, &'static str, i32) {
    let day = format!("{:02}", d.day());
    let mon = MONTHS[d.month0() as usize];
    (day, mon, d.year())
}

/// Human date label for an event window.
///
/// With no parsable bound the end value is shown verbatim when present
/// (a bare year like "2025"), else `COMING SOON`. Single parsable bound:
/// `"DD MON , YYYY"`. Both parsable: collapses to the tightest form that
/// still names both days.
pub fn date_label(start: Option<&str>, end: Option<&str>) -> String {
    let start_d = start.and_then(parse_feed_date);
    let end_d = end.and_then(parse_feed_date);

    match (start_d, end_d) {
        (None, None) => end
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| COMING_SOON.to_string()),
        (Some(d), None) | (None, Some(d)) => {
            let (day, mon, year) = date_parts(d);
            format!("{} {} , {}", day, mon, year)
        }
        (Some(s), Some(e)) => {
            let (s_day, s_mon, s_year) = date_parts(s);
            // Same literal string renders as a single date.
            if start == end {
                return format!("{} {} , {}", s_day, s_mon, s_year);
            }
            let (e_day, e_mon, e_year) = date_parts(e);
            if s_mon == e_mon && s_year == e_year {
                format!("{}-{} {} , {}", s_day, e_day, s_mon, s_year)
            } else if s_year == e_year {
                format!("{} {} - {} {} , {}", s_day, s_mon, e_day, e_mon, s_year)
            } else {
                format!(
                    "{} {} , {} - {} {} , {}",
                    s_day, s_mon, s_year, e_day, e_mon, e_year
                )
            }
        }
    }
}

/// Lifecycle status relative to `today` (a UTC calendar date). A single
/// parsable date stands in for both bounds; no parsable date at all is
/// optimistically `upcoming`.
pub fn pick_status(start: Option<&str>, end: Option<&str>, today: NaiveDate) -> EventStatus {
    let start_d = start.and_then(parse_feed_date);
    let end_d = end.and_then(parse_feed_date);

    let (s, e) = match (start_d, end_d) {
        (None, None) => return EventStatus::Upcoming,
        (Some(s), Some(e)) => (s, e),
        (Some(s), None) => (s, s),
        (None, Some(e)) => (e, e),
    };

    if today < s {
        EventStatus::Upcoming
    } else if today > e {
        EventStatus::Previous
    } else {
        EventStatus::Live
    }
}

fn resolve_image(url: Option<&str>, assets: &dyn AssetStore) -> String {
    let url = match url.filter(|u| !u.is_empty()) {
        Some(u) => u,
        None => return DEFAULT_IMAGE.to_string(),
    };
    // External URLs pass through unchecked; root-relative paths must exist
    // in the served assets.
    if !url.starts_with('/') {
        return url.to_string();
    }
    if assets.exists(url) {
        url.to_string()
    } else {
        DEFAULT_IMAGE.to_string()
    }
}

fn start_millis(record: &RawEventRecord) -> Option<i64> {
    let d = record.start_date.as_deref().and_then(parse_feed_date)?;
    Some(d.and_time(chrono::NaiveTime::MIN).and_utc().timestamp_millis())
}

fn map_record(
    record: &RawEventRecord,
    id: usize,
    today: NaiveDate,
    assets: &dyn AssetStore,
    force_coming_soon: bool,
) -> DisplayItem {
    let disabled = is_disabled_link(record.news_link.as_deref());
    let status = pick_status(record.start_date.as_deref(), record.end_date.as_deref(), today);
    let date_text = if force_coming_soon && disabled {
        COMING_SOON.to_string()
    } else {
        date_label(record.start_date.as_deref(), record.end_date.as_deref())
    };

    let cta_label = record
        .news_button_text
        .clone()
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| {
            if disabled {
                "News Coming Soon".to_string()
            } else {
                "See News".to_string()
            }
        });
    let cta_href = if disabled {
        None
    } else {
        record.news_link.clone().filter(|l| !l.is_empty())
    };

    DisplayItem {
        id,
        status,
        date_text,
        image_src: resolve_image(record.image_url.as_deref(), assets),
        cta_label,
        cta_href,
        disabled,
        title: record.title.clone(),
        city: record.city.clone(),
        country: record.country.clone(),
        flag: record.flag.clone(),
        start_date: record.start_date.clone(),
        end_date: record.end_date.clone(),
    }
}

/// Sort: live, then upcoming, then previous. Live/upcoming ascend by start
/// date (soonest first), previous descends (most recent first); items
/// without a parsable start date trail their group. The sort is stable so
/// ties keep input order.
fn sort_items(items: &mut [(DisplayItem, Option<i64>)]) {
    items.sort_by(|(a, a_ms), (b, b_ms)| {
        let by_rank = a.status.rank().cmp(&b.status.rank());
        if by_rank != Ordering::Equal {
            return by_rank;
        }
        match (a_ms, b_ms) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(x), Some(y)) => {
                if a.status == EventStatus::Previous {
                    y.cmp(x)
                } else {
                    x.cmp(y)
                }
            }
        }
    });
}

fn classify(
    records: &[RawEventRecord],
    today: NaiveDate,
    assets: &dyn AssetStore,
    force_coming_soon: bool,
) -> Vec<DisplayItem> {
    let mut mapped: Vec<(DisplayItem, Option<i64>)> = records
        .iter()
        .enumerate()
        .map(|(idx, r)| {
            (
                map_record(r, idx + 1, today, assets, force_coming_soon),
                start_millis(r),
            )
        })
        .collect();
    sort_items(&mut mapped);
    mapped.into_iter().map(|(item, _)| item).collect()
}

/// Strip-list mapping: one `DisplayItem` per record, sorted. In this
/// context a disabled link forces the date label to `COMING SOON`.
pub fn classify_and_format_at(
    records: &[RawEventRecord],
    today: NaiveDate,
    assets: &dyn AssetStore,
) -> Vec<DisplayItem> {
    classify(records, today, assets, true)
}

pub fn classify_and_format(records: &[RawEventRecord], assets: &dyn AssetStore) -> Vec<DisplayItem> {
    classify_and_format_at(records, Utc::now().date_naive(), assets)
}

/// Map-panel mapping: the subset matching `country` (case-insensitive,
/// trimmed), classified and sorted with the same rules as the strip but
/// without the disabled-link date override.
pub fn classify_for_country_at(
    records: &[RawEventRecord],
    country: &str,
    today: NaiveDate,
    assets: &dyn AssetStore,
) -> Vec<DisplayItem> {
    let wanted = country.trim().to_lowercase();
    let subset: Vec<RawEventRecord> = records
        .iter()
        .filter(|r| r.country.trim().to_lowercase() == wanted)
        .cloned()
        .collect();
    classify(&subset, today, assets, false)
}

pub fn classify_for_country(
    records: &[RawEventRecord],
    country: &str,
    assets: &dyn AssetStore,
) -> Vec<DisplayItem> {
    classify_for_country_at(records, country, Utc::now().date_naive(), assets)
}
