//! Inspection tool for the event feed: classifies a feed file exactly the
//! way the site will render it and prints the resulting strip.
//!
//! Usage: `events --feed data/events.json [--country Brazil] [--today 2024-06-15]`

use chrono::{NaiveDate, Utc};
use clap::Parser;

use granfondo::{
    events::{classify_and_format_at, classify_for_country_at, AssumePresent, FsAssetStore},
    feed::{EventFeed, JsonFileEventFeed},
};

#[derive(Parser, Debug)]
#[command(name = "events", about = "Classify and print the event feed")]
struct Args {
    /// Path to the events JSON feed
    #[arg(long, default_value = "data/events.json")]
    feed: String,

    /// Only show events for this country (map-panel view)
    #[arg(long)]
    country: Option<String>,

    /// Classify as of this date (YYYY-MM-DD) instead of today
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Public asset directory for image existence checks; skipped if unset
    #[arg(long)]
    public_dir: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let feed = JsonFileEventFeed::new(&args.feed);
    let records = feed.load()?;
    let today = args.today.unwrap_or_else(|| Utc::now().date_naive());

    let items = match (&args.country, &args.public_dir) {
        (Some(country), Some(dir)) => {
            classify_for_country_at(&records, country, today, &FsAssetStore::new(dir))
        }
        (Some(country), None) => {
            classify_for_country_at(&records, country, today, &AssumePresent)
        }
        (None, Some(dir)) => classify_and_format_at(&records, today, &FsAssetStore::new(dir)),
        (None, None) => classify_and_format_at(&records, today, &AssumePresent),
    };

    println!(
        "{} event(s) as of {} ({} record(s) in feed)",
        items.len(),
        today,
        records.len()
    );
    for item in &items {
        println!(
            "[{:>8}] {:<24} {:<28} {} -> {}",
            item.status.label(),
            item.date_text,
            item.title,
            item.country,
            item.cta_href.as_deref().unwrap_or("(no link)"),
        );
    }

    Ok(())
}
