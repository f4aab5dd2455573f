pub mod client;
pub mod pager;

pub use client::{ListingClient, ListingQuery, SportzClient, UpstreamPayload};
pub use pager::ListingPager;
