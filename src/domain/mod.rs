pub mod event;
pub mod listing;

pub use event::{DisplayItem, EventStatus, RawEventRecord};
pub use listing::{ListingItem, ListingResponse, NewsCard};
