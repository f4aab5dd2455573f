pub mod assets;
pub mod map;
pub mod mapper;

pub use assets::{AssetStore, AssumePresent, FsAssetStore};
pub use mapper::{classify_and_format, classify_and_format_at, classify_for_country, classify_for_country_at};
