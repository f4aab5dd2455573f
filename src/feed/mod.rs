use std::path::PathBuf;

use crate::domain::RawEventRecord;
use crate::error::{AppError, Result};

/// Source of raw event records. The site ships a JSON file; tests inject
/// in-memory fixtures.
pub trait EventFeed: Send + Sync {
    fn load(&self) -> Result<Vec<RawEventRecord>>;
}

/// Feed backed by a JSON file on disk, re-read per request so content
/// edits do not require a restart.
pub struct JsonFileEventFeed {
    path: PathBuf,
}

impl JsonFileEventFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EventFeed for JsonFileEventFeed {
    fn load(&self) -> Result<Vec<RawEventRecord>> {
        let bytes = std::fs::read(&self.path)
            .map_err(|e| AppError::Feed(format!("{}: {}", self.path.display(), e)))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| AppError::Feed(format!("{}: {}", self.path.display(), e)))
    }
}

/// Fixed in-memory feed, used by tests and available to embedding code.
pub struct StaticEventFeed {
    records: Vec<RawEventRecord>,
}

impl StaticEventFeed {
    pub fn new(records: Vec<RawEventRecord>) -> Self {
        Self { records }
    }
}

impl EventFeed for StaticEventFeed {
    fn load(&self) -> Result<Vec<RawEventRecord>> {
        Ok(self.records.clone())
    }
}
