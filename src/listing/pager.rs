use std::collections::HashSet;

use crate::domain::{ListingItem, ListingResponse};

/// Accumulates listing pages the way the "load more" grids do: pages are
/// merged in order, duplicates (by asset id) are dropped, and the pager
/// tracks whether another page is worth requesting.
///
/// Only one load may be in flight at a time; a response for a page that is
/// no longer the pending one is ignored rather than merged.
#[derive(Debug)]
pub struct ListingPager {
    items: Vec<ListingItem>,
    seen: HashSet<i64>,
    total: Option<i64>,
    has_more: bool,
    last_page: u32,
    pending_page: Option<u32>,
}

impl ListingPager {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            seen: HashSet::new(),
            total: None,
            has_more: true,
            last_page: 0,
            pending_page: None,
        }
    }

    pub fn items(&self) -> &[ListingItem] {
        &self.items
    }

    pub fn total(&self) -> Option<i64> {
        self.total
    }

    pub fn last_page(&self) -> u32 {
        self.last_page
    }

    pub fn next_page(&self) -> u32 {
        self.last_page + 1
    }

    /// True when another page may yield new items: the last page was
    /// non-empty and the known total (if any) is not yet reached.
    pub fn can_load_more(&self) -> bool {
        self.has_more
            && self
                .total
                .map_or(true, |t| (self.items.len() as i64) < t)
    }

    /// Marks a load as started. Returns false (and changes nothing) when a
    /// load is already in flight.
    pub fn begin(&mut self, page: u32) -> bool {
        if self.pending_page.is_some() {
            return false;
        }
        self.pending_page = Some(page);
        true
    }

    /// Merges a completed page. Returns the number of new items kept.
    /// Responses for a page other than the pending one are stale and are
    /// ignored.
    pub fn complete(&mut self, page: u32, response: &ListingResponse) -> usize {
        if self.pending_page != Some(page) {
            return 0;
        }
        self.pending_page = None;
        self.last_page = page;

        let incoming = response.items();
        let mut added = 0;
        for item in incoming {
            if self.seen.insert(item.asset_id) {
                self.items.push(item.clone());
                added += 1;
            }
        }

        if let Some(total) = response.total() {
            self.total = Some(total);
        }
        self.has_more = !incoming.is_empty();
        added
    }

    /// Records a failed load: the list is unchanged and pagination stops.
    pub fn fail(&mut self, page: u32) {
        if self.pending_page != Some(page) {
            return;
        }
        self.pending_page = None;
        self.has_more = false;
    }
}

impl Default for ListingPager {
    fn default() -> Self {
        Self::new()
    }
}
