//! Date-windowed loading of the picture feed.
//!
//! [`FeedLoader::update`] is the only way state changes: it takes the current
//! state plus one [`FeedEvent`] and hands back at most one [`FetchRequest`]
//! for the caller to execute.

mod sentinel;
mod window;

use chrono::NaiveDate;

use crate::api::{ApiError, FeedItem};

use sentinel::Sentinel;
pub use window::FeedWindow;

/// A response of exactly this many entries is the opening page: the
/// initial window's days plus the current post.
pub const FIRST_PAGE_LEN: usize = 29;

/// First date the APOD archive holds.
pub const ARCHIVE_START: NaiveDate = match NaiveDate::from_ymd_opt(1995, 6, 16) {
    Some(date) => date,
    None => panic!("invalid archive start"),
};

/// Whether a batch is the opening page, which carries the featured entry.
pub fn is_first_page(batch: &[FeedItem]) -> bool {
    batch.len() == FIRST_PAGE_LEN
}

/// A provider response, classified and reordered newest-first.
#[derive(Debug, PartialEq)]
pub enum Page {
    First {
        featured: FeedItem,
        items: Vec<FeedItem>,
    },
    More(Vec<FeedItem>),
}

impl Page {
    /// Classify a batch in the provider's ascending date order.
    pub fn classify(mut batch: Vec<FeedItem>) -> Self {
        if is_first_page(&batch)
            && let Some(featured) = batch.pop()
        {
            batch.reverse();
            return Page::First {
                featured,
                items: batch,
            };
        }
        batch.reverse();
        Page::More(batch)
    }
}

/// Accumulated feed content.
#[derive(Debug, Default)]
pub struct FeedState {
    /// Grid entries, newest first.
    pub items: Vec<FeedItem>,
    /// Most recent entry, shown above the grid.
    pub featured: Option<FeedItem>,
    pub loading: bool,
}

impl FeedState {
    fn merge(&mut self, page: Page) {
        match page {
            Page::First { featured, items } => {
                self.featured = Some(featured);
                self.items = items;
            }
            Page::More(items) => self.items.extend(items),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub id: u64,
    pub window: FeedWindow,
}

#[derive(Debug)]
pub enum FeedEvent {
    Mount,
    SentinelVisibility(bool),
    Loaded {
        request: u64,
        result: Result<Vec<FeedItem>, ApiError>,
    },
}

#[derive(Debug)]
pub struct FeedLoader {
    window: FeedWindow,
    state: FeedState,
    sentinel: Sentinel,
    in_flight: Option<FetchRequest>,
    next_request_id: u64,
    mounted: bool,
    exhausted: bool,
}

impl FeedLoader {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            window: FeedWindow::initial(today),
            state: FeedState::default(),
            sentinel: Sentinel::default(),
            in_flight: None,
            next_request_id: 0,
            mounted: false,
            exhausted: false,
        }
    }

    /// Loader already holding content, for view and app tests.
    #[cfg(test)]
    pub fn seeded(today: NaiveDate, items: Vec<FeedItem>, featured: Option<FeedItem>) -> Self {
        let mut loader = Self::new(today);
        loader.state.items = items;
        loader.state.featured = featured;
        loader
    }

    pub fn window(&self) -> FeedWindow {
        self.window
    }

    pub fn items(&self) -> &[FeedItem] {
        &self.state.items
    }

    pub fn featured(&self) -> Option<&FeedItem> {
        self.state.featured.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    /// True once the window has walked past the start of the archive.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn sentinel_visible(&self) -> bool {
        self.sentinel.is_visible()
    }

    pub fn in_flight(&self) -> Option<FetchRequest> {
        self.in_flight
    }

    pub fn update(&mut self, event: FeedEvent) -> Option<FetchRequest> {
        match event {
            FeedEvent::Mount => self.mount(),
            FeedEvent::SentinelVisibility(visible) => self.observe_sentinel(visible),
            FeedEvent::Loaded { request, result } => {
                self.complete(request, result);
                None
            }
        }
    }

    fn mount(&mut self) -> Option<FetchRequest> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        Some(self.begin_fetch())
    }

    fn observe_sentinel(&mut self, visible: bool) -> Option<FetchRequest> {
        // Nothing to paginate until the initial window has been requested.
        if !self.mounted {
            return None;
        }
        if !self.sentinel.observe(visible) || self.state.loading || self.exhausted {
            return None;
        }
        match self.window.advance().clamp_to(ARCHIVE_START) {
            Some(next) => {
                self.window = next;
                Some(self.begin_fetch())
            }
            None => {
                tracing::info!(window = %self.window, "reached start of archive");
                self.exhausted = true;
                None
            }
        }
    }

    fn begin_fetch(&mut self) -> FetchRequest {
        let request = FetchRequest {
            id: self.next_request_id,
            window: self.window,
        };
        self.next_request_id += 1;
        self.in_flight = Some(request);
        self.state.loading = true;
        request
    }

    fn complete(&mut self, request: u64, result: Result<Vec<FeedItem>, ApiError>) {
        let Some(current) = self.in_flight.filter(|r| r.id == request) else {
            tracing::warn!(request, "discarding stale feed response");
            return;
        };
        self.in_flight = None;
        self.state.loading = false;

        match result {
            Ok(batch) => {
                let count = batch.len();
                let page = Page::classify(batch);
                tracing::info!(
                    window = %current.window,
                    count,
                    first_page = matches!(page, Page::First { .. }),
                    "merged feed page"
                );
                self.state.merge(page);
                self.sentinel.rearm();
            }
            Err(err) => {
                tracing::error!(window = %current.window, error = %err, "feed fetch failed");
            }
        }
    }
}
