//! Test data builders for view and app testing.

use std::sync::Arc;

use chrono::{Days, NaiveDate};

use crate::api::{ApodClient, FeedItem, MediaKind};
use crate::app::App;
use crate::feed::{FeedEvent, FeedLoader};
use crate::theme::{ResolvedTheme, ThemeVariant, default_for_variant};
use crate::time::{Clock, fixed_clock};

/// Fixed timestamp for deterministic tests: 2024-06-01 12:00:00 UTC.
/// The initial window is therefore 2024-05-02..2024-05-30.
pub const TEST_NOW: i64 = 1717243200;

/// Nothing listens on the discard port, so stray fetches fail fast.
const UNREACHABLE_BASE_URL: &str = "http://127.0.0.1:9";

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// One image entry per day from `start` to `end` inclusive, oldest first,
/// the order the provider returns them in.
pub fn items_between(start: NaiveDate, end: NaiveDate) -> Vec<FeedItem> {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .map(|d| {
            FeedItemBuilder::new()
                .date(d)
                .title(&format!("Picture {}", d))
                .build()
        })
        .collect()
}

pub struct FeedItemBuilder {
    date: NaiveDate,
    title: String,
    explanation: String,
    media: MediaKind,
    url: String,
    hd_url: Option<String>,
    thumbnail_url: Option<String>,
    copyright: Option<String>,
}

impl Default for FeedItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl FeedItemBuilder {
    pub fn new() -> Self {
        Self {
            date: date(2024, 5, 30),
            title: "Test Picture".to_string(),
            explanation: "A test explanation.".to_string(),
            media: MediaKind::Image,
            url: "https://apod.nasa.gov/apod/image/test.jpg".to_string(),
            hd_url: None,
            thumbnail_url: None,
            copyright: None,
        }
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn explanation(mut self, explanation: &str) -> Self {
        self.explanation = explanation.to_string();
        self
    }

    pub fn copyright(mut self, copyright: &str) -> Self {
        self.copyright = Some(copyright.to_string());
        self
    }

    pub fn hd_url(mut self, url: &str) -> Self {
        self.hd_url = Some(url.to_string());
        self
    }

    pub fn thumbnail(mut self, url: &str) -> Self {
        self.thumbnail_url = Some(url.to_string());
        self
    }

    pub fn video(mut self, url: &str) -> Self {
        self.media = MediaKind::Video;
        self.url = url.to_string();
        self
    }

    pub fn unknown_media(mut self) -> Self {
        self.media = MediaKind::Unknown;
        self.url = String::new();
        self
    }

    pub fn build(self) -> FeedItem {
        FeedItem {
            date: self.date,
            title: self.title,
            explanation: self.explanation,
            media: self.media,
            url: self.url,
            hd_url: self.hd_url,
            thumbnail_url: self.thumbnail_url,
            copyright: self.copyright,
        }
    }
}

pub struct TestAppBuilder {
    items: Vec<FeedItem>,
    featured: Option<FeedItem>,
    selected_index: usize,
    scroll_row: usize,
    open_item: Option<FeedItem>,
    loading: bool,
    show_help: bool,
    show_debug: bool,
    viewport: Option<(u16, u16)>,
    client: ApodClient,
    theme: ResolvedTheme,
    clock: Arc<dyn Clock>,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            featured: None,
            selected_index: 0,
            scroll_row: 0,
            open_item: None,
            loading: false,
            show_help: false,
            show_debug: false,
            viewport: None,
            client: ApodClient::with_base_url(UNREACHABLE_BASE_URL, "test-key"),
            theme: default_for_variant(ThemeVariant::Dark),
            clock: fixed_clock(TEST_NOW),
        }
    }

    /// Grid entries, newest first.
    pub fn with_items(mut self, items: Vec<FeedItem>) -> Self {
        self.items = items;
        self
    }

    pub fn featured(mut self, item: FeedItem) -> Self {
        self.featured = Some(item);
        self
    }

    pub fn selected(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }

    pub fn scroll_row(mut self, row: usize) -> Self {
        self.scroll_row = row;
        self
    }

    pub fn open(mut self, item: FeedItem) -> Self {
        self.open_item = Some(item);
        self
    }

    /// Start the initial fetch without executing it.
    pub fn loading(mut self) -> Self {
        self.loading = true;
        self
    }

    pub fn show_help(mut self) -> Self {
        self.show_help = true;
        self
    }

    pub fn show_debug(mut self) -> Self {
        self.show_debug = true;
        self
    }

    pub fn viewport(mut self, width: u16, height: u16) -> Self {
        self.viewport = Some((width, height));
        self
    }

    pub fn client(mut self, client: ApodClient) -> Self {
        self.client = client;
        self
    }

    pub fn theme(mut self, theme: ResolvedTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn build(self) -> App {
        let mut app = App::new(self.theme, self.client, self.clock.clone());
        app.feed = FeedLoader::seeded(self.clock.today(), self.items, self.featured);
        if self.loading {
            let _ = app.feed.update(FeedEvent::Mount);
        }
        app.selected_index = self.selected_index;
        app.scroll_row = self.scroll_row;
        app.show_help = self.show_help;
        app.debug.visible = self.show_debug;
        app.viewport = self
            .viewport
            .map(|(width, height)| ratatui::layout::Rect::new(0, 0, width, height));
        if let Some(item) = self.open_item {
            app.overlay.open(item, &mut app.scroll_lock);
        }
        app
    }
}

/// Six recent entries, newest first, mixing media kinds and attributions.
pub fn sample_items() -> Vec<FeedItem> {
    let newest = date(2024, 5, 29);
    let day = |n: u64| newest.checked_sub_days(Days::new(n)).unwrap();
    vec![
        FeedItemBuilder::new()
            .date(day(0))
            .title("The Horsehead Nebula")
            .explanation("One of the most identifiable nebulae in the sky.")
            .copyright("Jane Doe")
            .hd_url("https://apod.nasa.gov/apod/image/horsehead_big.jpg")
            .build(),
        FeedItemBuilder::new()
            .date(day(1))
            .title("Total Solar Eclipse over Texas")
            .explanation("The Moon's shadow crossed North America.")
            .build(),
        FeedItemBuilder::new()
            .date(day(2))
            .title("Perseverance Selfie")
            .explanation("A rover pauses on the floor of Jezero crater.")
            .video("https://www.youtube.com/embed/abc123")
            .build(),
        FeedItemBuilder::new()
            .date(day(3))
            .title("Andromeda")
            .explanation("The nearest large spiral galaxy.")
            .copyright("Amateur Astronomers Inc.")
            .build(),
        FeedItemBuilder::new()
            .date(day(4))
            .title("An Interactive Sky")
            .explanation("This entry is not a picture.")
            .unknown_media()
            .build(),
        FeedItemBuilder::new()
            .date(day(5))
            .title("Aurora")
            .explanation("Curtains of light over Iceland.")
            .build(),
    ]
}
