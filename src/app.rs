use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use ratatui::layout::{Position, Rect};
use tokio::sync::mpsc;

use crate::api::{ApiError, ApodClient, FeedItem};
use crate::feed::{FeedEvent, FeedLoader, FetchRequest};
use crate::layout::{CARD_HEIGHT, CARD_WIDTH, GridGeometry, ScreenLayout, detail_rect};
use crate::overlay::{Overlay, ScrollLock};
use crate::theme::ResolvedTheme;
use crate::time::Clock;
use crate::views::detail;

pub enum AsyncResult {
    Page {
        request: u64,
        task_id: u64,
        result: Result<Vec<FeedItem>, ApiError>,
    },
}

#[derive(Debug)]
pub struct TaskInfo {
    pub id: u64,
    pub description: String,
    pub started_at: Instant,
}

#[derive(Debug)]
pub struct LogEntry {
    pub message: String,
}

/// Debug pane state: in-flight fetches and recent log lines.
#[derive(Debug, Default)]
pub struct DebugState {
    pub visible: bool,
    pub running_tasks: Vec<TaskInfo>,
    pub log: VecDeque<LogEntry>,
    next_task_id: u64,
}

impl DebugState {
    const MAX_LOG_ENTRIES: usize = 50;

    pub fn log(&mut self, msg: impl Into<String>) {
        self.log.push_back(LogEntry {
            message: msg.into(),
        });
        if self.log.len() > Self::MAX_LOG_ENTRIES {
            self.log.pop_front();
        }
    }

    pub fn start_task(&mut self, description: impl Into<String>) -> u64 {
        let id = self.next_task_id;
        self.next_task_id += 1;
        let description = description.into();
        self.log(format!("Started: {}", description));
        self.running_tasks.push(TaskInfo {
            id,
            description,
            started_at: Instant::now(),
        });
        id
    }

    pub fn end_task(&mut self, id: u64, outcome: &str) {
        if let Some(pos) = self.running_tasks.iter().position(|t| t.id == id) {
            let task = self.running_tasks.remove(pos);
            let elapsed = task.started_at.elapsed();
            self.log(format!("{} {}: {:.2?}", task.description, outcome, elapsed));
        }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    SelectNext,
    SelectPrev,
    SelectDown,
    SelectUp,
    SelectFirst,
    SelectLast,
    PageDown,
    PageUp,
    ScrollDown,
    ScrollUp,
    OpenSelected,
    OpenFeatured,
    CloseDetail,
    Click(u16, u16),
    OpenInBrowser,
    Resize(u16, u16),
    ToggleHelp,
    ToggleDebug,
    Quit,
}

impl Message {
    /// Messages that move the grid, ignored while the scroll lock is held.
    fn scrolls_grid(&self) -> bool {
        matches!(
            self,
            Message::SelectNext
                | Message::SelectPrev
                | Message::SelectDown
                | Message::SelectUp
                | Message::SelectFirst
                | Message::SelectLast
                | Message::PageDown
                | Message::PageUp
                | Message::ScrollDown
                | Message::ScrollUp
        )
    }
}

pub struct App {
    pub feed: FeedLoader,
    pub overlay: Overlay,
    pub scroll_lock: ScrollLock,
    pub selected_index: usize,
    /// First card row shown in the grid.
    pub scroll_row: usize,
    /// Full terminal area; unknown until the first resize.
    pub viewport: Option<Rect>,
    pub should_quit: bool,
    pub show_help: bool,
    pub client: ApodClient,
    pub theme: ResolvedTheme,
    pub clock: Arc<dyn Clock>,
    pub loading_start: Option<Instant>,
    // Async task management
    pub result_tx: mpsc::Sender<AsyncResult>,
    pub result_rx: mpsc::Receiver<AsyncResult>,
    pub debug: DebugState,
}

impl App {
    pub fn new(theme: ResolvedTheme, client: ApodClient, clock: Arc<dyn Clock>) -> Self {
        let (result_tx, result_rx) = mpsc::channel(10);
        Self {
            feed: FeedLoader::new(clock.today()),
            overlay: Overlay::default(),
            scroll_lock: ScrollLock::default(),
            selected_index: 0,
            scroll_row: 0,
            viewport: None,
            should_quit: false,
            show_help: false,
            client,
            theme,
            clock,
            loading_start: None,
            result_tx,
            result_rx,
            debug: DebugState::default(),
        }
    }

    /// Start the initial load. The sentinel is sampled straight away so a
    /// failed first page does not look like a fresh scroll to the bottom.
    pub fn mount(&mut self) {
        let request = self.feed.update(FeedEvent::Mount);
        self.dispatch(request);
        self.sync_sentinel();
    }

    pub fn handle_async_result(&mut self, result: AsyncResult) {
        match result {
            AsyncResult::Page {
                request,
                task_id,
                result,
            } => {
                let current = self.feed.in_flight().is_some_and(|r| r.id == request);
                let outcome = match (&result, current) {
                    (_, false) => "discarded (stale)",
                    (Ok(_), true) => "completed",
                    (Err(_), true) => "failed",
                };
                self.debug.end_task(task_id, outcome);
                if current && let Err(e) = &result {
                    self.debug.log(format!("Fetch failed: {}", e));
                }

                let next = self.feed.update(FeedEvent::Loaded { request, result });
                self.dispatch(next);
                self.clamp_selection();
                self.sync_sentinel();
            }
        }
    }

    pub fn update(&mut self, msg: Message) {
        if self.overlay.is_open() && self.scroll_detail(&msg) {
            return;
        }
        if self.scroll_lock.is_locked() && msg.scrolls_grid() {
            return;
        }

        match msg {
            Message::SelectNext => self.select(self.selected_index.saturating_add(1)),
            Message::SelectPrev => self.select(self.selected_index.saturating_sub(1)),
            Message::SelectDown => {
                let columns = self.geometry().columns;
                self.select(self.selected_index.saturating_add(columns));
            }
            Message::SelectUp => {
                let columns = self.geometry().columns;
                self.select(self.selected_index.saturating_sub(columns));
            }
            Message::SelectFirst => {
                self.select(0);
                self.scroll_row = 0;
            }
            Message::SelectLast => self.select(self.item_count().saturating_sub(1)),
            Message::PageDown => {
                let step = self.page_step();
                self.select(self.selected_index.saturating_add(step));
            }
            Message::PageUp => {
                let step = self.page_step();
                self.select(self.selected_index.saturating_sub(step));
            }
            Message::ScrollDown => self.scroll_by(1),
            Message::ScrollUp => self.scroll_by(-1),
            Message::OpenSelected => self.open_selected(),
            Message::OpenFeatured => self.open_featured(),
            Message::CloseDetail => self.overlay.close(&mut self.scroll_lock),
            Message::Click(column, row) => self.click(Position::new(column, row)),
            Message::OpenInBrowser => self.open_in_browser(),
            Message::Resize(width, height) => {
                self.viewport = Some(Rect::new(0, 0, width, height));
                self.clamp_selection();
            }
            Message::ToggleHelp => self.show_help = !self.show_help,
            Message::ToggleDebug => {
                self.debug.toggle();
                self.clamp_selection();
            }
            Message::Quit => self.should_quit = true,
        }

        self.sync_sentinel();
    }

    pub fn item_count(&self) -> usize {
        self.feed.items().len()
    }

    pub fn selected_item(&self) -> Option<&FeedItem> {
        self.feed.items().get(self.selected_index)
    }

    pub fn screen_layout(&self) -> Option<ScreenLayout> {
        self.viewport.map(|area| ScreenLayout::new(area, self.debug.visible))
    }

    /// Grid geometry for the current viewport. Before the first resize a
    /// single visible card is assumed.
    pub fn geometry(&self) -> GridGeometry {
        self.screen_layout()
            .map(|layout| layout.grid_geometry())
            .unwrap_or_else(|| GridGeometry::new(Rect::new(0, 0, CARD_WIDTH, CARD_HEIGHT)))
    }

    pub fn should_show_spinner(&self) -> bool {
        const MIN_SPINNER_DURATION: Duration = Duration::from_millis(500);
        self.feed.is_loading()
            || self
                .loading_start
                .is_some_and(|start| start.elapsed() < MIN_SPINNER_DURATION)
    }

    fn page_step(&self) -> usize {
        let geometry = self.geometry();
        geometry.columns * geometry.visible_rows.max(1)
    }

    fn select(&mut self, index: usize) {
        let count = self.item_count();
        if count == 0 {
            return;
        }
        self.selected_index = index.min(count - 1);
        self.scroll_to_selection();
    }

    fn scroll_to_selection(&mut self) {
        let geometry = self.geometry();
        let row = self.selected_index / geometry.columns;
        let visible = geometry.visible_rows.max(1);
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + visible {
            self.scroll_row = row + 1 - visible;
        }
    }

    /// Wheel scrolling may go one row past the last card so the sentinel
    /// row can be reached.
    fn max_scroll_row(&self) -> usize {
        let geometry = self.geometry();
        (geometry.total_rows(self.item_count()) + 1).saturating_sub(geometry.visible_rows.max(1))
    }

    fn scroll_by(&mut self, delta: isize) {
        let max = self.max_scroll_row();
        self.scroll_row = self.scroll_row.saturating_add_signed(delta).min(max);

        // Drag the selection along so it stays on screen.
        let geometry = self.geometry();
        let visible = geometry.visible_rows.max(1);
        let row = self.selected_index / geometry.columns;
        let col = self.selected_index % geometry.columns;
        let target_row = row.clamp(self.scroll_row, self.scroll_row + visible - 1);
        if target_row != row && self.item_count() > 0 {
            let index = (target_row * geometry.columns + col).min(self.item_count() - 1);
            self.selected_index = index;
        }
    }

    fn clamp_selection(&mut self) {
        let count = self.item_count();
        self.selected_index = self.selected_index.min(count.saturating_sub(1));
        self.scroll_row = self.scroll_row.min(self.max_scroll_row());
        if count > 0 {
            self.scroll_to_selection();
        }
    }

    /// Scroll the popup body. Returns false for messages it does not handle.
    fn scroll_detail(&mut self, msg: &Message) -> bool {
        let (Some(item), Some(area)) = (self.overlay.item(), self.viewport) else {
            return false;
        };
        let height = detail::body_height(item, &self.theme, area);
        let page = height.saturating_sub(1).max(1) as i32;
        let delta = match msg {
            Message::ScrollDown => 1,
            Message::ScrollUp => -1,
            Message::PageDown => page,
            Message::PageUp => -page,
            _ => return false,
        };
        let max = detail::scroll_limit(item, &self.theme, area);
        self.overlay.scroll_by(delta, max);
        true
    }

    fn open_selected(&mut self) {
        if let Some(item) = self.selected_item().cloned() {
            self.overlay.open(item, &mut self.scroll_lock);
        }
    }

    fn open_featured(&mut self) {
        if let Some(item) = self.feed.featured().cloned() {
            self.overlay.open(item, &mut self.scroll_lock);
        }
    }

    fn click(&mut self, position: Position) {
        let Some(area) = self.viewport else {
            return;
        };

        if self.overlay.is_open() {
            self.overlay.click(position, detail_rect(area), &mut self.scroll_lock);
            return;
        }

        let layout = ScreenLayout::new(area, self.debug.visible);
        let geometry = layout.grid_geometry();
        if let Some(index) = geometry.card_at(position, self.scroll_row, self.item_count()) {
            self.selected_index = index;
            self.open_selected();
        } else if layout.featured.contains(position) {
            self.open_featured();
        }
    }

    fn open_in_browser(&mut self) {
        let item = self.overlay.item().or_else(|| self.selected_item());
        let Some(url) = item.and_then(|i| i.media_url()).map(str::to_string) else {
            return;
        };
        if let Err(e) = open::that(&url) {
            tracing::warn!(%url, error = %e, "failed to open browser");
            self.debug.log(format!("Failed to open {}: {}", url, e));
        }
    }

    /// Feed the sentinel's current visibility to the loader.
    fn sync_sentinel(&mut self) {
        if self.viewport.is_none() {
            return;
        }
        let visible = self
            .geometry()
            .sentinel_visible(self.scroll_row, self.item_count());
        let request = self.feed.update(FeedEvent::SentinelVisibility(visible));
        self.dispatch(request);
    }

    fn dispatch(&mut self, request: Option<FetchRequest>) {
        if let Some(request) = request {
            self.spawn_fetch(request);
        }
    }

    fn spawn_fetch(&mut self, request: FetchRequest) {
        let client = self.client.clone();
        let tx = self.result_tx.clone();
        let task_id = self.debug.start_task(format!("Load {}", request.window));
        self.loading_start = Some(Instant::now());

        tokio::spawn(async move {
            let result = client.fetch_window(request.window).await;
            let _ = tx
                .send(AsyncResult::Page {
                    request: request.id,
                    task_id,
                    result,
                })
                .await;
        });
    }
}
