//! Screen geometry shared by rendering and mouse hit-testing.

use ratatui::layout::{Constraint, Layout, Margin, Position, Rect};

pub const CARD_WIDTH: u16 = 30;
pub const CARD_HEIGHT: u16 = 5;
pub const FEATURED_HEIGHT: u16 = 10;
pub const DEBUG_HEIGHT: u16 = 10;
/// Terminals narrower than this use the compact presentation.
pub const WIDE_MIN_COLUMNS: u16 = 120;

pub fn is_compact(width: u16) -> bool {
    width < WIDE_MIN_COLUMNS
}

#[derive(Debug, Clone, Copy)]
pub struct ScreenLayout {
    pub header: Rect,
    pub featured: Rect,
    pub grid: Rect,
    pub status: Rect,
    pub debug: Option<Rect>,
}

impl ScreenLayout {
    pub fn new(area: Rect, debug_visible: bool) -> Self {
        let (main, debug) = if debug_visible {
            let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(DEBUG_HEIGHT)])
                .split(area);
            (chunks[0], Some(chunks[1]))
        } else {
            (area, None)
        };

        let chunks = Layout::vertical([
            Constraint::Length(1),               // Header
            Constraint::Length(FEATURED_HEIGHT), // Featured entry
            Constraint::Min(0),                  // Card grid
            Constraint::Length(1),               // Status bar
        ])
        .split(main);

        Self {
            header: chunks[0],
            featured: chunks[1],
            grid: chunks[2],
            status: chunks[3],
            debug,
        }
    }

    pub fn grid_geometry(&self) -> GridGeometry {
        GridGeometry::new(self.grid.inner(Margin::new(1, 1)))
    }
}

/// Card placement inside the grid block's inner area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub inner: Rect,
    pub columns: usize,
    pub visible_rows: usize,
}

impl GridGeometry {
    pub fn new(inner: Rect) -> Self {
        Self {
            inner,
            columns: (inner.width / CARD_WIDTH).max(1) as usize,
            visible_rows: (inner.height / CARD_HEIGHT) as usize,
        }
    }

    pub fn total_rows(&self, count: usize) -> usize {
        count.div_ceil(self.columns)
    }

    /// Rows past the bottom edge that still count as in view, 20% of the
    /// visible height rounded up.
    pub fn lookahead_rows(&self) -> usize {
        self.visible_rows.div_ceil(5)
    }

    /// The sentinel sits on the row after the last card row.
    pub fn sentinel_visible(&self, scroll_row: usize, count: usize) -> bool {
        self.total_rows(count) < scroll_row + self.visible_rows + self.lookahead_rows()
    }

    pub fn card_rect(&self, index: usize, scroll_row: usize) -> Option<Rect> {
        let row = index / self.columns;
        let col = index % self.columns;
        if row < scroll_row || row >= scroll_row + self.visible_rows {
            return None;
        }
        let y = self.inner.y + ((row - scroll_row) as u16) * CARD_HEIGHT;
        let x = self.inner.x + (col as u16) * CARD_WIDTH;
        Some(Rect::new(
            x,
            y,
            CARD_WIDTH.min(self.inner.right().saturating_sub(x)),
            CARD_HEIGHT,
        ))
    }

    pub fn card_at(&self, position: Position, scroll_row: usize, count: usize) -> Option<usize> {
        if !self.inner.contains(position) {
            return None;
        }
        let col = ((position.x - self.inner.x) / CARD_WIDTH) as usize;
        let row = ((position.y - self.inner.y) / CARD_HEIGHT) as usize;
        if col >= self.columns || row >= self.visible_rows {
            return None;
        }
        let index = (scroll_row + row) * self.columns + col;
        (index < count).then_some(index)
    }
}

/// Rectangle of the detail popup within `area`.
pub fn detail_rect(area: Rect) -> Rect {
    let percent = if is_compact(area.width) { 85 } else { 60 };
    let width = (area.width as u32 * percent / 100) as u16;
    let height = (area.height as u32 * 80 / 100) as u16;
    centered_rect(width, height, area)
}

pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
