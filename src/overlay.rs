//! Detail popup state and the scroll lock it holds while open.

use ratatui::layout::{Position, Rect};

use crate::api::FeedItem;

/// Blocks grid scrolling while the detail popup is shown.
#[derive(Debug, Default)]
pub struct ScrollLock {
    locked: bool,
}

impl ScrollLock {
    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

#[derive(Debug, Default)]
pub struct Overlay {
    item: Option<FeedItem>,
    /// First body line shown in the popup.
    scroll: u16,
}

impl Overlay {
    /// Show `item`, replacing whatever was shown before.
    pub fn open(&mut self, item: FeedItem, lock: &mut ScrollLock) {
        self.item = Some(item);
        self.scroll = 0;
        lock.lock();
    }

    pub fn close(&mut self, lock: &mut ScrollLock) {
        self.item = None;
        self.scroll = 0;
        lock.unlock();
    }

    /// Move the popup body by `delta` lines, staying within `0..=max`.
    pub fn scroll_by(&mut self, delta: i32, max: u16) {
        let target = (self.scroll as i32 + delta).clamp(0, max as i32);
        self.scroll = target as u16;
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Handle a click while the popup is open. A click outside `bounds`
    /// dismisses it. Returns true if the popup was closed.
    pub fn click(&mut self, position: Position, bounds: Rect, lock: &mut ScrollLock) -> bool {
        if self.item.is_none() || bounds.contains(position) {
            return false;
        }
        self.close(lock);
        true
    }

    pub fn item(&self) -> Option<&FeedItem> {
        self.item.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.item.is_some()
    }
}
