/// Edge detector for the pagination sentinel's visibility.
///
/// Only a hidden to visible transition counts. Staying visible does nothing
/// until the sentinel is re-armed, which happens when new content moves it.
#[derive(Debug, Default)]
pub struct Sentinel {
    visible: bool,
}

impl Sentinel {
    /// Record a visibility sample. Returns true when the sentinel just came
    /// into view.
    pub fn observe(&mut self, visible: bool) -> bool {
        let entered = visible && !self.visible;
        self.visible = visible;
        entered
    }

    pub fn rearm(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_entry() {
        let mut sentinel = Sentinel::default();
        assert!(sentinel.observe(true));
        assert!(!sentinel.observe(true));
        assert!(!sentinel.observe(false));
        assert!(sentinel.observe(true));
    }

    #[test]
    fn rearm_allows_refire_while_visible() {
        let mut sentinel = Sentinel::default();
        assert!(sentinel.observe(true));
        sentinel.rearm();
        assert!(!sentinel.is_visible());
        assert!(sentinel.observe(true));
    }
}
