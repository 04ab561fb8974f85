//! Dynamic help text generation from keymaps.

use crate::app::Message;
use crate::keys::{Keymap, format_key};

/// A single help item representing one or more related actions.
pub struct HelpItem {
    /// Messages to look up keys for. Keys are joined with "/".
    messages: Vec<Message>,
    /// The label to show (e.g., "move", "details", "quit").
    label: &'static str,
}

impl HelpItem {
    /// Create a help item for a single action.
    pub fn new(message: Message, label: &'static str) -> Self {
        Self {
            messages: vec![message],
            label,
        }
    }

    /// Create a help item for paired actions (e.g., h/l for prev/next).
    pub fn pair(first: Message, second: Message, label: &'static str) -> Self {
        Self {
            messages: vec![first, second],
            label,
        }
    }

    /// Format this help item using the given keymap.
    /// Returns None if no keys are bound for any of the messages.
    pub fn format(&self, keymap: &Keymap) -> Option<String> {
        let keys: Vec<String> = self
            .messages
            .iter()
            .filter_map(|msg| {
                keymap
                    .find_key(msg)
                    .map(|(code, mods)| format_key(code, mods))
            })
            .collect();
        if keys.is_empty() {
            return None;
        }
        Some(format!("{}:{}", keys.join("/"), self.label))
    }
}

/// A collection of help items for a specific context.
pub struct HelpConfig {
    /// Items to show in expanded (full help) mode.
    pub expanded: Vec<HelpItem>,
    /// Items to show in compact (minimal) mode.
    pub compact: Vec<HelpItem>,
}

impl HelpConfig {
    /// Format help text for the given mode.
    pub fn format(&self, keymap: &Keymap, show_expanded: bool) -> String {
        let items = if show_expanded {
            &self.expanded
        } else {
            &self.compact
        };
        items
            .iter()
            .filter_map(|item| item.format(keymap))
            .collect::<Vec<_>>()
            .join("  ")
    }
}

/// Help configuration for the card grid.
pub fn gallery_help() -> HelpConfig {
    use Message::{
        OpenFeatured, OpenInBrowser, OpenSelected, PageDown, PageUp, Quit, SelectDown,
        SelectFirst, SelectLast, SelectNext, SelectPrev, SelectUp, ToggleDebug, ToggleHelp,
    };
    HelpConfig {
        expanded: vec![
            HelpItem::pair(SelectPrev, SelectNext, "move"),
            HelpItem::pair(SelectDown, SelectUp, "rows"),
            HelpItem::pair(SelectFirst, SelectLast, "first/last"),
            HelpItem::pair(PageDown, PageUp, "page"),
            HelpItem::new(OpenSelected, "details"),
            HelpItem::new(OpenFeatured, "featured"),
            HelpItem::new(OpenInBrowser, "open media"),
            HelpItem::new(ToggleDebug, "debug"),
            HelpItem::new(Quit, "quit"),
            HelpItem::new(ToggleHelp, "hide"),
        ],
        compact: vec![
            HelpItem::new(OpenSelected, "details"),
            HelpItem::new(OpenFeatured, "featured"),
            HelpItem::new(ToggleHelp, "help"),
            HelpItem::new(Quit, "quit"),
        ],
    }
}

/// Help configuration for the detail popup.
pub fn detail_help() -> HelpConfig {
    use Message::{CloseDetail, OpenInBrowser, ScrollDown, ScrollUp};
    HelpConfig {
        expanded: vec![
            HelpItem::pair(ScrollDown, ScrollUp, "scroll"),
            HelpItem::new(OpenInBrowser, "open media"),
            HelpItem::new(CloseDetail, "close"),
        ],
        compact: vec![
            HelpItem::new(OpenInBrowser, "open media"),
            HelpItem::new(CloseDetail, "close"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{detail_keymap, gallery_keymap, global_keymap};

    #[test]
    fn gallery_help_expanded_contains_expected_items() {
        let keymap = global_keymap().extend(gallery_keymap());
        let help = gallery_help().format(&keymap, true);
        assert!(help.contains("h/l:move"));
        assert!(help.contains("j/k:rows"));
        assert!(help.contains("g/G:first/last"));
        assert!(help.contains("C-d/C-u:page"));
        assert!(help.contains("Enter:details"));
        assert!(help.contains("q:quit"));
    }

    #[test]
    fn gallery_help_compact_is_shorter() {
        let keymap = global_keymap().extend(gallery_keymap());
        let expanded = gallery_help().format(&keymap, true);
        let compact = gallery_help().format(&keymap, false);
        assert!(compact.len() < expanded.len());
        assert!(compact.contains("?:help"));
    }

    #[test]
    fn detail_help_shows_close() {
        let help = detail_help().format(&detail_keymap(), false);
        assert_eq!(help, "o:open media  Esc:close");

        let expanded = detail_help().format(&detail_keymap(), true);
        assert!(expanded.starts_with("j/k:scroll"));
    }

    #[test]
    fn help_item_returns_none_for_unbound_message() {
        let keymap = Keymap::new(); // Empty keymap
        let item = HelpItem::new(Message::Quit, "quit");
        assert!(item.format(&keymap).is_none());
    }
}
