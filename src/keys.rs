use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Message};

/// A declarative keybinding map that can be composed and extended.
#[derive(Clone)]
pub struct Keymap {
    bindings: Vec<(KeyCode, KeyModifiers, Message)>,
}

impl Keymap {
    pub const fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Add a key binding with no modifiers.
    pub fn bind(mut self, code: KeyCode, message: Message) -> Self {
        self.bindings.push((code, KeyModifiers::NONE, message));
        self
    }

    /// Add a key binding with Ctrl modifier.
    pub fn bind_ctrl(mut self, code: KeyCode, message: Message) -> Self {
        self.bindings.push((code, KeyModifiers::CONTROL, message));
        self
    }

    /// Look up a message for a key event.
    /// Later bindings take precedence over earlier ones.
    pub fn get(&self, event: &KeyEvent) -> Option<Message> {
        self.bindings
            .iter()
            .rev()
            .find(|(code, mods, _)| *code == event.code && event.modifiers.contains(*mods))
            .map(|(_, _, msg)| msg.clone())
    }

    /// Extend this keymap with another. The other keymap's bindings take precedence.
    pub fn extend(mut self, other: Self) -> Self {
        self.bindings.extend(other.bindings);
        self
    }

    /// Find the first key bound to a specific message.
    pub fn find_key(&self, message: &Message) -> Option<(KeyCode, KeyModifiers)> {
        self.bindings
            .iter()
            .find(|(_, _, msg)| msg == message)
            .map(|(code, mods, _)| (*code, *mods))
    }
}

/// Format a key binding for display in help text.
pub fn format_key(code: KeyCode, mods: KeyModifiers) -> String {
    let key_str = match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Backspace => "Bksp".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => "?".to_string(),
    };
    if mods.contains(KeyModifiers::CONTROL) {
        format!("C-{key_str}")
    } else if mods.contains(KeyModifiers::ALT) {
        format!("M-{key_str}")
    } else {
        key_str
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}

/// Global keybindings that work everywhere.
pub fn global_keymap() -> Keymap {
    Keymap::new()
        .bind(KeyCode::Char('q'), Message::Quit)
        .bind_ctrl(KeyCode::Char('c'), Message::Quit)
        .bind(KeyCode::Char('`'), Message::ToggleDebug)
}

/// Card grid keybindings. Left/right walk the grid in reading order,
/// up/down jump a whole row.
pub fn gallery_keymap() -> Keymap {
    Keymap::new()
        .bind(KeyCode::Char('l'), Message::SelectNext)
        .bind(KeyCode::Right, Message::SelectNext)
        .bind(KeyCode::Char('h'), Message::SelectPrev)
        .bind(KeyCode::Left, Message::SelectPrev)
        .bind(KeyCode::Char('j'), Message::SelectDown)
        .bind(KeyCode::Down, Message::SelectDown)
        .bind(KeyCode::Char('k'), Message::SelectUp)
        .bind(KeyCode::Up, Message::SelectUp)
        .bind(KeyCode::Char('g'), Message::SelectFirst)
        .bind(KeyCode::Char('G'), Message::SelectLast)
        .bind_ctrl(KeyCode::Char('d'), Message::PageDown)
        .bind_ctrl(KeyCode::Char('u'), Message::PageUp)
        .bind(KeyCode::Enter, Message::OpenSelected)
        .bind(KeyCode::Char('f'), Message::OpenFeatured)
        .bind(KeyCode::Char('o'), Message::OpenInBrowser)
        .bind(KeyCode::Char('?'), Message::ToggleHelp)
}

/// Keybindings while the detail popup is open. Movement keys scroll
/// the popup body.
pub fn detail_keymap() -> Keymap {
    Keymap::new()
        .bind(KeyCode::Char('j'), Message::ScrollDown)
        .bind(KeyCode::Down, Message::ScrollDown)
        .bind(KeyCode::Char('k'), Message::ScrollUp)
        .bind(KeyCode::Up, Message::ScrollUp)
        .bind_ctrl(KeyCode::Char('d'), Message::PageDown)
        .bind_ctrl(KeyCode::Char('u'), Message::PageUp)
        .bind(KeyCode::Esc, Message::CloseDetail)
        .bind(KeyCode::Char('q'), Message::CloseDetail)
        .bind(KeyCode::Enter, Message::CloseDetail)
        .bind(KeyCode::Char('o'), Message::OpenInBrowser)
        .bind(KeyCode::Char('`'), Message::ToggleDebug)
        .bind_ctrl(KeyCode::Char('c'), Message::Quit)
}

pub fn handle_key(key: KeyEvent, app: &App) -> Option<Message> {
    // The detail popup swallows everything else
    if app.overlay.is_open() {
        return detail_keymap().get(&key);
    }

    if let Some(msg) = global_keymap().get(&key) {
        return Some(msg);
    }

    gallery_keymap().get(&key)
}
