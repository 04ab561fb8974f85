mod builtin;
mod detect;
pub mod loader;

pub use builtin::{all_themes, by_name, default_for_variant};
pub use detect::detect_terminal_theme;
pub use loader::load_theme_file;

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    #[serde(default)]
    pub meta: ThemeMeta,
    pub colors: ThemeColors,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeMeta {
    pub author: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub variant: ThemeVariant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeColor {
    Named(String),
    Hex(String),
    Rgb { r: u8, g: u8, b: u8 },
    Indexed(u8),
}

impl ThemeColor {
    pub fn to_color(&self) -> Color {
        match self {
            ThemeColor::Named(name) if name.starts_with('#') => Self::parse_hex(name),
            ThemeColor::Named(name) => Self::parse_named(name),
            ThemeColor::Hex(hex) => Self::parse_hex(hex),
            ThemeColor::Rgb { r, g, b } => Color::Rgb(*r, *g, *b),
            ThemeColor::Indexed(idx) => Color::Indexed(*idx),
        }
    }

    fn parse_named(name: &str) -> Color {
        match name.to_lowercase().as_str() {
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "gray" | "grey" => Color::Gray,
            "darkgray" | "darkgrey" | "dark_gray" => Color::DarkGray,
            "lightred" | "light_red" => Color::LightRed,
            "lightgreen" | "light_green" => Color::LightGreen,
            "lightyellow" | "light_yellow" => Color::LightYellow,
            "lightblue" | "light_blue" => Color::LightBlue,
            "lightmagenta" | "light_magenta" => Color::LightMagenta,
            "lightcyan" | "light_cyan" => Color::LightCyan,
            "white" => Color::White,
            _ => Color::Reset,
        }
    }

    fn parse_hex(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6
            && let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            )
        {
            return Color::Rgb(r, g, b);
        }
        Color::Reset
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeColors {
    pub foreground: ThemeColor,
    pub foreground_dim: ThemeColor,
    pub border: ThemeColor,
    pub selection_bg: ThemeColor,
    pub primary: ThemeColor,
    pub error: ThemeColor,
    pub card_title: ThemeColor,
    pub card_date: ThemeColor,
    pub featured_title: ThemeColor,
    pub explanation: ThemeColor,
    pub attribution: ThemeColor,
    pub media_image: ThemeColor,
    pub media_video: ThemeColor,
    pub status_bar_bg: ThemeColor,
    pub status_bar_fg: ThemeColor,
    pub spinner: ThemeColor,
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct ResolvedTheme {
    pub name: String,
    pub variant: ThemeVariant,
    pub foreground: Color,
    pub foreground_dim: Color,
    pub border: Color,
    pub selection_bg: Color,
    pub primary: Color,
    pub error: Color,
    pub card_title: Color,
    pub card_date: Color,
    pub featured_title: Color,
    pub explanation: Color,
    pub attribution: Color,
    pub media_image: Color,
    pub media_video: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    pub spinner: Color,
}

impl ResolvedTheme {
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn selection_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dim_style(&self) -> Style {
        Style::default().fg(self.foreground_dim)
    }

    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn featured_title_style(&self) -> Style {
        Style::default()
            .fg(self.featured_title)
            .add_modifier(Modifier::BOLD)
    }

    pub fn card_title_style(&self) -> Style {
        Style::default().fg(self.card_title)
    }

    pub fn card_date_style(&self) -> Style {
        Style::default().fg(self.card_date)
    }

    pub fn explanation_style(&self) -> Style {
        Style::default().fg(self.explanation)
    }

    pub fn attribution_style(&self) -> Style {
        Style::default()
            .fg(self.attribution)
            .add_modifier(Modifier::BOLD)
    }

    pub fn media_style(&self, video: bool) -> Style {
        Style::default().fg(if video {
            self.media_video
        } else {
            self.media_image
        })
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn spinner_style(&self) -> Style {
        Style::default().fg(self.spinner)
    }

    pub fn status_bar_style(&self) -> Style {
        Style::default()
            .bg(self.status_bar_bg)
            .fg(self.status_bar_fg)
    }
}

impl From<Theme> for ResolvedTheme {
    fn from(theme: Theme) -> Self {
        let c = theme.colors;
        ResolvedTheme {
            name: theme.name,
            variant: theme.meta.variant,
            foreground: c.foreground.to_color(),
            foreground_dim: c.foreground_dim.to_color(),
            border: c.border.to_color(),
            selection_bg: c.selection_bg.to_color(),
            primary: c.primary.to_color(),
            error: c.error.to_color(),
            card_title: c.card_title.to_color(),
            card_date: c.card_date.to_color(),
            featured_title: c.featured_title.to_color(),
            explanation: c.explanation.to_color(),
            attribution: c.attribution.to_color(),
            media_image: c.media_image.to_color(),
            media_video: c.media_video.to_color(),
            status_bar_bg: c.status_bar_bg.to_color(),
            status_bar_fg: c.status_bar_fg.to_color(),
            spinner: c.spinner.to_color(),
        }
    }
}
