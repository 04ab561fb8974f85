use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::Theme;

pub fn load_theme_file(path: &Path) -> Result<Theme> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read theme file {}", path.display()))?;
    parse_theme(&content).with_context(|| format!("Invalid theme file {}", path.display()))
}

pub fn parse_theme(content: &str) -> Result<Theme> {
    toml::from_str(content).context("Failed to parse theme TOML")
}

pub fn theme_to_toml(theme: &Theme) -> Result<String> {
    toml::to_string_pretty(theme).context("Failed to serialize theme")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{ResolvedTheme, ThemeVariant, by_name};
    use ratatui::style::Color;
    use tempfile::TempDir;

    #[test]
    fn builtin_theme_round_trips_through_toml() {
        let theme = by_name("nord").unwrap();
        let toml = theme_to_toml(&theme).unwrap();
        let parsed = parse_theme(&toml).unwrap();

        assert_eq!(parsed.name, "nord");
        let resolved: ResolvedTheme = parsed.into();
        assert_eq!(resolved.primary, Color::Rgb(0x88, 0xC0, 0xD0));
    }

    #[test]
    fn load_custom_theme_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mine.toml");
        let mut theme = by_name("apod-night").unwrap();
        theme.name = "mine".to_string();
        theme.meta.variant = ThemeVariant::Light;
        fs::write(&path, theme_to_toml(&theme).unwrap()).unwrap();

        let loaded = load_theme_file(&path).unwrap();

        assert_eq!(loaded.name, "mine");
        assert_eq!(loaded.meta.variant, ThemeVariant::Light);
    }

    #[test]
    fn missing_colors_are_rejected() {
        let err = parse_theme("name = \"broken\"\n[colors]\nforeground = \"white\"\n");
        assert!(err.is_err());
    }
}
