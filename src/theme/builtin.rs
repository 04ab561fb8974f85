use super::{ResolvedTheme, Theme, ThemeColor, ThemeColors, ThemeMeta, ThemeVariant};

pub fn all_themes() -> Vec<Theme> {
    vec![
        apod_night(),
        default_light(),
        monokai(),
        dracula(),
        nord(),
        tokyo_night(),
    ]
}

pub fn by_name(name: &str) -> Option<Theme> {
    all_themes().into_iter().find(|t| t.name == name)
}

pub fn default_for_variant(variant: ThemeVariant) -> ResolvedTheme {
    match variant {
        ThemeVariant::Dark => apod_night().into(),
        ThemeVariant::Light => default_light().into(),
    }
}

fn named(s: &str) -> ThemeColor {
    ThemeColor::Named(s.to_string())
}

fn hex(s: &str) -> ThemeColor {
    ThemeColor::Hex(s.to_string())
}

pub fn apod_night() -> Theme {
    Theme {
        name: "apod-night".to_string(),
        meta: ThemeMeta {
            author: Some("apod".to_string()),
            description: Some("Charcoal and starlight, the default dark theme".to_string()),
            variant: ThemeVariant::Dark,
        },
        colors: ThemeColors {
            foreground: named("white"),
            foreground_dim: hex("#8A8A8A"),
            border: hex("#4A4A4A"),
            selection_bg: hex("#383838"),
            primary: hex("#FC3D21"),
            error: named("red"),
            card_title: named("white"),
            card_date: hex("#8A8A8A"),
            featured_title: named("white"),
            explanation: hex("#D0D0D0"),
            attribution: hex("#F2C14E"),
            media_image: hex("#4FA3E0"),
            media_video: hex("#E06C75"),
            status_bar_bg: hex("#0B3D91"),
            status_bar_fg: named("white"),
            spinner: hex("#FC3D21"),
        },
    }
}

pub fn default_light() -> Theme {
    Theme {
        name: "default-light".to_string(),
        meta: ThemeMeta {
            author: Some("apod".to_string()),
            description: Some("Default light theme using terminal colors".to_string()),
            variant: ThemeVariant::Light,
        },
        colors: ThemeColors {
            foreground: named("black"),
            foreground_dim: named("darkgray"),
            border: named("darkgray"),
            selection_bg: named("lightblue"),
            primary: named("blue"),
            error: named("red"),
            card_title: named("black"),
            card_date: named("darkgray"),
            featured_title: named("black"),
            explanation: named("black"),
            attribution: named("magenta"),
            media_image: named("blue"),
            media_video: named("red"),
            status_bar_bg: named("blue"),
            status_bar_fg: named("white"),
            spinner: named("blue"),
        },
    }
}

pub fn monokai() -> Theme {
    Theme {
        name: "monokai".to_string(),
        meta: ThemeMeta {
            author: Some("apod".to_string()),
            description: Some("Classic Monokai dark theme".to_string()),
            variant: ThemeVariant::Dark,
        },
        colors: ThemeColors {
            foreground: hex("#F8F8F2"),
            foreground_dim: hex("#75715E"),
            border: hex("#75715E"),
            selection_bg: hex("#49483E"),
            primary: hex("#A6E22E"),
            error: hex("#F92672"),
            card_title: hex("#F8F8F2"),
            card_date: hex("#75715E"),
            featured_title: hex("#A6E22E"),
            explanation: hex("#F8F8F2"),
            attribution: hex("#E6DB74"),
            media_image: hex("#66D9EF"),
            media_video: hex("#FD971F"),
            status_bar_bg: hex("#A6E22E"),
            status_bar_fg: hex("#272822"),
            spinner: hex("#E6DB74"),
        },
    }
}

pub fn dracula() -> Theme {
    Theme {
        name: "dracula".to_string(),
        meta: ThemeMeta {
            author: Some("apod".to_string()),
            description: Some("Dracula dark theme".to_string()),
            variant: ThemeVariant::Dark,
        },
        colors: ThemeColors {
            foreground: hex("#F8F8F2"),
            foreground_dim: hex("#6272A4"),
            border: hex("#6272A4"),
            selection_bg: hex("#44475A"),
            primary: hex("#BD93F9"),
            error: hex("#FF5555"),
            card_title: hex("#F8F8F2"),
            card_date: hex("#6272A4"),
            featured_title: hex("#FF79C6"),
            explanation: hex("#F8F8F2"),
            attribution: hex("#F1FA8C"),
            media_image: hex("#8BE9FD"),
            media_video: hex("#FFB86C"),
            status_bar_bg: hex("#BD93F9"),
            status_bar_fg: hex("#282A36"),
            spinner: hex("#50FA7B"),
        },
    }
}

pub fn nord() -> Theme {
    Theme {
        name: "nord".to_string(),
        meta: ThemeMeta {
            author: Some("apod".to_string()),
            description: Some("Arctic, north-bluish color palette".to_string()),
            variant: ThemeVariant::Dark,
        },
        colors: ThemeColors {
            foreground: hex("#ECEFF4"),
            foreground_dim: hex("#4C566A"),
            border: hex("#4C566A"),
            selection_bg: hex("#3B4252"),
            primary: hex("#88C0D0"),
            error: hex("#BF616A"),
            card_title: hex("#ECEFF4"),
            card_date: hex("#4C566A"),
            featured_title: hex("#88C0D0"),
            explanation: hex("#D8DEE9"),
            attribution: hex("#EBCB8B"),
            media_image: hex("#81A1C1"),
            media_video: hex("#D08770"),
            status_bar_bg: hex("#5E81AC"),
            status_bar_fg: hex("#ECEFF4"),
            spinner: hex("#EBCB8B"),
        },
    }
}

pub fn tokyo_night() -> Theme {
    Theme {
        name: "tokyo-night".to_string(),
        meta: ThemeMeta {
            author: Some("apod".to_string()),
            description: Some("Tokyo Night dark theme".to_string()),
            variant: ThemeVariant::Dark,
        },
        colors: ThemeColors {
            foreground: hex("#A9B1D6"),
            foreground_dim: hex("#565F89"),
            border: hex("#565F89"),
            selection_bg: hex("#343B58"),
            primary: hex("#7AA2F7"),
            error: hex("#F7768E"),
            card_title: hex("#A9B1D6"),
            card_date: hex("#565F89"),
            featured_title: hex("#7AA2F7"),
            explanation: hex("#A9B1D6"),
            attribution: hex("#E0AF68"),
            media_image: hex("#7DCFFF"),
            media_video: hex("#BB9AF7"),
            status_bar_bg: hex("#7AA2F7"),
            status_bar_fg: hex("#1A1B26"),
            spinner: hex("#E0AF68"),
        },
    }
}
