use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::theme::ResolvedTheme;

/// Builder for the one-line status bar under the grid.
///
/// Layout: `[Label] [Loading?] Position | Window | Help Text`
pub struct StatusBar<'a> {
    theme: &'a ResolvedTheme,
    label: &'a str,
    loading_text: Option<&'a str>,
    position: Option<(usize, usize)>,
    window: Option<String>,
    help_text: String,
}

impl<'a> StatusBar<'a> {
    pub fn new(theme: &'a ResolvedTheme) -> Self {
        Self {
            theme,
            label: "",
            loading_text: None,
            position: None,
            window: None,
            help_text: String::new(),
        }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }

    pub fn loading(mut self, text: &'a str) -> Self {
        self.loading_text = Some(text);
        self
    }

    /// 1-based position of the selection out of `total`. Omitted when empty.
    pub fn position(mut self, current: usize, total: usize) -> Self {
        if total > 0 {
            self.position = Some((current, total));
        }
        self
    }

    /// Date range covered so far.
    pub fn window(mut self, window: impl Into<String>) -> Self {
        self.window = Some(window.into());
        self
    }

    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.help_text = text.into();
        self
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let dim = self.theme.dim_style();
        let mut spans = vec![
            Span::styled(format!(" {} ", self.label), self.theme.status_bar_style()),
            Span::raw(" "),
        ];

        if let Some(loading) = self.loading_text {
            spans.push(Span::styled(loading.to_string(), self.theme.spinner_style()));
            spans.push(Span::raw(" | "));
        }

        if let Some((current, total)) = self.position {
            spans.push(Span::styled(format!("{}/{}", current, total), dim));
            spans.push(Span::raw(" | "));
        }

        if let Some(window) = self.window {
            spans.push(Span::styled(window, dim));
            spans.push(Span::raw(" | "));
        }

        spans.push(Span::styled(self.help_text, dim));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{ThemeVariant, default_for_variant};
    use crate::views::tests::render_to_string;

    #[test]
    fn test_status_bar_full() {
        let theme = default_for_variant(ThemeVariant::Dark);
        let output = render_to_string(80, 1, |frame| {
            StatusBar::new(&theme)
                .label("APOD")
                .position(5, 28)
                .window("2024-05-02..2024-05-30")
                .help("Enter:details  ?:help")
                .render(frame, frame.area());
        });

        assert!(output.contains("APOD"));
        assert!(output.contains("5/28"));
        assert!(output.contains("2024-05-02..2024-05-30"));
        assert!(output.contains("Enter:details"));
    }

    #[test]
    fn test_status_bar_with_loading() {
        let theme = default_for_variant(ThemeVariant::Dark);
        let output = render_to_string(60, 1, |frame| {
            StatusBar::new(&theme)
                .label("APOD")
                .loading("Loading...")
                .help("?:help")
                .render(frame, frame.area());
        });

        assert!(output.contains("Loading..."));
        assert!(output.contains("?:help"));
    }

    #[test]
    fn test_status_bar_hides_position_when_empty() {
        let theme = default_for_variant(ThemeVariant::Dark);
        let output = render_to_string(40, 1, |frame| {
            StatusBar::new(&theme)
                .label("APOD")
                .position(1, 0)
                .help("q:quit")
                .render(frame, frame.area());
        });

        assert!(!output.contains("1/0"));
        assert!(output.contains("q:quit"));
    }
}
