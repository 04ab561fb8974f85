use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::api::FeedItem;
use crate::app::App;
use crate::feed::ARCHIVE_START;
use crate::help::{detail_help, gallery_help};
use crate::keys::{detail_keymap, gallery_keymap, global_keymap};
use crate::layout::{CARD_HEIGHT, GridGeometry, ScreenLayout};
use crate::theme::ResolvedTheme;
use crate::views::common::{attribution_line, media_badge, media_lines};
use crate::views::spinner::spinner_frame;
use crate::views::status_bar::StatusBar;

pub fn render(frame: &mut Frame, app: &App, layout: &ScreenLayout) {
    render_header(frame, app, layout.header);
    render_featured(frame, app, layout.featured);
    render_grid(frame, app, layout);
    render_status_bar(frame, app, layout.status);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let mut spans = vec![Span::styled(
        " Astronomy Picture of the Day ",
        theme.heading_style(),
    )];
    if app.should_show_spinner() {
        spans.push(Span::styled(
            spinner_frame(app.loading_start),
            theme.spinner_style(),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_featured(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(" Latest ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(item) = app.feed.featured() else {
        let text = if app.feed.is_loading() {
            "Loading..."
        } else {
            "No featured picture"
        };
        frame.render_widget(Paragraph::new(text).style(theme.dim_style()), inner);
        return;
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(item.title.clone(), theme.featured_title_style()),
            Span::raw("  "),
            Span::styled(item.date_label(), theme.card_date_style()),
        ]),
        attribution_line(item, theme),
    ];
    lines.extend(media_lines(item, theme));
    lines.extend(
        textwrap::wrap(&item.explanation, inner.width.max(1) as usize)
            .into_iter()
            .map(|l| Line::styled(l.into_owned(), theme.explanation_style())),
    );

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_grid(frame: &mut Frame, app: &App, layout: &ScreenLayout) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(" Archive ");
    frame.render_widget(block, layout.grid);

    let geometry = layout.grid_geometry();
    for (index, item) in app.feed.items().iter().enumerate() {
        if let Some(rect) = geometry.card_rect(index, app.scroll_row) {
            render_card(frame, item, index == app.selected_index, theme, rect);
        }
    }

    render_sentinel(frame, app, &geometry);
}

fn render_card(
    frame: &mut Frame,
    item: &FeedItem,
    selected: bool,
    theme: &ResolvedTheme,
    area: Rect,
) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style());
    let mut title_style = theme.card_title_style();
    if selected {
        block = block
            .border_style(theme.heading_style())
            .style(theme.selection_style());
        title_style = title_style.add_modifier(Modifier::BOLD);
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::styled(item.short_title(), title_style),
        date_and_badge(item, inner.width as usize, theme),
        attribution_line(item, theme),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Date on the left, media marker flush right.
fn date_and_badge(item: &FeedItem, width: usize, theme: &ResolvedTheme) -> Line<'static> {
    let date = item.date_label();
    let used = date.as_str().width();
    let mut spans = vec![Span::styled(date, theme.card_date_style())];
    if let Some(badge) = media_badge(item, theme) {
        let gap = width.saturating_sub(used + badge.content.as_ref().width());
        spans.push(Span::raw(" ".repeat(gap)));
        spans.push(badge);
    }
    Line::from(spans)
}

/// The row after the last card. Its visibility drives pagination.
fn render_sentinel(frame: &mut Frame, app: &App, geometry: &GridGeometry) {
    let total_rows = geometry.total_rows(app.item_count());
    let Some(offset) = total_rows.checked_sub(app.scroll_row) else {
        return;
    };
    let y = geometry.inner.y as usize + offset * CARD_HEIGHT as usize;
    if y >= geometry.inner.bottom() as usize {
        return;
    }

    let theme = &app.theme;
    let line = if app.feed.is_loading() {
        Line::from(vec![
            Span::styled(spinner_frame(app.loading_start), theme.spinner_style()),
            Span::styled(" Loading more pictures...", theme.dim_style()),
        ])
    } else if app.feed.is_exhausted() {
        Line::styled(
            format!("Reached the start of the archive ({})", ARCHIVE_START),
            theme.dim_style(),
        )
    } else {
        Line::default()
    };

    let area = Rect::new(geometry.inner.x, y as u16, geometry.inner.width, 1);
    frame.render_widget(Paragraph::new(line).centered(), area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.overlay.is_open() {
        detail_help().format(&detail_keymap(), app.show_help)
    } else {
        let keymap = global_keymap().extend(gallery_keymap());
        gallery_help().format(&keymap, app.show_help)
    };

    let mut bar = StatusBar::new(&app.theme)
        .label("APOD")
        .position(app.selected_index + 1, app.item_count())
        .window(app.feed.window().to_string())
        .help(help_text);
    if app.feed.is_loading() {
        bar = bar.loading("Loading...");
    }
    bar.render(frame, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{FeedItemBuilder, TestAppBuilder, date, sample_items};
    use crate::views::tests::render_to_string;

    fn render_app(app: &App, width: u16, height: u16) -> String {
        render_to_string(width, height, |frame| {
            let layout = ScreenLayout::new(frame.area(), app.debug.visible);
            render(frame, app, &layout);
        })
    }

    #[test]
    fn test_gallery_renders_featured_and_cards() {
        let featured = FeedItemBuilder::new()
            .title("Comet over the Alps")
            .explanation("A bright comet hangs above snowy peaks.")
            .copyright("Jane Doe")
            .build();
        let app = TestAppBuilder::new()
            .featured(featured)
            .with_items(sample_items())
            .viewport(100, 30)
            .build();

        let output = render_app(&app, 100, 30);

        assert!(output.contains("Comet over the Alps"));
        assert!(output.contains("A bright comet hangs above snowy peaks."));
        assert!(output.contains("Jane Doe"));
        assert!(output.contains("The Horsehead Nebula"));
        assert!(output.contains("Total Solar Eclipse ov..."));
        assert!(output.contains("2024-05-28"));
        assert!(output.contains("1/6"));
    }

    #[test]
    fn test_cards_show_attribution_fallback() {
        let app = TestAppBuilder::new()
            .with_items(sample_items())
            .viewport(100, 30)
            .build();

        let output = render_app(&app, 100, 30);

        assert!(output.contains("Public domain"));
    }

    #[test]
    fn test_unknown_media_card_has_no_marker() {
        let item = FeedItemBuilder::new()
            .date(date(2024, 5, 25))
            .title("Interactive")
            .unknown_media()
            .build();
        let app = TestAppBuilder::new()
            .with_items(vec![item])
            .viewport(100, 30)
            .build();

        let output = render_app(&app, 100, 30);

        assert!(output.contains("Interactive"));
        assert!(!output.contains("[image]"));
        assert!(!output.contains("[video]"));
    }

    #[test]
    fn test_video_card_has_marker() {
        let app = TestAppBuilder::new()
            .with_items(sample_items())
            .viewport(100, 30)
            .build();

        let output = render_app(&app, 100, 30);

        assert!(output.contains("[video]"));
        assert!(output.contains("[image]"));
    }

    #[test]
    fn test_featured_explanation_is_not_truncated_on_narrow_terminal() {
        let mut text = "word ".repeat(72);
        text.push_str("FINALWORD");
        let featured = FeedItemBuilder::new().explanation(&text).build();
        let app = TestAppBuilder::new()
            .featured(featured)
            .viewport(100, 30)
            .build();

        let output = render_app(&app, 100, 30);

        assert!(output.contains("FINALWORD"));
    }

    #[test]
    fn test_initial_loading_state() {
        let app = TestAppBuilder::new().loading().viewport(100, 30).build();

        let output = render_app(&app, 100, 30);

        assert!(output.contains("Loading..."));
        assert!(output.contains("Loading more pictures"));
        assert!(output.contains("2024-05-02..2024-05-30"));
    }

    #[test]
    fn test_empty_gallery_after_failure() {
        let app = TestAppBuilder::new().viewport(100, 30).build();

        let output = render_app(&app, 100, 30);

        assert!(output.contains("No featured picture"));
        assert!(!output.contains("Loading"));
    }

    #[test]
    fn test_expanded_help() {
        let app = TestAppBuilder::new()
            .with_items(sample_items())
            .show_help()
            .viewport(160, 30)
            .build();

        let output = render_app(&app, 160, 30);

        assert!(output.contains("h/l:move"));
        assert!(output.contains("g/G:first/last"));
    }

    #[test]
    fn test_scrolled_grid_hides_first_row() {
        let items: Vec<_> = (1..=12)
            .rev()
            .map(|d| {
                FeedItemBuilder::new()
                    .date(date(2024, 5, d))
                    .title(&format!("Night {d}"))
                    .build()
            })
            .collect();
        let app = TestAppBuilder::new()
            .with_items(items)
            .viewport(100, 30)
            .scroll_row(1)
            .selected(3)
            .build();

        let output = render_app(&app, 100, 30);

        assert!(!output.contains("Night 12"));
        assert!(output.contains("Night 9"));
        assert!(output.contains("Night 1 "));
    }
}
