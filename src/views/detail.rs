use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};

use crate::api::FeedItem;
use crate::app::App;
use crate::layout::{detail_rect, is_compact};
use crate::theme::ResolvedTheme;
use crate::views::common::{attribution_line, media_lines};

/// Popup for the entry held by the overlay, drawn over a dimmed gallery.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(item) = app.overlay.item() else {
        return;
    };
    let theme = &app.theme;

    let buf = frame.buffer_mut();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = &mut buf[(x, y)];
            cell.set_style(cell.style().add_modifier(Modifier::DIM));
        }
    }

    let popup = detail_rect(area);
    frame.render_widget(Clear, popup);

    let mut block = popup_block(item, theme);
    let inner = block.inner(popup);
    let lines = body_lines(item, theme, inner.width, is_compact(area.width));
    let max = overflow(lines.len(), inner.height);
    let offset = app.overlay.scroll().min(max);
    if offset < max {
        block = block.title_bottom(Line::from(" more ").right_aligned());
    }
    frame.render_widget(block, popup);

    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), inner);
}

/// How far the popup body can scroll for `item` on a terminal of `area`.
pub fn scroll_limit(item: &FeedItem, theme: &ResolvedTheme, area: Rect) -> u16 {
    let inner = popup_block(item, theme).inner(detail_rect(area));
    let lines = body_lines(item, theme, inner.width, is_compact(area.width));
    overflow(lines.len(), inner.height)
}

/// Rows of body text visible at once for a terminal of `area`.
pub fn body_height(item: &FeedItem, theme: &ResolvedTheme, area: Rect) -> u16 {
    popup_block(item, theme).inner(detail_rect(area)).height
}

fn overflow(lines: usize, height: u16) -> u16 {
    lines.saturating_sub(height as usize).min(u16::MAX as usize) as u16
}

fn popup_block(item: &FeedItem, theme: &ResolvedTheme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme.heading_style())
        .title(format!(" {} ", item.date_label()))
        .padding(Padding::horizontal(1))
}

fn body_lines(
    item: &FeedItem,
    theme: &ResolvedTheme,
    width: u16,
    compact: bool,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(item.title.clone(), theme.featured_title_style())),
        attribution_line(item, theme),
    ];
    let media = media_lines(item, theme);
    if !media.is_empty() {
        lines.push(Line::default());
        lines.extend(media);
    }
    lines.push(Line::default());

    let explanation = item.explanation_for(compact);
    lines.extend(
        textwrap::wrap(&explanation, width.max(1) as usize)
            .into_iter()
            .map(|l| Line::styled(l.into_owned(), theme.explanation_style())),
    );
    lines
}
