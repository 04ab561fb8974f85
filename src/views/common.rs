use ratatui::text::{Line, Span};

use crate::api::{FeedItem, MediaKind};
use crate::theme::ResolvedTheme;

/// Short marker for an entry's media kind. Unknown kinds get none.
pub fn media_badge(item: &FeedItem, theme: &ResolvedTheme) -> Option<Span<'static>> {
    let label = item.media.label()?;
    Some(Span::styled(
        format!("[{}]", label),
        theme.media_style(item.media == MediaKind::Video),
    ))
}

/// The media panel body: kind and link, plus the still frame for videos.
/// Nothing for unknown kinds.
pub fn media_lines(item: &FeedItem, theme: &ResolvedTheme) -> Vec<Line<'static>> {
    let (Some(badge), Some(url)) = (media_badge(item, theme), item.media_url()) else {
        return Vec::new();
    };
    let mut lines = vec![Line::from(vec![
        badge,
        Span::raw(" "),
        Span::styled(url.to_string(), theme.dim_style()),
    ])];
    if item.media == MediaKind::Video
        && let Some(thumbnail) = &item.thumbnail_url
    {
        lines.push(Line::from(vec![
            Span::styled("still ", theme.dim_style()),
            Span::styled(thumbnail.clone(), theme.dim_style()),
        ]));
    }
    lines
}

pub fn attribution_line(item: &FeedItem, theme: &ResolvedTheme) -> Line<'static> {
    Line::from(vec![
        Span::styled("© ", theme.dim_style()),
        Span::styled(item.attribution().to_string(), theme.attribution_style()),
    ])
}
