use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let dim = theme.dim_style();

    let block = Block::default()
        .title(" Debug ")
        .borders(Borders::ALL)
        .border_style(dim);

    let mut lines = Vec::new();

    // Loader state
    let sentinel = if app.feed.sentinel_visible() {
        "visible"
    } else {
        "hidden"
    };
    let window = app.feed.window();
    let mut state = vec![
        Span::styled("Today: ", dim),
        Span::styled(
            app.clock.today().to_string(),
            Style::default().fg(theme.foreground),
        ),
        Span::styled("  Window: ", dim),
        Span::styled(
            format!("{} ({} days)", window, window.days()),
            Style::default().fg(theme.foreground),
        ),
        Span::styled("  Sentinel: ", dim),
        Span::styled(sentinel, Style::default().fg(theme.foreground)),
        Span::styled("  Items: ", dim),
        Span::styled(
            app.item_count().to_string(),
            Style::default().fg(theme.foreground),
        ),
    ];
    if app.feed.is_exhausted() {
        state.push(Span::styled("  (archive exhausted)", dim));
    }
    lines.push(Line::from(state));

    // Running tasks
    let task_count = app.debug.running_tasks.len();
    lines.push(Line::from(vec![
        Span::styled("Tasks: ", dim),
        Span::styled(
            task_count.to_string(),
            if task_count > 0 {
                theme.spinner_style()
            } else {
                Style::default().fg(theme.foreground)
            },
        ),
    ]));

    for task in &app.debug.running_tasks {
        lines.push(Line::from(vec![
            Span::styled(format!("  [{}] ", task.id), dim),
            Span::styled(&task.description, Style::default().fg(theme.foreground)),
            Span::styled(format!(" ({:.1?})", task.started_at.elapsed()), dim),
        ]));
    }

    // Recent log entries, newest first
    let available = area.height.saturating_sub(2) as usize;
    let log_lines = available.saturating_sub(lines.len());
    for entry in app.debug.log.iter().rev().take(log_lines) {
        lines.push(Line::styled(format!("  {}", entry.message), dim));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
