//! Status bar view
//!
//! Shows the status message, if any, and key hints for the current screen

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Key hints for what has focus
pub fn key_hints(app: &App) -> &'static str {
    if app.session.position().branch().is_some() {
        " Enter:Learn more  Esc:Back  q:Quit "
    } else if app.is_editing() {
        " Tab:Next field  Enter:Continue  Esc:Back  F1:Help "
    } else {
        " ↑↓:Move  Space:Choose  Enter:Continue  Esc:Back  ?:Help "
    }
}

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![];

    if let Some(ref message) = app.status_message {
        spans.push(Span::styled(
            format!(" {}", message),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = key_hints(app);

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
