//! Help dialog
//!
//! Shows contextual keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(get_help_lines(app))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Get help lines for the current screen
fn get_help_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        section("Anywhere"),
        Line::from(""),
        key_line("Esc", "Go back one step"),
        key_line("F1", "Show/hide help"),
        key_line("Ctrl+c", "Quit without submitting"),
        Line::from(""),
    ];

    if app.session.position().branch().is_some() {
        lines.push(section("Recommendation"));
        lines.push(Line::from(""));
        lines.push(key_line("Enter/l", "Learn more"));
        lines.push(key_line("b", "Back to the question"));
    } else {
        lines.push(section("Options"));
        lines.push(Line::from(""));
        lines.push(key_line("j/k", "Move highlight up/down"));
        lines.push(key_line("1-9", "Choose option by number"));
        lines.push(key_line("Space", "Choose highlighted option"));
        lines.push(key_line("Enter", "Choose and continue"));
        lines.push(Line::from(""));
        lines.push(section("Text Fields"));
        lines.push(Line::from(""));
        lines.push(key_line("Tab", "Next field"));
        lines.push(key_line("Shift+Tab", "Previous field"));
        lines.push(key_line("Enter", "Continue, or submit on the last step"));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
