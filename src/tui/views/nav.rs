//! Navigation bar
//!
//! Back on the left, progress in the middle, Next or Submit on the right.
//! Next is dimmed while the current step is incomplete.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{Position, STEP_COUNT};
use crate::tui::app::App;

/// Progress text for a position
pub fn progress_label(position: Position) -> String {
    match position {
        Position::Step(index) => format!("Step {} of {}", index + 1, STEP_COUNT),
        Position::Branch(screen) => format!("Step {} of {}", screen.origin_step() + 1, STEP_COUNT),
    }
}

/// Render the navigation bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Min(10),
            Constraint::Length(12),
        ])
        .split(inner);

    let back_style = if app.session.can_go_back() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(
        Paragraph::new(Span::styled("[Esc] Back", back_style)),
        columns[0],
    );

    frame.render_widget(
        Paragraph::new(progress_label(app.session.position()))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center),
        columns[1],
    );

    // Branch screens have no Next
    if app.session.position().branch().is_none() {
        let next_style = if app.session.is_next_enabled() {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {} ", app.session.next_label()),
                next_style,
            ))
            .alignment(Alignment::Right),
            columns[2],
        );
    }
}
