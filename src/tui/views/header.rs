//! Header and footer
//!
//! Branding shown above every screen, and the reassurance line below.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;

pub const HEADLINE: &str = "See how much your business is eligible for.";
pub const TAGLINE: &str = "Find out in minutes with our simplified application.";
pub const FOOTER: &str = "Applying is free and won't impact your credit score.";

/// Render the header
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", app.settings.brand_name),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(HEADLINE, Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(TAGLINE, Style::default().fg(Color::Gray))),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the footer
pub fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(FOOTER)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
