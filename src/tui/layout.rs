//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: header, question panel with its
//! explanation, navigation bar, footer and status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Branding header
    pub header: Rect,
    /// Question or branch screen
    pub main: Rect,
    /// "Why we ask" panel beside the question
    pub info: Rect,
    /// Back / progress / Next
    pub nav: Rect,
    /// Footer line
    pub footer: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header
                Constraint::Min(8),    // Body
                Constraint::Length(3), // Navigation
                Constraint::Length(1), // Footer
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(vertical[1]);

        Self {
            header: vertical[0],
            main: body[0],
            info: body[1],
            nav: vertical[2],
            footer: vertical[3],
            status_bar: vertical[4],
        }
    }
}

/// Layout inside the question panel
pub struct QuestionLayout {
    /// Question text
    pub question: Rect,
    /// Options or inputs
    pub content: Rect,
    /// Fields still missing
    pub hint: Rect,
}

impl QuestionLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Question
                Constraint::Min(3),    // Content
                Constraint::Length(1), // Hint
            ])
            .split(area);

        Self {
            question: chunks[0],
            content: chunks[1],
            hint: chunks[2],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Rect of a toast in the top-right corner
pub fn toast_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(r.x + r.width - width, r.y, width, height)
}
