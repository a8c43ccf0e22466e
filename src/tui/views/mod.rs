//! TUI Views module
//!
//! Contains the screens of the wizard: the question panel, the branch
//! screens, the navigation bar and the surrounding chrome.

pub mod branch;
pub mod header;
pub mod nav;
pub mod status_bar;
pub mod step;

use ratatui::layout::Rect;
use ratatui::Frame;

use super::app::App;
use super::dialogs;
use super::layout::{toast_rect, AppLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    header::render_header(frame, app, layout.header);

    match app.session.position().branch() {
        Some(screen) => {
            let body = Rect::new(
                layout.main.x,
                layout.main.y,
                layout.main.width + layout.info.width,
                layout.main.height,
            );
            branch::render(frame, screen, body);
        }
        None => {
            if let Some(step) = app.session.current_step() {
                step::render(frame, app, step, layout.main);
                step::render_explanation(frame, step, layout.info);
            }
        }
    }

    nav::render(frame, app, layout.nav);
    header::render_footer(frame, layout.footer);
    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = app.notifications.current() {
        let area = toast_rect(44, 4, frame.area());
        frame.render_widget(NotificationWidget::new(notification), area);
    }

    if app.show_help {
        dialogs::help::render(frame, app);
    }
}
