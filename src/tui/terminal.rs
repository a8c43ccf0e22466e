//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::config::Settings;
use crate::error::WizardError;
use crate::models::Submission;

use super::app::{App, TuiSession};
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the wizard full-screen until the applicant quits
///
/// Returns the last submission made during the run, if any.
pub fn run_tui(settings: &Settings, session: TuiSession) -> Result<Option<Submission>> {
    let mut terminal = init_terminal()?;
    let mut app = App::new(settings, session);
    let events = EventHandler::new(settings.tick_rate());

    let result = event_loop(&mut terminal, &mut app, &events);

    restore_terminal()?;
    result?;

    Ok(app.submitted)
}

fn event_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        let event = events
            .next()
            .map_err(|_| WizardError::Tui("terminal event stream closed".into()))?;
        handle_event(app, event)?;

        if app.should_quit {
            return Ok(());
        }
    }
}
