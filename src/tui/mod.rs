//! Terminal User Interface module
//!
//! Full-screen rendition of the questionnaire using ratatui: one screen per
//! step with its explanation alongside, the two branch screens, and a
//! navigation bar that follows the completion gate.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::{App, TuiSession};
pub use terminal::run_tui;
