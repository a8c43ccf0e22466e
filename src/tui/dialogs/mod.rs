//! Dialog modules for the TUI
//!
//! Contains modal overlays

pub mod help;
