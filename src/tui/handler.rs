//! Event handler for the TUI
//!
//! Routes keyboard events to the app depending on what is on screen: the
//! help overlay, a branch screen, an option list, or a text input.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.on_tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    // Any key closes help
    if app.show_help {
        app.show_help = false;
        return Ok(());
    }

    if key.code == KeyCode::F(1) {
        app.toggle_help();
        return Ok(());
    }

    if app.session.position().branch().is_some() {
        handle_branch_key(app, key);
    } else if app.is_editing() {
        handle_editing_key(app, key);
    } else {
        handle_list_key(app, key);
    }
    Ok(())
}

/// Keys on the credit card and credit repair screens
fn handle_branch_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('l') => app.branch_action(),
        KeyCode::Esc | KeyCode::Left | KeyCode::Backspace | KeyCode::Char('b') => {
            app.press_back()
        }
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('?') => app.toggle_help(),
        _ => {}
    }
}

/// Keys while an option list has focus
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Char(' ') => app.choose_highlighted(),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if let Some(number) = c.to_digit(10) {
                app.choose_number(number as usize);
            }
        }
        KeyCode::Enter => {
            app.choose_highlighted();
            // The month list hands over to the year input
            if app.text_fields().is_empty() {
                app.press_next();
            } else {
                app.focus_next();
            }
        }
        KeyCode::Right => app.press_next(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Esc | KeyCode::Left | KeyCode::Backspace | KeyCode::Char('b') => {
            app.press_back()
        }
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('?') => app.toggle_help(),
        _ => {}
    }
}

/// Keys while a text input has focus
fn handle_editing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.press_next(),
        KeyCode::Esc => app.press_back(),
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Backspace => app.edit_input(|input| input.backspace()),
        KeyCode::Delete => app.edit_input(|input| input.delete()),
        KeyCode::Left => app.edit_input(|input| input.move_left()),
        KeyCode::Right => app.edit_input(|input| input.move_right()),
        KeyCode::Home => app.edit_input(|input| input.move_start()),
        KeyCode::End => app.edit_input(|input| input.move_end()),
        KeyCode::Char(c) => app.edit_input(|input| input.insert(c)),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::{BranchScreen, FormField, Position};
    use crate::services::{MemorySubmitter, Submitter};
    use crate::wizard::WizardSession;

    fn app(settings: &Settings) -> App<'_> {
        let submitter: Box<dyn Submitter> = Box::new(MemorySubmitter::new());
        App::new(settings, WizardSession::new(settings, submitter))
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::from(code))).unwrap();
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_enter_chooses_and_advances() {
        let settings = Settings::default();
        let mut app = app(&settings);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.position(), Position::Step(1));
        assert_eq!(
            app.session.form().get(FormField::LoanAmount),
            Some("$50,001 - $100,000")
        );
    }

    #[test]
    fn test_date_step_keys() {
        let settings = Settings::default();
        let mut app = app(&settings);
        press(&mut app, KeyCode::Enter);

        // Enter on the month list moves to the year input
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Enter);
        assert!(app.is_editing());
        assert_eq!(app.session.form().get(FormField::StartMonth), Some("February"));

        // Letters go into the input rather than acting as commands
        type_str(&mut app, "2q19");
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Backspace);
        assert!(!app.should_quit);
        assert_eq!(app.session.form().get(FormField::StartYear), Some("219"));

        press(&mut app, KeyCode::Char('0'));
        assert_eq!(app.session.form().get(FormField::StartYear), Some("2019"));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.position(), Position::Step(2));
    }

    #[test]
    fn test_young_business_branch_keys() {
        let settings = Settings::default();
        let mut app = app(&settings);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "2999");
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.session.position(),
            Position::Branch(BranchScreen::CreditCardIntro)
        );

        press(&mut app, KeyCode::Char('l'));
        assert!(app.notifications.current().is_some());

        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.session.position(), Position::Step(1));
    }

    #[test]
    fn test_escape_goes_back_and_q_quits() {
        let settings = Settings::default();
        let mut app = app(&settings);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.session.position(), Position::Step(0));

        // Back on the first step stays put
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.session.position(), Position::Step(0));

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_toggle() {
        let settings = Settings::default();
        let mut app = app(&settings);

        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);

        press(&mut app, KeyCode::Enter);
        assert!(!app.show_help);
        assert_eq!(app.session.position(), Position::Step(0));
    }

    #[test]
    fn test_ctrl_c_quits_while_editing() {
        let settings = Settings::default();
        let mut app = app(&settings);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Tab);
        assert!(app.is_editing());

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        handle_event(&mut app, Event::Key(ctrl_c)).unwrap();
        assert!(app.should_quit);
    }
}
