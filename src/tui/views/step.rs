//! Question view
//!
//! Renders the current step: an option list for select and credit score
//! steps, a month list with a year input for the start date, and four
//! inputs for contact details. The explanation goes in the side panel.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::{StepDefinition, StepKind};
use crate::tui::app::App;
use crate::tui::layout::QuestionLayout;
use crate::tui::widgets::ChoiceList;

/// Render the question panel
pub fn render(frame: &mut Frame, app: &App, step: &StepDefinition, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", step.title))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = QuestionLayout::new(inner);

    let question = Paragraph::new(step.question)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true });
    frame.render_widget(question, layout.question);

    match step.kind {
        StepKind::Select | StepKind::Fico => render_choices(frame, app, layout.content),
        StepKind::Date => render_date(frame, app, layout.content),
        StepKind::Contact => render_inputs(frame, app, layout.content),
    }

    render_missing(frame, app, layout.hint);
}

fn render_choices(frame: &mut Frame, app: &App, area: Rect) {
    let current = app.list_field().and_then(|field| app.session.form().get(field));
    let list = ChoiceList::new(app.list_options())
        .highlighted(app.choice_index)
        .selected(current)
        .focused(app.list_focused());
    frame.render_widget(list, area);
}

fn render_date(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(18), Constraint::Min(10)])
        .split(area);

    let month_block = Block::default()
        .title(" Month ")
        .borders(Borders::ALL)
        .border_style(focus_style(app.list_focused()));
    let month_area = month_block.inner(columns[0]);
    frame.render_widget(month_block, columns[0]);
    render_choices(frame, app, month_area);

    let year_block = Block::default()
        .title(" Year ")
        .borders(Borders::ALL)
        .border_style(focus_style(app.is_editing()));
    let year_area = year_block.inner(columns[1]);
    frame.render_widget(year_block, columns[1]);
    if let Some(input) = app.inputs.first() {
        let line = Rect::new(year_area.x, year_area.y, year_area.width, year_area.height.min(1));
        frame.render_widget(input, line);
    }
}

fn render_inputs(frame: &mut Frame, app: &App, area: Rect) {
    // One row per input with a blank line between
    for (i, input) in app.inputs.iter().enumerate() {
        let y = area.y + (i as u16) * 2;
        if y >= area.y + area.height {
            break;
        }
        frame.render_widget(input, Rect::new(area.x, y, area.width, 1));
    }
}

fn render_missing(frame: &mut Frame, app: &App, area: Rect) {
    if app.session.is_next_enabled() {
        return;
    }
    let missing: Vec<&str> = app
        .session
        .missing_fields()
        .iter()
        .map(|field| field.label())
        .collect();
    let hint = Line::from(vec![
        Span::styled("Still needed: ", Style::default().fg(Color::DarkGray)),
        Span::styled(missing.join(", "), Style::default().fg(Color::Yellow)),
    ]);
    frame.render_widget(Paragraph::new(hint), area);
}

/// Render the "Why we ask" panel
pub fn render_explanation(frame: &mut Frame, step: &StepDefinition, area: Rect) {
    let block = Block::default()
        .title(" Why we ask ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(step.explanation)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, area);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
