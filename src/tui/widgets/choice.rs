//! Choice list widget
//!
//! Renders a list of options with a highlight cursor and a marker on the
//! option that is currently chosen.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A list of mutually exclusive options
pub struct ChoiceList<'a> {
    options: &'a [&'a str],
    highlighted: usize,
    selected: Option<&'a str>,
    focused: bool,
}

impl<'a> ChoiceList<'a> {
    pub fn new(options: &'a [&'a str]) -> Self {
        Self {
            options,
            highlighted: 0,
            selected: None,
            focused: true,
        }
    }

    /// Row under the cursor
    pub fn highlighted(mut self, index: usize) -> Self {
        self.highlighted = index;
        self
    }

    /// Option currently stored as the answer
    pub fn selected(mut self, value: Option<&'a str>) -> Self {
        self.selected = value;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for ChoiceList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Keep the highlighted row visible in short areas
        let visible = area.height as usize;
        let offset = if visible == 0 {
            0
        } else {
            self.highlighted.saturating_sub(visible - 1)
        };

        for (row, (index, option)) in self
            .options
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .enumerate()
        {
            let is_selected = self.selected == Some(*option);
            let is_highlighted = self.focused && index == self.highlighted;

            let marker = if is_selected { "(•) " } else { "( ) " };
            let style = if is_highlighted {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if is_selected {
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let line = Line::from(vec![
                Span::styled(marker, style),
                Span::styled(option.to_string(), style),
            ]);
            buf.set_line(area.x, area.y + row as u16, &line, area.width);
        }
    }
}
