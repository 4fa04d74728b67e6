//! Status Bar View Component
//!
//! Bottom row: the current address (or the address being typed) and the
//! key help.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::presentation::view_models::StatusBarViewModel;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::horizontal([Constraint::Min(20), Constraint::Length(50)]).split(area);
        let dim = Style::default().add_modifier(Modifier::DIM);
        let key = Style::default().fg(Color::Yellow);

        let left = match &self.model.input {
            Some(input) => Line::from(vec![
                Span::styled(":", key),
                Span::raw(input.clone()),
                Span::styled("▏", key),
            ]),
            None => {
                let arrow = |enabled: bool, glyph: &'static str| {
                    Span::styled(glyph, if enabled { Style::default() } else { dim })
                };
                Line::from(vec![
                    arrow(self.model.can_go_back, "◀"),
                    arrow(self.model.can_go_forward, "▶ "),
                    Span::styled(
                        self.model.title,
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(self.model.address.clone(), Style::default().fg(Color::Cyan)),
                    Span::styled(format!("  ({})", self.model.mode), dim),
                ])
            }
        };
        Paragraph::new(left).render(chunks[0], buf);

        let help = Line::from(vec![
            Span::styled("[q]", key),
            Span::raw("uit "),
            Span::styled("[tab]", key),
            Span::raw("focus "),
            Span::styled("[⏎]", key),
            Span::raw("open "),
            Span::styled("[:]", key),
            Span::raw("go "),
            Span::styled("[b/f]", key),
            Span::raw("history"),
        ]);
        Paragraph::new(help).render(chunks[1], buf);
    }
}
