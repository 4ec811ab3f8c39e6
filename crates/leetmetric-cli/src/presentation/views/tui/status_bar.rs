use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StatusBarViewModel;

use super::status_level_to_color;

/// Toast line on the left, key help and last update on the right
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
        let color = status_level_to_color(self.model.status_level);

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(inner);

        Paragraph::new(Span::styled(
            self.model.status_message.as_str(),
            Style::default().fg(color),
        ))
        .render(chunks[0], buf);

        let mut help = vec![
            Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
            Span::raw(" search "),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" quit"),
        ];
        if let Some(updated) = &self.model.updated_at {
            help.push(Span::styled(
                format!("  updated {}", updated),
                Style::default().fg(Color::DarkGray),
            ));
        }
        Paragraph::new(Line::from(help)).render(chunks[1], buf);
    }
}
