use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::InputViewModel;

pub struct InputView<'a> {
    model: &'a InputViewModel,
}

impl<'a> InputView<'a> {
    pub fn new(model: &'a InputViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for InputView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (title, border) = if self.model.busy {
            (" Searching... ", Color::DarkGray)
        } else {
            (" LeetCode username ", Color::Cyan)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(title);

        let line = if self.model.text.is_empty() && !self.model.busy {
            Line::from(vec![
                Span::styled("▏", Style::default().fg(Color::Cyan)),
                Span::styled("e.g. busy_user", Style::default().fg(Color::DarkGray)),
            ])
        } else {
            Line::from(vec![
                Span::styled(
                    self.model.text.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled("▏", Style::default().fg(Color::Cyan)),
            ])
        };

        Paragraph::new(line).block(block).render(area, buf);
    }
}
