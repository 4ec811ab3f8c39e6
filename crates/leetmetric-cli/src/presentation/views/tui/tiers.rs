use leetmetric_engine::StatsDisplay;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::tier_to_color;

/// The three per-tier counters, side by side
pub struct TierCountersView<'a> {
    stats: &'a StatsDisplay,
}

impl<'a> TierCountersView<'a> {
    pub fn new(stats: &'a StatsDisplay) -> Self {
        Self { stats }
    }
}

impl<'a> Widget for TierCountersView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

        for (tier, column) in self.stats.tiers.iter().zip(columns.iter()) {
            let color = tier_to_color(tier.tier);

            let count = match tier.available {
                Some(available) => format!("{} / {}", tier.solved, available),
                None => tier.solved.to_string(),
            };

            let lines = vec![
                Line::from(Span::styled(
                    count,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
                Line::from(tier.percent_label.as_str()),
            ];

            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color))
                        .title(format!(" {} ", tier.tier.label())),
                )
                .render(*column, buf);
        }
    }
}
