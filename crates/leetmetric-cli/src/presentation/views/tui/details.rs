use leetmetric_engine::StatsDisplay;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};

use super::tier_to_color;

/// Detail panel: total, one gauge per tier, acceptance rate and rank
pub struct DetailsView<'a> {
    stats: &'a StatsDisplay,
}

impl<'a> DetailsView<'a> {
    pub fn new(stats: &'a StatsDisplay) -> Self {
        Self { stats }
    }
}

impl<'a> Widget for DetailsView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(" Details ");
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::vertical([
            Constraint::Length(1), // total
            Constraint::Length(1), // spacer
            Constraint::Length(1), // easy
            Constraint::Length(1), // medium
            Constraint::Length(1), // hard
            Constraint::Length(1), // spacer
            Constraint::Length(1), // acceptance + rank
            Constraint::Min(0),
        ])
        .split(inner);

        let label = Style::default().fg(Color::DarkGray);
        let value = Style::default().add_modifier(Modifier::BOLD);

        Paragraph::new(Line::from(vec![
            Span::styled("Total Solved  ", label),
            Span::styled(self.stats.total_solved.to_string(), value),
        ]))
        .render(rows[0], buf);

        for (tier, row) in self.stats.tiers.iter().zip(rows[2..5].iter()) {
            let color = tier_to_color(tier.tier);
            Gauge::default()
                .block(Block::default().style(Style::default().bg(Color::Rgb(40, 40, 40))))
                .gauge_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                .ratio((tier.percent / 100.0).clamp(0.0, 1.0))
                .label(format!(
                    "{} {} ({})",
                    tier.tier.label(),
                    tier.solved,
                    tier.percent_label
                ))
                .render(*row, buf);
        }

        Paragraph::new(Line::from(vec![
            Span::styled("Acceptance  ", label),
            Span::styled(self.stats.acceptance_label.as_str(), value),
            Span::raw("    "),
            Span::styled("Ranking  ", label),
            Span::styled(self.stats.ranking_label.as_str(), value),
        ]))
        .render(rows[6], buf);
    }
}
