//! Terminal driver for the interactive lookup screen.
//!
//! Owns the terminal (raw mode + alternate screen) and paints a
//! `TuiScreenViewModel` per frame. It holds no lookup state; the handler
//! decides what each frame contains.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};

use crate::presentation::view_models::TuiScreenViewModel;
use crate::presentation::views::tui::{DetailsView, InputView, StatusBarView, TierCountersView};

pub struct TuiRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    restored: bool,
}

impl TuiRenderer {
    /// Enter raw mode and the alternate screen
    pub fn start() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            restored: false,
        })
    }

    pub fn draw(&mut self, screen: &TuiScreenViewModel) -> Result<()> {
        self.terminal.draw(|f| render(f, screen))?;
        Ok(())
    }

    /// Drain pending key presses without blocking
    pub fn pending_keys(&self) -> Result<Vec<KeyEvent>> {
        let mut keys = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                keys.push(key);
            }
        }
        Ok(keys)
    }

    /// Leave the alternate screen; safe to call more than once
    pub fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TuiRenderer {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

fn render(f: &mut Frame, screen: &TuiScreenViewModel) {
    // [input | tier counters | details | status bar]
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(4),
        Constraint::Min(9),
        Constraint::Length(3),
    ])
    .split(f.area());

    f.render_widget(InputView::new(&screen.input), chunks[0]);
    f.render_widget(TierCountersView::new(&screen.stats), chunks[1]);
    f.render_widget(DetailsView::new(&screen.stats), chunks[2]);
    f.render_widget(StatusBarView::new(&screen.status_bar), chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_screen;
    use leetmetric_engine::present_stats;
    use leetmetric_runtime::Phase;
    use leetmetric_types::ProfileStats;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_screen_shows_counts_and_percentages() {
        let stats = present_stats(&ProfileStats::with_counts(12, 8, 1));
        let screen = present_screen("busy_user", &Phase::Idle, None, &stats, None, 0);

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| render(f, &screen)).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();

        assert!(text.contains("busy_user"));
        assert!(text.contains("Total Solved  21"));
        assert!(text.contains("57.1%"));
        assert!(text.contains("38.1%"));
        assert!(text.contains("4.8%"));
        assert!(text.contains("Ranking  N/A"));
    }
}
