use std::fmt;

use leetmetric_engine::StatsDisplay;

use crate::presentation::formatters::{Palette, format_timestamp, progress_bar};
use crate::presentation::view_models::{
    LookupEntryViewModel, LookupResultViewModel, StatusLevel, ViewMode,
};

const LABEL_WIDTH: usize = 14;
const BAR_WIDTH: usize = 10;

pub struct LookupResultView<'a> {
    data: &'a LookupResultViewModel,
    mode: ViewMode,
    palette: Palette,
}

impl<'a> LookupResultView<'a> {
    pub fn new(data: &'a LookupResultViewModel, mode: ViewMode, palette: Palette) -> Self {
        Self {
            data,
            mode,
            palette,
        }
    }

    // Successful lookups only: `<username> <total>`
    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for entry in &self.data.results {
            if let Some(stats) = &entry.stats {
                writeln!(f, "{} {}", entry.input.trim(), stats.total_solved)?;
            }
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for entry in &self.data.results {
            match &entry.stats {
                Some(stats) => {
                    let tiers = stats
                        .tiers
                        .iter()
                        .map(|t| {
                            let text = format!("{} {}", &t.tier.label()[..1], t.solved);
                            self.palette.tier(&text, t.tier)
                        })
                        .collect::<Vec<_>>()
                        .join(" · ");
                    writeln!(
                        f,
                        "{}  {} solved  {}",
                        self.palette.bold(entry.input.trim()),
                        stats.total_solved,
                        tiers
                    )?;
                }
                None => self.render_header(f, entry)?,
            }
        }
        Ok(())
    }

    fn render_detailed(&self, f: &mut fmt::Formatter, verbose: bool) -> fmt::Result {
        for (i, entry) in self.data.results.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            self.render_header(f, entry)?;

            if let Some(stats) = &entry.stats {
                self.render_stats(f, stats)?;
            }

            if verbose {
                if let Some(source) = entry.source {
                    self.render_row(f, "Source", source.as_str())?;
                }
                if let Some(ts) = &entry.retrieved_at {
                    self.render_row(f, "Retrieved", &format_timestamp(ts))?;
                }
            }
        }
        Ok(())
    }

    fn render_header(&self, f: &mut fmt::Formatter, entry: &LookupEntryViewModel) -> fmt::Result {
        let name = if entry.input.trim().is_empty() {
            "(empty)"
        } else {
            entry.input.trim()
        };

        match &entry.notice {
            Some(notice) => {
                let level = StatusLevel::from(notice.level);
                writeln!(
                    f,
                    "{}  {} {}",
                    self.palette.bold(name),
                    level.icon(),
                    self.palette.level(&notice.message, level)
                )
            }
            None => writeln!(f, "{}", self.palette.bold(name)),
        }
    }

    fn render_stats(&self, f: &mut fmt::Formatter, stats: &StatsDisplay) -> fmt::Result {
        self.render_row(
            f,
            "Total Solved",
            &self.palette.bold(&stats.total_solved.to_string()),
        )?;

        for tier in &stats.tiers {
            let count = match tier.available {
                Some(available) => format!("{} / {}", tier.solved, available),
                None => tier.solved.to_string(),
            };
            let label = format!("{:<width$}", tier.tier.label(), width = LABEL_WIDTH);
            writeln!(
                f,
                "  {}{:<12}{} {:>6}",
                self.palette.tier(&label, tier.tier),
                count,
                progress_bar(tier.percent, BAR_WIDTH),
                tier.percent_label
            )?;
        }

        self.render_row(f, "Acceptance", &stats.acceptance_label)?;
        self.render_row(f, "Ranking", &stats.ranking_label)
    }

    fn render_row(&self, f: &mut fmt::Formatter, label: &str, value: &str) -> fmt::Result {
        writeln!(
            f,
            "  {}{}",
            self.palette
                .dim(&format!("{:<width$}", label, width = LABEL_WIDTH)),
            value
        )
    }
}

impl<'a> fmt::Display for LookupResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_detailed(f, false),
            ViewMode::Verbose => self.render_detailed(f, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use leetmetric_engine::{present_error, present_stats};
    use leetmetric_runtime::{DisplayUpdate, Notice, Phase, Transition};
    use leetmetric_types::{LookupError, ProfileStats, Username};

    use crate::presentation::presenters::present_lookup_entry;

    fn sample() -> LookupResultViewModel {
        let now = Utc.with_ymd_and_hms(2025, 3, 9, 7, 5, 1).unwrap();

        let mut ranked = ProfileStats::with_counts(12, 8, 1);
        ranked.total_easy = Some(830);
        ranked.acceptance_rate = Some(61.25);
        ranked.ranking = Some(1234567);

        let ok = Transition {
            phase: Phase::Idle,
            notice: Some(Notice::fetched(&Username::new("busy_user"))),
            display: DisplayUpdate::Show(present_stats(&ranked)),
        };
        let missing = Transition {
            phase: Phase::Idle,
            notice: Some(Notice::failed(LookupError::UserNotFound)),
            display: DisplayUpdate::Clear(present_error(LookupError::UserNotFound)),
        };

        LookupResultViewModel {
            results: vec![
                present_lookup_entry("busy_user", &[ok], now),
                present_lookup_entry("ghost", &[missing], now),
            ],
        }
    }

    fn render(mode: ViewMode) -> String {
        let data = sample();
        LookupResultView::new(&data, mode, Palette::plain()).to_string()
    }

    #[test]
    fn test_standard_view() {
        insta::assert_snapshot!(render(ViewMode::Standard), @r"
        busy_user  ✅ Successfully fetched data for busy_user!
          Total Solved  21
          Easy          12 / 830    [██████░░░░]  57.1%
          Medium        8           [████░░░░░░]  38.1%
          Hard          1           [░░░░░░░░░░]   4.8%
          Acceptance    61.25%
          Ranking       #1,234,567

        ghost  ❌ User not found. Please check the username and try again.
        ");
    }

    #[test]
    fn test_compact_view() {
        insta::assert_snapshot!(render(ViewMode::Compact), @r"
        busy_user  21 solved  E 12 · M 8 · H 1
        ghost  ❌ User not found. Please check the username and try again.
        ");
    }

    #[test]
    fn test_minimal_view_lists_successes_only() {
        assert_eq!(render(ViewMode::Minimal), "busy_user 21\n");
    }

    #[test]
    fn test_verbose_view_adds_source_and_time() {
        let output = render(ViewMode::Verbose);
        assert!(output.contains("  Source        network\n"));
        assert!(output.contains("  Retrieved     2025-03-09T07:05:01Z\n"));
    }
}
