//! Converts profile payloads into the display model consumed by views.
//!
//! The display model carries both raw numbers (for JSON consumers) and the
//! ready-made labels every view shows verbatim: one-decimal tier percentages,
//! `#`-prefixed rank with thousands separators, acceptance rate with a
//! trailing percent sign, and `N/A` for absent values.

use leetmetric_types::{LookupError, ProfileStats, Tier};
use serde::Serialize;

const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierDisplay {
    pub tier: Tier,
    pub solved: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<u64>,
    /// Share of total solved, rounded to one decimal place
    pub percent: f64,
    pub percent_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsDisplay {
    pub total_solved: u64,
    /// Always three entries in Easy, Medium, Hard order
    pub tiers: Vec<TierDisplay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceptance_rate: Option<f64>,
    pub acceptance_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranking: Option<u64>,
    pub ranking_label: String,
    /// Set when this model replaces stats after a failed lookup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<LookupError>,
}

impl StatsDisplay {
    pub fn tier(&self, tier: Tier) -> &TierDisplay {
        let index = match tier {
            Tier::Easy => 0,
            Tier::Medium => 1,
            Tier::Hard => 2,
        };
        &self.tiers[index]
    }

    /// True when no solved counts are shown
    pub fn is_cleared(&self) -> bool {
        self.total_solved == 0 && self.tiers.iter().all(|t| t.solved == 0)
    }
}

pub fn present_stats(stats: &ProfileStats) -> StatsDisplay {
    let total_solved = stats.total_solved();

    let tiers = Tier::ALL
        .iter()
        .map(|&tier| {
            let percent = round_one_decimal(stats.percentage(tier));
            let percent_label = if total_solved == 0 {
                "0%".to_string()
            } else {
                format!("{:.1}%", percent)
            };
            TierDisplay {
                tier,
                solved: stats.solved(tier),
                available: stats.available(tier),
                percent,
                percent_label,
            }
        })
        .collect();

    let acceptance_rate = stats.acceptance_rate.filter(|rate| *rate > 0.0);
    let ranking = stats.ranking.filter(|rank| *rank > 0);

    StatsDisplay {
        total_solved,
        tiers,
        acceptance_rate,
        acceptance_label: acceptance_rate
            .map(|rate| format!("{}%", rate))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        ranking,
        ranking_label: ranking
            .map(|rank| format!("#{}", group_thousands(rank)))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        failure: None,
    }
}

/// The all-zero model shown before any lookup and while loading
pub fn present_empty() -> StatsDisplay {
    present_stats(&ProfileStats::default())
}

/// The all-zero model tagged with the failure that cleared it
pub fn present_error(kind: LookupError) -> StatsDisplay {
    StatsDisplay {
        failure: Some(kind),
        ..present_empty()
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
