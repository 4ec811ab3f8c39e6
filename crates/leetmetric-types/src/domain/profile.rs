use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Problem difficulty class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Easy,
    Medium,
    Hard,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Easy, Tier::Medium, Tier::Hard];

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Easy => "Easy",
            Tier::Medium => "Medium",
            Tier::Hard => "Hard",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Statistics payload returned by the stats API for one profile.
///
/// Field names follow the upstream JSON (`easySolved`, `acceptanceRate`, ...).
/// Missing or `null` solved counts are read as zero; the remaining fields stay
/// optional because the API omits them for sparse profiles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    #[serde(default, deserialize_with = "null_as_zero")]
    pub easy_solved: u64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub medium_solved: u64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub hard_solved: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acceptance_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranking: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_easy: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_medium: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_hard: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_questions: Option<u64>,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or(0))
}

impl ProfileStats {
    pub fn with_counts(easy: u64, medium: u64, hard: u64) -> Self {
        Self {
            easy_solved: easy,
            medium_solved: medium,
            hard_solved: hard,
            ..Self::default()
        }
    }

    pub fn solved(&self, tier: Tier) -> u64 {
        match tier {
            Tier::Easy => self.easy_solved,
            Tier::Medium => self.medium_solved,
            Tier::Hard => self.hard_solved,
        }
    }

    /// Questions available in the tier, when the API reported it
    pub fn available(&self, tier: Tier) -> Option<u64> {
        match tier {
            Tier::Easy => self.total_easy,
            Tier::Medium => self.total_medium,
            Tier::Hard => self.total_hard,
        }
    }

    /// Sum of the three solved counts; `None` when it does not fit in a `u64`
    pub fn checked_total_solved(&self) -> Option<u64> {
        self.easy_solved
            .checked_add(self.medium_solved)?
            .checked_add(self.hard_solved)
    }

    /// Saturates at `u64::MAX`; payloads that overflow are rejected at parse time
    pub fn total_solved(&self) -> u64 {
        self.checked_total_solved().unwrap_or(u64::MAX)
    }

    /// Share of `total_solved` that falls in `tier`, in percent. Zero when nothing is solved.
    pub fn percentage(&self, tier: Tier) -> f64 {
        let total = self.total_solved();
        if total == 0 {
            return 0.0;
        }
        self.solved(tier) as f64 / total as f64 * 100.0
    }
}
