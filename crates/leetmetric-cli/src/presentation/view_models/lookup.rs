use std::fmt::Display;

use chrono::{DateTime, Utc};
use leetmetric_engine::StatsDisplay;
use leetmetric_runtime::{FetchSource, Notice};
use serde::Serialize;

use super::{CreateView, ViewMode};
use crate::presentation::formatters::Palette;
use crate::presentation::views::LookupResultView;

/// Outcome of one submitted username
#[derive(Debug, Clone, Serialize)]
pub struct LookupEntryViewModel {
    /// Input exactly as given on the command line
    pub input: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<FetchSource>,

    /// Present only when the lookup ended with stats on screen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatsDisplay>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub retrieved_at: Option<DateTime<Utc>>,
}

impl LookupEntryViewModel {
    pub fn is_error(&self) -> bool {
        self.notice.as_ref().is_some_and(Notice::is_error)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LookupResultViewModel {
    pub results: Vec<LookupEntryViewModel>,
}

impl LookupResultViewModel {
    pub fn failed(&self) -> usize {
        self.results.iter().filter(|entry| entry.is_error()).count()
    }
}

impl CreateView for LookupResultViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode, palette: Palette) -> Box<dyn Display + 'a> {
        Box::new(LookupResultView::new(self, mode, palette))
    }
}
