use chrono::{DateTime, Utc};
use leetmetric_runtime::{DisplayUpdate, FetchSource, NoticeKind, Transition};
use leetmetric_types::LookupError;

use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, LookupEntryViewModel, LookupResultViewModel, StatusBadge,
    StatusLevel,
};

/// Fold the transitions of one submission into a result row.
///
/// Only the last transition matters: it holds the final notice and display.
pub fn present_lookup_entry(
    input: &str,
    transitions: &[Transition],
    now: DateTime<Utc>,
) -> LookupEntryViewModel {
    let last = transitions.last();
    let notice = last.and_then(|t| t.notice.clone());

    let source = notice.as_ref().and_then(|n| match n.kind {
        NoticeKind::Fetched => Some(FetchSource::Network),
        NoticeKind::LoadedFromCache => Some(FetchSource::Cache),
        _ => None,
    });

    let stats = match last.map(|t| &t.display) {
        Some(DisplayUpdate::Show(display)) => Some(display.clone()),
        _ => None,
    };

    LookupEntryViewModel {
        input: input.to_string(),
        notice,
        source,
        retrieved_at: stats.as_ref().map(|_| now),
        stats,
    }
}

pub fn present_lookup_result(
    entries: Vec<LookupEntryViewModel>,
) -> CommandResultViewModel<LookupResultViewModel> {
    let content = LookupResultViewModel { results: entries };
    let total = content.results.len();
    let failed = content.failed();

    let badge = if failed == 0 {
        StatusBadge::new(
            StatusLevel::Success,
            format!("Looked up {} username(s)", total),
        )
    } else if failed == total {
        StatusBadge::new(StatusLevel::Error, format!("All {} lookup(s) failed", total))
    } else {
        StatusBadge::new(
            StatusLevel::Warning,
            format!("{} of {} lookup(s) failed", failed, total),
        )
    };

    let suggestions = suggestions_for(&content);
    CommandResultViewModel::new(content)
        .with_badge(badge)
        .with_suggestions(suggestions)
}

fn suggestions_for(content: &LookupResultViewModel) -> Vec<Guidance> {
    let failures: Vec<LookupError> = content
        .results
        .iter()
        .filter_map(|entry| match entry.notice.as_ref().map(|n| n.kind) {
            Some(NoticeKind::Failed(err)) => Some(err),
            _ => None,
        })
        .collect();

    let mut tips = Vec::new();
    if failures
        .iter()
        .any(|e| matches!(e, LookupError::Timeout | LookupError::NetworkError))
    {
        tips.push(Guidance::run(
            "Check connectivity, or allow the API more time",
            "leetmetric --timeout-secs 30 lookup <USERNAME>",
        ));
    }
    if failures.contains(&LookupError::RateLimited) {
        tips.push(Guidance::hint(
            "The statistics API is rate limiting requests; wait a minute before retrying",
        ));
    }
    if failures.contains(&LookupError::UserNotFound) {
        tips.push(Guidance::hint(
            "Usernames are case-sensitive; copy it from the profile URL",
        ));
    }
    tips
}
