use chrono::{DateTime, Local};
use leetmetric_engine::StatsDisplay;
use leetmetric_runtime::{Notice, Phase};

use crate::presentation::formatters::format_clock;
use crate::presentation::view_models::{
    InputViewModel, StatusBarViewModel, StatusLevel, TuiScreenViewModel,
};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const IDLE_HINT: &str = "Type a LeetCode username and press Enter";

/// Build one TUI frame. `tick` only drives the loading spinner.
pub fn present_screen(
    input: &str,
    phase: &Phase,
    toast: Option<&Notice>,
    stats: &StatsDisplay,
    updated_at: Option<&DateTime<Local>>,
    tick: usize,
) -> TuiScreenViewModel {
    let (status_level, status_message) = match (phase, toast) {
        (Phase::Loading(username), _) => (
            StatusLevel::Info,
            format!(
                "{} Connecting to LeetCode... ({})",
                SPINNER[tick % SPINNER.len()],
                username
            ),
        ),
        (Phase::Idle, Some(notice)) => (notice.level.into(), notice.message.clone()),
        (Phase::Idle, None) => (StatusLevel::Info, IDLE_HINT.to_string()),
    };

    TuiScreenViewModel {
        input: InputViewModel {
            text: input.to_string(),
            busy: matches!(phase, Phase::Loading(_)),
        },
        stats: stats.clone(),
        status_bar: StatusBarViewModel {
            status_level,
            status_message,
            updated_at: updated_at.map(format_clock),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leetmetric_engine::present_empty;
    use leetmetric_types::{LookupError, Username};

    #[test]
    fn test_loading_overrides_toast() {
        let notice = Notice::failed(LookupError::Timeout);
        let screen = present_screen(
            "abc",
            &Phase::Loading(Username::new("abc")),
            Some(&notice),
            &present_empty(),
            None,
            0,
        );

        assert!(screen.input.busy);
        assert_eq!(screen.status_bar.status_level, StatusLevel::Info);
        assert_eq!(
            screen.status_bar.status_message,
            "⠋ Connecting to LeetCode... (abc)"
        );
    }

    #[test]
    fn test_idle_shows_toast_then_hint() {
        let notice = Notice::failed(LookupError::RateLimited);
        let screen = present_screen("", &Phase::Idle, Some(&notice), &present_empty(), None, 3);
        assert_eq!(screen.status_bar.status_level, StatusLevel::Error);
        assert_eq!(
            screen.status_bar.status_message,
            "Too many requests. Please wait a moment and try again."
        );

        let screen = present_screen("", &Phase::Idle, None, &present_empty(), None, 3);
        assert_eq!(screen.status_bar.status_message, IDLE_HINT);
        assert!(!screen.input.busy);
    }
}
