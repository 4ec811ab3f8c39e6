//! Stateless ratatui widgets for the interactive lookup screen.
//!
//! Each view borrows its slice of `TuiScreenViewModel` and only maps it to
//! widgets; colour mapping from `StatusLevel`/`Tier` happens here.

pub mod details;
pub mod input;
pub mod status_bar;
pub mod tiers;

pub use details::DetailsView;
pub use input::InputView;
pub use status_bar::StatusBarView;
pub use tiers::TierCountersView;

use leetmetric_types::Tier;
use ratatui::style::Color;

use crate::presentation::view_models::StatusLevel;

pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

pub(crate) fn tier_to_color(tier: Tier) -> Color {
    match tier {
        Tier::Easy => Color::Green,
        Tier::Medium => Color::Yellow,
        Tier::Hard => Color::Red,
    }
}
