use leetmetric_engine::StatsDisplay;

use super::StatusLevel;

/// One frame of the interactive widget
#[derive(Debug, Clone)]
pub struct TuiScreenViewModel {
    pub input: InputViewModel,
    pub stats: StatsDisplay,
    pub status_bar: StatusBarViewModel,
}

#[derive(Debug, Clone)]
pub struct InputViewModel {
    pub text: String,
    pub busy: bool,
}

#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    pub status_level: StatusLevel,
    pub status_message: String,
    /// Local time of the last successful lookup
    pub updated_at: Option<String>,
}
