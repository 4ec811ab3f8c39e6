pub mod common;
pub mod config;
pub mod lookup;
pub mod result;
pub mod tui;

use std::fmt::Display;

pub use common::{Guidance, OutputFormat, StatusBadge, StatusLevel, ViewMode};
pub use config::{ConfigInitViewModel, ConfigViewModel};
pub use lookup::{LookupEntryViewModel, LookupResultViewModel};
pub use result::CommandResultViewModel;
pub use tui::{InputViewModel, StatusBarViewModel, TuiScreenViewModel};

use crate::presentation::formatters::Palette;

/// Bridge from a view model to its text view
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode, palette: Palette) -> Box<dyn Display + 'a>;
}
