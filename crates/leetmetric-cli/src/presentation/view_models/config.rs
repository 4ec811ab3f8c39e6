use std::fmt::Display;
use std::path::PathBuf;

use leetmetric_runtime::Config;
use serde::Serialize;

use super::{CreateView, ViewMode};
use crate::presentation::formatters::Palette;
use crate::presentation::views::{ConfigInitView, ConfigView};

#[derive(Debug, Clone, Serialize)]
pub struct ConfigViewModel {
    pub path: PathBuf,
    /// False when defaults are in effect because no file exists
    pub file_exists: bool,
    /// Values after command-line overrides
    pub config: Config,
}

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode, palette: Palette) -> Box<dyn Display + 'a> {
        Box::new(ConfigView::new(self, mode, palette))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInitViewModel {
    pub path: PathBuf,
    pub written: bool,
}

impl CreateView for ConfigInitViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode, _palette: Palette) -> Box<dyn Display + 'a> {
        Box::new(ConfigInitView::new(self, mode))
    }
}
