pub mod config;
pub mod lookup;
pub mod tui;

pub use config::{present_config, present_config_init};
pub use lookup::{present_lookup_entry, present_lookup_result};
pub use tui::present_screen;
