pub mod config;
pub mod lookup;
pub mod tui;

pub use config::{ConfigInitView, ConfigView};
pub use lookup::LookupResultView;
