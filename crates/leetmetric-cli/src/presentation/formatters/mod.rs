pub mod bar;
pub mod style;
pub mod time;

pub use bar::progress_bar;
pub use style::Palette;
pub use time::{format_clock, format_timestamp};
