// Engine module - validation, freshness cache and display-model presentation.
// Sits between the domain types and the runtime/CLI layers; no I/O, no terminal.

pub mod cache;
pub mod clock;
pub mod presenter;
pub mod validator;

pub use cache::{DEFAULT_FRESHNESS_WINDOW, StatsCache};
pub use clock::{Clock, ManualClock, SystemClock};
pub use presenter::{StatsDisplay, TierDisplay, present_empty, present_error, present_stats};
pub use validator::validate_username;
