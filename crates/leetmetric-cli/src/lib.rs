// Layering: the CLI only renders. Validation, caching, fetching and the
// submission state machine live in leetmetric-engine / leetmetric-runtime,
// which have no terminal dependency. Both the one-shot `lookup` command and
// the interactive `tui` drive the same `Controller` and consume the same
// `Transition` values, so they cannot disagree about messages or state.

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;

pub use args::{Cli, Commands, ConfigCommand, LogLevel, OutputFormat, ViewModeArgs};
pub use commands::run;
