//! # Presentation Layer
//!
//! Everything here consumes values produced by the runtime
//! (`Transition`, `Notice`, `StatsDisplay`) and never calls back into it.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                                                                ==(Text)==> [ View ] (fmt::Display)
//!                                                                ==(TUI)===> [ View ] (ratatui Widget)
//! ```
//!
//! ## Rules
//!
//! * **ViewModels carry raw data.** Counts stay numbers so `--format json`
//!   is usable as an API. The only strings are labels the runtime already
//!   fixed (percent and rank labels, notice messages).
//! * **`ViewMode` is density, not shape.** `--format json` ignores it and
//!   always dumps the full view model.
//! * **Views own layout, colour and formatting.** Presenters never format.
//!
//! ## Where does code go?
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to the JSON output | `view_models/` |
//! | Decide which badge or tip to show | `presenters/` |
//! | Change colours or hide a line in compact mode | `views/` |
//! | Draw a new TUI panel | `views/tui/` + `renderers/tui.rs` |
//! | Format a timestamp or a bar | `formatters/` |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer, TuiRenderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel,
    common::{OutputFormat, ViewMode},
};
