pub mod config;
pub mod context;
pub mod lookup;
pub mod tui;

pub use context::HandlerContext;
