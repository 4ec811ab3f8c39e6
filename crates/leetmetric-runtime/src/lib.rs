pub mod config;
pub mod controller;
pub mod error;
pub mod fetcher;
pub mod notice;
pub mod source;

pub use config::{Config, resolve_data_dir};
pub use controller::{Controller, DisplayUpdate, Phase, SessionState, Submission, Transition};
pub use error::{Error, Result};
pub use fetcher::{FetchOutcome, FetchSource, Fetcher};
pub use notice::{Notice, NoticeKind, NoticeLevel};
pub use source::{HttpStatsSource, StatsSource, parse_profile};
