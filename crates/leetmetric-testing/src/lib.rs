//! Testing infrastructure for leetmetric integration tests.
//!
//! - `MockStatsServer`: local stand-in for the statistics API with canned replies
//! - `fixtures`: sample API payloads
//! - `TestWorld`: isolated data directory plus CLI invocation helpers

pub mod fixtures;
pub mod server;
pub mod world;

pub use server::{
    MockReply, MockStatsServer, RecordedRequest, hangup_base_url, unreachable_base_url,
};
pub use world::TestWorld;
