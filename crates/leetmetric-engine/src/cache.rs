use std::collections::HashMap;
use std::time::{Duration, Instant};

use leetmetric_types::{ProfileStats, Username};

use crate::clock::{Clock, SystemClock};

/// Default freshness window for cached profile lookups
pub const DEFAULT_FRESHNESS_WINDOW: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Clone)]
struct CacheEntry {
    stats: ProfileStats,
    captured_at: Instant,
}

/// Session-lifetime map from username to its last fetched stats.
///
/// Stale entries are reported as misses but stay in the map until overwritten;
/// the map is never pruned.
#[derive(Debug)]
pub struct StatsCache<C: Clock = SystemClock> {
    entries: HashMap<Username, CacheEntry>,
    window: Duration,
    clock: C,
}

impl StatsCache<SystemClock> {
    pub fn new(window: Duration) -> Self {
        Self::with_clock(window, SystemClock)
    }
}

impl Default for StatsCache<SystemClock> {
    fn default() -> Self {
        Self::new(DEFAULT_FRESHNESS_WINDOW)
    }
}

impl<C: Clock> StatsCache<C> {
    pub fn with_clock(window: Duration, clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            window,
            clock,
        }
    }

    /// Stats for `username` if they were captured less than one window ago
    pub fn get(&self, username: &Username) -> Option<ProfileStats> {
        let entry = self.entries.get(username)?;
        let age = self.clock.now().saturating_duration_since(entry.captured_at);
        if age < self.window {
            Some(entry.stats.clone())
        } else {
            None
        }
    }

    /// Store stats captured now, replacing any previous entry
    pub fn put(&mut self, username: Username, stats: ProfileStats) {
        let entry = CacheEntry {
            stats,
            captured_at: self.clock.now(),
        };
        self.entries.insert(username, entry);
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Number of entries held, stale ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
