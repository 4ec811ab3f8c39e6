use std::cell::RefCell;
use std::time::Duration;

use leetmetric_engine::{Clock, StatsCache, SystemClock};
use leetmetric_types::{LookupError, ProfileStats, Username};
use serde::Serialize;
use tracing::{debug, info};

use crate::source::StatsSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchSource {
    Cache,
    Network,
}

impl FetchSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchSource::Cache => "cache",
            FetchSource::Network => "network",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchOutcome {
    pub stats: ProfileStats,
    pub source: FetchSource,
}

/// Cache-first profile fetcher.
///
/// The cache sits in a `RefCell` so `fetch` only needs `&self`: the in-flight
/// future and the rest of the event loop share the fetcher on one thread. No
/// borrow of the cache is held across an await point.
pub struct Fetcher<S, C: Clock = SystemClock> {
    source: S,
    cache: RefCell<StatsCache<C>>,
}

impl<S: StatsSource> Fetcher<S> {
    pub fn new(source: S, freshness_window: Duration) -> Self {
        Self::with_cache(source, StatsCache::new(freshness_window))
    }
}

impl<S: StatsSource, C: Clock> Fetcher<S, C> {
    pub fn with_cache(source: S, cache: StatsCache<C>) -> Self {
        Self {
            source,
            cache: RefCell::new(cache),
        }
    }

    /// Return fresh cached stats, or ask the source and remember the answer
    pub async fn fetch(&self, username: &Username) -> Result<FetchOutcome, LookupError> {
        let cached = self.cache.borrow().get(username);
        if let Some(stats) = cached {
            debug!(%username, "cache hit");
            return Ok(FetchOutcome {
                stats,
                source: FetchSource::Cache,
            });
        }

        debug!(%username, "cache miss");
        let stats = self.source.fetch_profile(username).await?;
        info!(%username, total_solved = stats.total_solved(), "profile fetched");

        self.cache.borrow_mut().put(username.clone(), stats.clone());
        Ok(FetchOutcome {
            stats,
            source: FetchSource::Network,
        })
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn cached_entries(&self) -> usize {
        self.cache.borrow().len()
    }
}
