use anyhow::{Result, bail};
use chrono::Utc;
use leetmetric_runtime::{Config, Controller, Fetcher, HttpStatsSource};
use tracing::info;

use super::HandlerContext;
use crate::presentation::presenters::{present_lookup_entry, present_lookup_result};

/// Submit every username in order through one session and print the results.
///
/// Fails (exit status 1) when any submission ended with an error notice;
/// duplicates are warnings and do not count.
pub fn handle(ctx: &HandlerContext, config: &Config, usernames: &[String]) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let source = HttpStatsSource::from_config(config)?;
    let fetcher = Fetcher::new(source, config.cache_ttl());
    let mut controller = Controller::new();

    info!(count = usernames.len(), endpoint = %config.endpoint, "starting lookups");

    let entries = runtime.block_on(async {
        let mut entries = Vec::with_capacity(usernames.len());
        for input in usernames {
            let transitions = controller.lookup(input, &fetcher).await;
            entries.push(present_lookup_entry(input, &transitions, Utc::now()));
        }
        entries
    });

    let result = present_lookup_result(entries);
    let total = result.content.results.len();
    let failed = result.content.failed();

    ctx.render(result)?;

    if failed > 0 {
        bail!("{} of {} lookup(s) failed", failed, total);
    }
    Ok(())
}
