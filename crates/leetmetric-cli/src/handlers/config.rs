use std::path::Path;

use anyhow::Result;
use leetmetric_runtime::Config;
use tracing::info;

use super::HandlerContext;
use crate::presentation::presenters::{present_config, present_config_init};

/// Print the effective configuration (file values plus flag overrides)
pub fn show(ctx: &HandlerContext, path: &Path, config: Config) -> Result<()> {
    ctx.render(present_config(path, path.exists(), config))
}

/// Write a default config file; an existing file is kept unless `force`
pub fn init(ctx: &HandlerContext, path: &Path, force: bool) -> Result<()> {
    let written = if path.exists() && !force {
        false
    } else {
        Config::default().save_to(path)?;
        info!(path = %path.display(), "wrote default configuration");
        true
    };

    ctx.render(present_config_init(path, written))
}
