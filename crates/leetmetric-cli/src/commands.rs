use std::path::Path;

use anyhow::{Context, Result};
use leetmetric_runtime::{Config, resolve_data_dir};
use tracing::debug;

use super::args::{Cli, Commands, ConfigCommand, ViewModeArgs};
use super::handlers::{self, HandlerContext};
use crate::logging::{self, LogTarget};

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let config_path = Config::default_path(&data_dir);

    let target = match cli.command {
        // the widget owns the terminal
        Commands::Tui { .. } => LogTarget::file_in(&data_dir),
        _ => LogTarget::Stderr,
    };
    logging::init(cli.log_level, target)?;
    debug!(data_dir = %data_dir.display(), "resolved data directory");

    match cli.command {
        Commands::Lookup {
            usernames,
            view_mode,
        } => {
            let config = effective_config(&config_path, &cli.endpoint, cli.timeout_secs)?;
            let ctx = HandlerContext::new(cli.format, &view_mode);
            handlers::lookup::handle(&ctx, &config, &usernames)
        }

        Commands::Tui { username } => {
            let config = effective_config(&config_path, &cli.endpoint, cli.timeout_secs)?;
            handlers::tui::handle(&config, username)
        }

        Commands::Config { command } => {
            let ctx = HandlerContext::new(cli.format, &ViewModeArgs::default());
            match command {
                ConfigCommand::Show => {
                    let config = effective_config(&config_path, &cli.endpoint, cli.timeout_secs)?;
                    handlers::config::show(&ctx, &config_path, config)
                }
                ConfigCommand::Init { force } => handlers::config::init(&ctx, &config_path, force),
            }
        }
    }
}

/// File values (or defaults) with command-line overrides applied on top
fn effective_config(
    path: &Path,
    endpoint: &Option<String>,
    timeout_secs: Option<u64>,
) -> Result<Config> {
    let mut config = Config::load_from(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;

    if let Some(endpoint) = endpoint {
        config.endpoint = endpoint.trim_end_matches('/').to_string();
    }
    if let Some(secs) = timeout_secs {
        config.timeout_secs = secs;
    }

    config.validate()?;
    Ok(config)
}
