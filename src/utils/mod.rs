use crate::builders::reporter::RunReport;
use crate::core::config::{CleanerConfig, ConfigFormat, ConfigManager};
use crate::core::engine::CleanerEngine;
use anyhow::Result;
use std::path::PathBuf;

/// Settings collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub config_path: Option<PathBuf>,
    pub pattern: Option<String>,
    pub dry_run: bool,
    pub verbose: bool,
}

/// Sets up `env_logger`. `RUST_LOG` takes precedence over the verbose flag.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    // A second initialization (e.g. from tests) is harmless.
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}

/// Loads the configuration and applies command-line overrides on top of it.
pub fn effective_config(options: &RunOptions) -> Result<CleanerConfig> {
    let mut config = ConfigManager::new(options.config_path.clone()).load_config()?;
    if let Some(pattern) = &options.pattern {
        config.discovery_pattern = pattern.clone();
    }
    config.global_settings.dry_run |= options.dry_run;
    config.global_settings.verbose |= options.verbose;
    Ok(config)
}

pub fn run_cleaner(options: &RunOptions) -> Result<RunReport> {
    let config = effective_config(options)?;
    log::debug!("Cleaning files matching {}", config.discovery_pattern);
    let engine = CleanerEngine::new(config)?;
    engine.run()
}

pub fn print_config(options: &RunOptions, format: ConfigFormat) -> Result<()> {
    let config = effective_config(options)?;
    print!("{}", format.render_config(&config)?);
    Ok(())
}
