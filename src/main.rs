//! Strips code-generation directives from SQL view definitions.
//! Comments like `-- PK; widget:text` carry metadata for UI and schema
//! generators. Before the views are used as plain SQL those comments have
//! to go, while ordinary comments stay where they are.
use anyhow::Result;
use clap::Parser;
use sql_directive_cleaner::core::config::ConfigFormat;
use sql_directive_cleaner::utils::{self, RunOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sql-directive-cleaner")]
#[command(about = "Removes directive comments from SQL view files under sql/views")]
#[command(version)]
struct Cli {
    /// Glob selecting the files to clean
    #[arg(long, value_name = "GLOB")]
    pattern: Option<String>,

    /// Configuration file (TOML, JSON or YAML, chosen by extension)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Report what would be removed without writing any file
    #[arg(long)]
    dry_run: bool,

    /// Print the effective configuration in the given format and exit
    #[arg(long, value_name = "FORMAT")]
    print_config: Option<ConfigFormat>,

    /// Show debug logging and the matched directive for each removal
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose);

    let options = RunOptions {
        config_path: cli.config,
        pattern: cli.pattern,
        dry_run: cli.dry_run,
        verbose: cli.verbose,
    };

    match cli.print_config {
        Some(format) => utils::print_config(&options, format),
        None => utils::run_cleaner(&options).map(|_| ()),
    }
}
