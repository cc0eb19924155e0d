use std::io::Write;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use countdown_core::Countdown;
use tracing_subscriber::EnvFilter;

use countdown_cli::commands::{check, report};
use countdown_cli::{Cli, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so they never interleave with the report
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let path = cli.file.clone().unwrap_or(config.file);
    let mode = cli.display.mode().unwrap_or(config.display);
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    tracing::debug!(path = %path.display(), %mode, %today, "resolved arguments");

    let mut stdout = std::io::stdout().lock();
    if cli.check {
        check::run(&mut stdout, &path)?;
    } else {
        let countdown = Countdown::load(&path, mode)
            .with_context(|| format!("failed to load {}", path.display()))?;
        report::run(&mut stdout, &countdown, today, cli.json)?;
    }
    stdout.flush()?;

    Ok(())
}
