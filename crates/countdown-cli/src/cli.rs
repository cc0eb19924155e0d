//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser};
use countdown_core::DisplayMode;

/// Countdown to (and up from) the dates that matter.
///
/// Reads a list of dated events, optionally grouped under `- Section`
/// headers, and prints how long until or since each one.
#[derive(Debug, Parser)]
#[command(name = "countdown", version, about, long_about = None)]
pub struct Cli {
    /// Countdown file to read [default: ~/.countdownrc].
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub display: DisplayArgs,

    /// Count from this day instead of today.
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,

    /// Print the report as JSON.
    #[arg(long, conflicts_with = "check")]
    pub json: bool,

    /// Validate the file and list every malformed line.
    #[arg(long)]
    pub check: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Mutually exclusive unit flags.
#[derive(Debug, Clone, Copy, Default, Args)]
#[group(multiple = false)]
pub struct DisplayArgs {
    /// Display in days.
    #[arg(short, long)]
    pub days: bool,

    /// Display in months (30 days each).
    #[arg(short, long)]
    pub months: bool,

    /// Display in years (365 days each).
    #[arg(short, long)]
    pub years: bool,
}

impl DisplayArgs {
    /// The mode selected on the command line, if any.
    pub const fn mode(self) -> Option<DisplayMode> {
        if self.days {
            Some(DisplayMode::Days)
        } else if self.months {
            Some(DisplayMode::Months)
        } else if self.years {
            Some(DisplayMode::Years)
        } else {
            None
        }
    }
}
