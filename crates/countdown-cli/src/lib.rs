//! Countdown CLI library.
//!
//! This crate provides the CLI interface for countdown reports.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, DisplayArgs};
pub use config::Config;
