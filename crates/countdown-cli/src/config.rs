//! Configuration loading and management.

use std::path::{Path, PathBuf};

use countdown_core::DisplayMode;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Name of the countdown file looked up in the home directory.
pub const DEFAULT_FILE_NAME: &str = ".countdownrc";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Countdown file read when none is given on the command line.
    pub file: PathBuf,
    /// Unit used when no display flag is given.
    pub display: DisplayMode,
}

impl Default for Config {
    fn default() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            file: home.join(DEFAULT_FILE_NAME),
            display: DisplayMode::default(),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (COUNTDOWN_*)
        figment = figment.merge(Env::prefixed("COUNTDOWN_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for countdown.
///
/// On Linux: `~/.config/countdown`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("countdown"))
}
