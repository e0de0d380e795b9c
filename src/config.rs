//! Application configuration with persistence.
//!
//! # Configuration File Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/linkcard/config.json`
//! - macOS: `~/Library/Application Support/linkcard/config.json`
//! - Windows: `%APPDATA%/linkcard/config.json`
//!
//! Every field has a default, so a partial file is fine.

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::profile::ProfileData;

// ============================================================================
// Constants
// ============================================================================

/// Application name used for configuration and data directories.
pub const APP_NAME: &str = "linkcard";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

// ============================================================================
// AppConfig
// ============================================================================

/// Application configuration structure for persistence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Profile JSON to show instead of the built-in profile.
    pub profile_path: Option<PathBuf>,
    /// Prefer wl-copy/xclip/xsel over arboard on Linux.
    pub prefer_external_clipboard: bool,
    /// Default `tracing` filter when `RUST_LOG` is not set.
    pub log_level: String,
    /// Whether to write a log file at all.
    pub log_to_file: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile_path: None,
            prefer_external_clipboard: true,
            log_level: "info".to_string(),
            log_to_file: true,
        }
    }
}

impl AppConfig {
    /// Returns the path to the configuration file, creating its directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        fs::create_dir_all(&path)?;
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads the configuration from disk, falling back to defaults.
    ///
    /// A missing file is the normal first-run case and is not reported.
    #[must_use]
    pub fn load() -> Self {
        let path = match Self::config_path() {
            Ok(path) => path,
            Err(err) => {
                eprintln!("Config directory unavailable, using defaults: {err}");
                return Self::default();
            }
        };

        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Loads the configuration from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Saves the configuration to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined or the file cannot
    /// be written.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolves the profile to show.
    ///
    /// `override_path` (from the command line) wins over `profile_path`;
    /// with neither, the built-in profile is used.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen profile file is missing or invalid.
    pub fn resolve_profile(&self, override_path: Option<&Path>) -> Result<ProfileData> {
        match override_path.or(self.profile_path.as_deref()) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading profile file");
                Ok(ProfileData::from_file(path)?)
            }
            None => Ok(ProfileData::default()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
