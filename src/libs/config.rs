//! Configuration management for the taskbook application.
//!
//! Settings live in `config.json` inside the platform data directory (see
//! [`DataStorage`]). A missing file is not an error: every field has a
//! default, so taskbook works without running `taskbook init` first.
//!
//! ## Settings
//!
//! - **currency**: symbol printed in front of every cost (`R$`)
//! - **highlight_threshold**: tasks costing at least this much are highlighted (`1000`)
//! - **renumber_on_delete**: close rank gaps right after a delete (`false`)
//!
//! ```rust,no_run
//! use taskbook::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.currency = "€".to_string();
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

pub const DEFAULT_CURRENCY: &str = "R$";
pub const DEFAULT_HIGHLIGHT_THRESHOLD: f64 = 1000.0;

/// Main configuration container.
///
/// Fields missing from an older or hand-edited file fall back to their
/// defaults through `#[serde(default)]`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Symbol printed in front of every cost.
    pub currency: String,

    /// Tasks whose cost is at or above this value are highlighted in the list.
    pub highlight_threshold: f64,

    /// When set, `delete` compacts the remaining ranks back to `1..N`.
    ///
    /// Off by default: deleting a task leaves a gap in the ranks until
    /// `taskbook renumber` is run.
    pub renumber_on_delete: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            currency: DEFAULT_CURRENCY.to_string(),
            highlight_threshold: DEFAULT_HIGHLIGHT_THRESHOLD,
            renumber_on_delete: false,
        }
    }
}

impl Config {
    /// Reads the configuration from the data directory, or defaults if absent.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    /// Reads the configuration from an explicit file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str).map_err(|e| msg_error_anyhow!(Message::ConfigParseError(e.to_string())))?;
        Ok(config)
    }

    /// Writes the configuration, pretty-printed, to the data directory.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` if there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Runs the interactive setup wizard, pre-filled with the current values.
    pub fn init() -> Result<Self> {
        // A broken file should not stop the user from writing a new one
        let current = Self::read().unwrap_or_default();

        Ok(Config {
            currency: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptCurrency.to_string())
                .default(current.currency)
                .allow_empty(true)
                .interact_text()?,
            highlight_threshold: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptHighlightThreshold.to_string())
                .default(current.highlight_threshold)
                .interact_text()?,
            renumber_on_delete: Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptRenumberOnDelete.to_string())
                .default(current.renumber_on_delete)
                .interact()?,
        })
    }
}
