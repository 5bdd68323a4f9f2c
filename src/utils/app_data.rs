use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "ipmt";
const CONFIG_FILE: &str = "config.json";

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "IPMT_CONFIG";

/// When to colour search output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Colour when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn choice(self) -> termcolor::ColorChoice {
        match self {
            ColorMode::Auto if std::io::IsTerminal::is_terminal(&std::io::stdout()) => {
                termcolor::ColorChoice::Auto
            }
            ColorMode::Auto | ColorMode::Never => termcolor::ColorChoice::Never,
            ColorMode::Always => termcolor::ColorChoice::Always,
        }
    }
}

/// Application configuration stored in the user config directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Colouring of matched lines
    #[serde(default)]
    pub color: ColorMode,

    /// Show a progress bar while building an index
    #[serde(default = "default_progress")]
    pub progress: bool,

    /// Extension given to index files derived from the text file name
    #[serde(default = "default_index_extension")]
    pub index_extension: String,
}

fn default_progress() -> bool {
    true
}

fn default_index_extension() -> String {
    "idx".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            progress: default_progress(),
            index_extension: default_index_extension(),
        }
    }
}

impl AppConfig {
    /// Load config from `$IPMT_CONFIG` or the user config directory
    ///
    /// A missing file gives the defaults. An unreadable or malformed file is
    /// reported and also falls back to the defaults.
    pub fn load() -> Self {
        let path = match get_config_path() {
            Ok(path) => path,
            Err(e) => {
                warn!("{e:#}");
                return Self::default();
            }
        };

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("ignoring config {}: {e:#}", path.display());
                Self::default()
            }
        }
    }

    /// Load config from an explicit path, or return default if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: AppConfig =
            serde_json::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Index path for a text file: same name, configured extension
    pub fn index_path_for(&self, text_path: &Path) -> PathBuf {
        text_path.with_extension(&self.index_extension)
    }
}

/// Get the path to the config file
pub fn get_config_path() -> Result<PathBuf> {
    if let Some(explicit) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(explicit));
    }

    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME).join(CONFIG_FILE))
}
