use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::warn;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pad: PadConfig,
    #[serde(default)]
    pub log: LogSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PadConfig {
    /// Show the end-of-line indicator and count cursor repairs.
    #[serde(default = "default_debug")]
    pub debug: bool,
    #[serde(default = "default_border")]
    pub border: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file or directory. `~` is expanded.
    #[serde(default)]
    pub file: Option<String>,
}

fn default_debug() -> bool { false }
fn default_border() -> bool { true }
fn default_log_level() -> String { "warn".to_string() }

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            debug: default_debug(),
            border: default_border(),
        }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LogSettings {
    pub fn file_path(&self) -> Option<PathBuf> {
        self.file
            .as_deref()
            .map(|file| PathBuf::from(shellexpand::tilde(file).to_string()))
    }
}

impl Config {
    pub fn config_path() -> PathBuf { Self::config_dir().join("config.toml") }
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("linepad")
    }

    /// Defaults when no config file exists.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Self::parse(&content).map_err(|source| Error::ConfigParse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!("{e}, using default config");
            Self::default()
        })
    }

    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn save(&self) -> Result<()> {
        fs::create_dir_all(Self::config_dir())?;
        let toml_string = toml::to_string_pretty(self)?;
        fs::write(Self::config_path(), toml_string)?;
        Ok(())
    }
}
