//! Calculator settings
//!
//! Stored as pretty JSON in the platform config directory, e.g.
//! `~/.config/calculator/config.json` on Linux. A missing or broken file
//! never stops the app: it falls back to the defaults.

use crate::error::CalcError;
use crate::evaluator::DEFAULT_MAX_ENTRY_LEN;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Texts shown in the entry field for each error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorMessages {
    pub division_by_zero: String,
    pub undefined_result: String,
    pub overflow: String,
}

impl Default for ErrorMessages {
    fn default() -> Self {
        Self {
            division_by_zero: CalcError::DivisionByZero.to_string(),
            undefined_result: CalcError::UndefinedResult.to_string(),
            overflow: CalcError::Overflow.to_string(),
        }
    }
}

impl ErrorMessages {
    pub fn message_for(&self, err: CalcError) -> String {
        match err {
            CalcError::DivisionByZero => self.division_by_zero.clone(),
            CalcError::UndefinedResult => self.undefined_result.clone(),
            CalcError::Overflow => self.overflow.clone(),
            CalcError::UnknownOperator(_) => err.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Characters the entry accepts, not counting a leading `-`.
    pub max_entry_len: usize,
    /// Largest font size for the entry field, in points.
    pub entry_font_size: f32,
    /// Largest font size for the expression line, in points.
    pub expression_font_size: f32,
    /// Initial inner window size `[width, height]`.
    pub window_size: [f32; 2],
    pub error_messages: ErrorMessages,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entry_len: DEFAULT_MAX_ENTRY_LEN,
            entry_font_size: 40.0,
            expression_font_size: 16.0,
            window_size: [300.0, 420.0],
            error_messages: ErrorMessages::default(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Load from `path`, or the defaults if it is missing or unreadable.
    /// A missing file is created with the defaults so there is one to edit.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                info!(path = %path.display(), "loaded config");
                config
            }
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                let config = Self::default();
                match config.save(path) {
                    Ok(()) => info!(path = %path.display(), "wrote default config"),
                    Err(e) => warn!(path = %path.display(), error = %e, "could not write config"),
                }
                config
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring config");
                Self::default()
            }
        }
    }
}

/// Config directory for the app
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("co", "slowcomputer", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn config_path(app_name: &str) -> PathBuf {
    config_dir(app_name).join("config.json")
}
