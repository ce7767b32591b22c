//! Conversion configuration.
//!
//! Four knobs, all caller-overridable: the three media directories and the
//! output file path. Defaults match the layout a journal export unpacks
//! to (`photos/`, `videos/`, `audios/` next to the JSON file).
//!
//! An optional `journalbook.toml` placed next to the export overrides the
//! defaults; CLI flags override both. Config files are sparse — specify
//! only the values you want to change. Unknown keys are rejected to catch
//! typos early.
//!
//! ```toml
//! # journalbook.toml — all keys optional, defaults shown
//! photos_dir = "photos"
//! videos_dir = "videos"
//! audios_dir = "audios"
//! output_file = "journal.html"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_FILE: &str = "journalbook.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Where to find media and where to write the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertConfig {
    /// Directory searched for photo files (`.jpg`, `.jpeg`, `.png`).
    pub photos_dir: PathBuf,
    /// Directory searched for video files (`.mp4`, `.mov`, `.webm`).
    pub videos_dir: PathBuf,
    /// Directory searched for audio files (`.m4a`).
    pub audios_dir: PathBuf,
    /// Output path; an existing file is overwritten.
    pub output_file: PathBuf,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            photos_dir: PathBuf::from("photos"),
            videos_dir: PathBuf::from("videos"),
            audios_dir: PathBuf::from("audios"),
            output_file: PathBuf::from("journal.html"),
        }
    }
}

impl ConvertConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output_file.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "output_file must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Load config from `journalbook.toml` in `dir`, or defaults if absent.
pub fn load_config(dir: &Path) -> Result<ConvertConfig, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(ConvertConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    let config: ConvertConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}
