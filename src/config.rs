//! Optional `bintree.toml` discovery and settings

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::output::RenderStyle;

pub const CONFIG_FILE: &str = "bintree.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read bintree.toml: {0}")]
    ConfigReadError(#[from] std::io::Error),

    #[error("Failed to parse bintree.toml: {0}")]
    ConfigParseError(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    render: Option<RenderSection>,
    batch: Option<BatchSection>,
}

#[derive(Debug, Deserialize, Default)]
struct RenderSection {
    style: Option<RenderStyle>,
}

#[derive(Debug, Deserialize, Default)]
struct BatchSection {
    extension: Option<String>,
    output: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Where the config file was found, if anywhere
    pub source: Option<PathBuf>,
    pub style: RenderStyle,
    /// Input file extension picked up by batch runs
    pub extension: String,
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: None,
            style: RenderStyle::default(),
            extension: "txt".to_string(),
            output_dir: PathBuf::from("trees"),
        }
    }
}

impl Config {
    /// Look for bintree.toml in the current directory or any parent.
    /// Falls back to defaults when none exists.
    pub fn discover() -> Result<Self, ConfigError> {
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    pub fn discover_from(start: &Path) -> Result<Self, ConfigError> {
        match Self::find_config_file(start) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)?;
        config.source = Some(path.to_path_buf());

        // relative output dirs are anchored next to the config file
        if config.output_dir.is_relative() {
            if let Some(parent) = path.parent() {
                config.output_dir = parent.join(&config.output_dir);
            }
        }

        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        let defaults = Self::default();

        let style = file.render.and_then(|r| r.style).unwrap_or(defaults.style);
        let batch = file.batch.unwrap_or_default();

        let extension = batch
            .extension
            .map(|e| e.trim_start_matches('.').to_string())
            .unwrap_or(defaults.extension);
        let output_dir = batch
            .output
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);

        Ok(Self {
            source: None,
            style,
            extension,
            output_dir,
        })
    }

    fn find_config_file(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            let candidate = current.join(CONFIG_FILE);
            if candidate.is_file() {
                return Some(candidate);
            }

            if !current.pop() {
                return None;
            }
        }
    }
}
