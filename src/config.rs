//! Configuration document: a comment-tolerant JSON file.

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

/// Recognized configuration options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub board_size: usize,
    pub start_position: Option<String>,
    pub end_position: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            board_size: 8,
            start_position: None,
            end_position: None,
        }
    }
}

/// Errors raised while loading configuration. Fatal before any pathfinding.
#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(serde_json::Error),
    InvalidBoardSize(usize),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config: {}", e),
            ConfigError::InvalidBoardSize(n) => {
                write!(f, "board_size must be at least 1, got {}", n)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::InvalidBoardSize(_) => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl Config {
    /// Parse a JSONC document: lines whose first token is `//` are dropped
    /// before the remainder is handed to the JSON parser.
    pub fn from_jsonc_str(text: &str) -> Result<Self, ConfigError> {
        let cleaned: Vec<&str> = text
            .lines()
            .filter(|line| !line.trim_start().starts_with("//"))
            .collect();
        let config: Config = serde_json::from_str(&cleaned.join("\n"))?;
        if config.board_size == 0 {
            return Err(ConfigError::InvalidBoardSize(0));
        }
        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_jsonc_str(&text)
    }
}
