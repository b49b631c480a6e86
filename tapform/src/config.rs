//! Platform mode configuration.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Errors produced while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown mode '{0}' (expected ios, md or wp)")]
    UnknownMode(String),
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Visual mode. Each control adds a `{component}-{mode}` class to its host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Ios,
    #[default]
    Md,
    Wp,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Md => "md",
            Self::Wp => "wp",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ios" => Ok(Self::Ios),
            "md" => Ok(Self::Md),
            "wp" => Ok(Self::Wp),
            _ => Err(ConfigError::UnknownMode(s.to_string())),
        }
    }
}

/// Shared configuration handed to controls at construction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub mode: Mode,
}

impl Config {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    /// Parse configuration from JSON, e.g. `{"mode": "ios"}`.
    /// Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
