//! Configuration for the `ank` CLI.
//!
//! Loaded from TOML. Every section and key is optional; unknown keys are
//! rejected so typos surface instead of being ignored.
//!
//! ```toml
//! [dates]
//! strict = false
//!
//! [output]
//! format = "text"   # or "json"
//!
//! [logging]
//! level = "warn"
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use ank_base::DateParsing;
use log::{debug, info};
use serde::Deserialize;

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "ank.toml";

/// Default log level when neither the CLI nor the file sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Errors from loading a configuration file.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// The file could not be read.
    Io { path: PathBuf, message: String },
    /// The file is not valid TOML or has unknown keys / bad values.
    Parse { path: PathBuf, message: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, message } => {
                write!(f, "cannot read config {}: {message}", path.display())
            }
            Self::Parse { path, message } => {
                write!(f, "invalid config {}: {message}", path.display())
            }
        }
    }
}

impl Error for ConfigError {}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// `[dates]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatesConfig {
    /// Reject birth dates that do not exist in the Gregorian calendar.
    pub strict: bool,
}

/// `[output]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Whole configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnkConfig {
    pub dates: DatesConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

impl AnkConfig {
    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load from an explicit path. A missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, else [`DEFAULT_CONFIG_FILE`] from `dir` if it
    /// exists, else defaults.
    pub fn resolve(path: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(p) = path {
            return Self::load_from(p);
        }
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load_from(&candidate)
        } else {
            debug!("no {} in {}, using defaults", DEFAULT_CONFIG_FILE, dir.display());
            Ok(Self::default())
        }
    }

    /// Calendar checking mode for birth dates.
    pub fn date_parsing(&self) -> DateParsing {
        if self.dates.strict {
            DateParsing::Strict
        } else {
            DateParsing::Lenient
        }
    }
}
