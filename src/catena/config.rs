use crate::error::{CatenaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";

/// Used when neither the command line nor the config names a database.
pub const DEFAULT_DATABASE: &str = "commentaries.db";

/// How lookup results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Markdown rendered with terminal styling.
    #[default]
    Terminal,
    /// Raw Markdown.
    Markdown,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Terminal => "terminal",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "Unknown format: {other} (expected terminal, markdown or json)"
            )),
        }
    }
}

/// Configuration for catena, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatenaConfig {
    /// Path to the commentary database
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,

    #[serde(default)]
    pub format: OutputFormat,
}

impl CatenaConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: CatenaConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// The database to open: `explicit` (flag or environment) wins over the config file.
    pub fn database_path(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.database.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE))
    }

    /// Reads a key as a display string.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "database" => Ok(self
                .database
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| format!("{DEFAULT_DATABASE} (default)"))),
            "format" => Ok(self.format.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    /// Sets a key from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "database" => {
                self.database = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "format" => {
                self.format = value.parse().map_err(CatenaError::Config)?;
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["database", "format"]
    }
}

fn unknown_key(key: &str) -> CatenaError {
    CatenaError::Config(format!(
        "Unknown config key: {key} (expected one of: {})",
        CatenaConfig::keys().join(", ")
    ))
}
