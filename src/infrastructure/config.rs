//! Configuration management

use crate::domain::DividerToken;
use crate::error::{PrintDividerError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "print-divider";
const CONFIG_FILE: &str = "config.toml";

/// Global print-divider settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DividerConfig {
    #[serde(default)]
    pub token: DividerToken,

    /// When the token was last changed through `configure`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl DividerConfig {
    /// Create a config holding the given token
    pub fn new(token: DividerToken) -> Self {
        DividerConfig {
            token,
            updated: None,
        }
    }

    /// Replace the token and stamp the change time
    pub fn set_token(&mut self, token: DividerToken) {
        self.token = token;
        self.updated = Some(Utc::now());
    }
}

/// Abstract storage for the global configuration
pub trait ConfigStore {
    /// Load configuration, falling back to defaults when nothing is stored
    fn load(&self) -> Result<DividerConfig>;

    /// Persist configuration
    fn save(&self, config: &DividerConfig) -> Result<()>;
}

/// TOML file implementation of ConfigStore
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    /// Create a store backed by the given file
    pub fn new(path: PathBuf) -> Self {
        FileConfigStore { path }
    }

    /// Store in the platform config directory, e.g.
    /// `~/.config/print-divider/config.toml` on Linux
    pub fn default_location() -> Result<Self> {
        Ok(FileConfigStore::new(Self::default_path()?))
    }

    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .ok_or_else(|| {
                PrintDividerError::Config(
                    "Could not determine the user configuration directory; use --config <PATH>"
                        .to_string(),
                )
            })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Result<DividerConfig> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no config file, using defaults");
                return Ok(DividerConfig::default());
            }
            Err(e) => return Err(PrintDividerError::Io(e)),
        };

        toml::from_str(&contents).map_err(|e| {
            PrintDividerError::Config(format!(
                "Failed to parse {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    fn save(&self, config: &DividerConfig) -> Result<()> {
        // Ensure the config directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = toml::to_string_pretty(config)?;
        fs::write(&self.path, contents)?;

        tracing::debug!(path = %self.path.display(), "config saved");
        Ok(())
    }
}
