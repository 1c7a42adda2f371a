//! Application configuration.
//!
//! Values are resolved in this order, highest first: command-line flags,
//! environment variables, the TOML config file, built-in defaults. Flags are
//! applied by the caller after [`AppConfig::load`].

use crate::backend::BackendChoice;
use crate::catalog::{Catalog, CatalogSnapshot};
use crate::error::{CatalogError, ConfigError};
use crate::links::ContactLink;
use crate::store::SAVED_RECIPES_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

pub const ENV_DATA_DIR: &str = "FLAVOURFIND_DATA_DIR";
pub const ENV_DATASET: &str = "FLAVOURFIND_DATASET";
pub const ENV_LOG: &str = "FLAVOURFIND_LOG";

/// Directory name used under the platform data directory.
pub const APP_DIR_NAME: &str = "flavourfind";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// External dataset to load instead of the bundled one.
    pub dataset_path: Option<PathBuf>,
    /// Pre-built catalog snapshot, preferred over `dataset_path` when it exists.
    pub snapshot_path: Option<PathBuf>,
    /// Where saved recipes are persisted.
    pub data_dir: Option<PathBuf>,
    pub storage_key: String,
    /// Keep saved recipes in memory only.
    pub ephemeral: bool,
    /// Artificial pause before ingredient search results are computed.
    pub search_delay_ms: u64,
    pub log_level: String,
    pub contact_links: Vec<ContactLink>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path: None,
            snapshot_path: None,
            data_dir: None,
            storage_key: SAVED_RECIPES_KEY.to_string(),
            ephemeral: false,
            search_delay_ms: 0,
            log_level: "warn".to_string(),
            contact_links: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Loads the config file at `path` (if any) and applies environment
    /// overrides. A missing file falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.with_env(|name| std::env::var(name).ok())
    }

    /// Reads a TOML config file. A missing file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content, &path.display().to_string()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No config file at '{}', using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    /// Parses TOML. `origin` names the source in error messages.
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Applies environment overrides using `lookup` to read variables.
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|v| !v.trim().is_empty()) {
            self.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(dataset) = lookup(ENV_DATASET).filter(|v| !v.trim().is_empty()) {
            self.dataset_path = Some(PathBuf::from(dataset));
        }
        if let Some(level) = lookup(ENV_LOG).filter(|v| !v.trim().is_empty()) {
            self.log_level = level;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "storage_key",
                message: "must not be empty".to_string(),
            });
        }
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log_level",
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// The persistence directory: the configured one, else the platform data
    /// directory, else `./.flavourfind`.
    pub fn resolved_data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from(format!(".{APP_DIR_NAME}")))
    }

    pub fn backend_choice(&self) -> BackendChoice {
        if self.ephemeral {
            BackendChoice::Memory
        } else {
            BackendChoice::File
        }
    }

    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }

    /// Loads the catalog this config points at.
    ///
    /// An existing snapshot wins; a snapshot that fails to load is logged and
    /// skipped. Otherwise the dataset file is used, else the bundled dataset.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        if let Some(snapshot_path) = self.snapshot_path.as_deref().filter(|p| p.exists()) {
            match CatalogSnapshot::from_file(snapshot_path).and_then(Catalog::from_snapshot) {
                Ok(catalog) => return Ok(catalog),
                Err(e) => warn!("Ignoring catalog snapshot: {}", e),
            }
        }
        match &self.dataset_path {
            Some(path) => Catalog::from_file(path),
            None => Catalog::bundled(),
        }
    }
}
