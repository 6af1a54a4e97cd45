use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SheetStatsError};

use super::Config;
use super::validation::validate_config_semantics;

/// Default config file name looked up in the working directory.
pub const LOCAL_CONFIG_NAME: &str = ".sheetstats.toml";

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location, falling back to the
    /// built-in defaults when no config file exists.
    ///
    /// # Errors
    /// Returns an error if an existing config file cannot be read or
    /// parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

/// Config loader reading from the filesystem.
#[derive(Debug, Clone, Default)]
pub struct FileConfigLoader {
    base_dir: Option<PathBuf>,
}

impl FileConfigLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self { base_dir: None }
    }

    /// Looks up the default config file in `dir` instead of the working
    /// directory.
    #[must_use]
    pub fn with_base_dir(mut self, dir: PathBuf) -> Self {
        self.base_dir = Some(dir);
        self
    }

    fn default_path(&self) -> PathBuf {
        self.base_dir.as_ref().map_or_else(
            || PathBuf::from(LOCAL_CONFIG_NAME),
            |dir| dir.join(LOCAL_CONFIG_NAME),
        )
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load(&self) -> Result<Config> {
        let path = self.default_path();
        if path.exists() {
            self.load_from_path(&path)
        } else {
            Ok(Config::default())
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|source| SheetStatsError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content)?;
        validate_config_semantics(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
