//! Configuration loading and persistence with atomic file operations.

use crate::schema::Config;
use revchart_common::{ChartError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Serialization format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML, the default.
    Toml,
    /// YAML, chosen for `.yaml` and `.yml` files.
    Yaml,
}

impl ConfigFormat {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Toml,
        }
    }
}

/// Configuration loader with atomic file operations.
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this loader reads from and writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and validates configuration from file.
    ///
    /// Fields missing from the file take their default values.
    pub fn load(&self) -> Result<Config> {
        let contents = std::fs::read_to_string(&self.path)
            .map_err(|e| ChartError::filesystem(&self.path, e))?;

        let config = Self::parse(&contents, ConfigFormat::from_path(&self.path))?;
        config.validate()?;

        debug!(path = %self.path.display(), "loaded chart configuration");
        Ok(config)
    }

    /// Loads configuration from file, falling back to defaults when the file
    /// does not exist.
    pub fn load_or_default(&self) -> Result<Config> {
        if self.path.exists() {
            self.load()
        } else {
            debug!(path = %self.path.display(), "no configuration file, using defaults");
            Ok(Config::default())
        }
    }

    /// Parses configuration text in the given format without validating it.
    pub fn parse(contents: &str, format: ConfigFormat) -> Result<Config> {
        match format {
            ConfigFormat::Toml => Ok(toml::from_str(contents)?),
            ConfigFormat::Yaml => Ok(serde_yaml::from_str(contents)?),
        }
    }

    /// Saves configuration to file atomically.
    ///
    /// The file is written to a temporary sibling and renamed into place, so
    /// readers never observe a half-written configuration.
    pub fn save(&self, config: &Config) -> Result<()> {
        config.validate()?;

        let contents = match ConfigFormat::from_path(&self.path) {
            ConfigFormat::Toml => toml::to_string_pretty(config)?,
            ConfigFormat::Yaml => serde_yaml::to_string(config)?,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir).map_err(|e| ChartError::filesystem(&dir, e))?;

        let mut tmp =
            tempfile::NamedTempFile::new_in(&dir).map_err(|e| ChartError::filesystem(&dir, e))?;
        tmp.write_all(contents.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| ChartError::filesystem(tmp.path(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| ChartError::filesystem(&self.path, e.error))?;

        debug!(path = %self.path.display(), "saved chart configuration");
        Ok(())
    }
}
