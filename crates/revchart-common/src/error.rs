//! Error types and utilities for revchart

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for revchart operations
pub type Result<T> = std::result::Result<T, ChartError>;

/// Main error type for chart rendering
#[derive(Error, Debug)]
pub enum ChartError {
    /// A date string could not be parsed as a calendar date
    #[error("Malformed date at record {index}: {value:?}")]
    MalformedDate {
        /// Position of the offending record in the input
        index: usize,
        /// The date text as supplied
        value: String,
    },

    /// No records were supplied
    #[error("Cannot render a chart from an empty record set")]
    EmptyInput,

    /// Directory creation or file write failed
    #[error("Filesystem error at {}: {source}", .path.display())]
    Filesystem {
        /// Directory or file the operation targeted
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Plotting, encoding, or numeric failures surfaced while drawing
    #[error("Rendering error: {message}")]
    Rendering {
        /// What went wrong
        message: String,
        /// Underlying plotting or encoding error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid style configuration or configuration file
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong with the configuration
        message: String,
        /// Underlying parse or I/O error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ChartError {
    /// Create a new malformed date error
    pub fn malformed_date(index: usize, value: impl Into<String>) -> Self {
        Self::MalformedDate {
            index,
            value: value.into(),
        }
    }

    /// Create a new filesystem error for the given path
    pub fn filesystem(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a new rendering error
    pub fn rendering(msg: impl Into<String>) -> Self {
        Self::Rendering {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new rendering error with source
    pub fn rendering_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Rendering {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a rendering error for a revenue value that cannot be plotted
    pub fn invalid_revenue(index: usize, value: f64) -> Self {
        Self::rendering(format!(
            "revenue at record {index} must be a finite, non-negative amount, got {value}"
        ))
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Error conversion implementations for external types

/// Convert from `image::ImageError` to `ChartError`
impl From<image::ImageError> for ChartError {
    fn from(err: image::ImageError) -> Self {
        Self::rendering_with_source("PNG encoding failed", err)
    }
}

/// Convert from `toml::de::Error` to `ChartError`
impl From<toml::de::Error> for ChartError {
    fn from(err: toml::de::Error) -> Self {
        Self::config_with_source("TOML parsing error", err)
    }
}

/// Convert from `toml::ser::Error` to `ChartError`
impl From<toml::ser::Error> for ChartError {
    fn from(err: toml::ser::Error) -> Self {
        Self::config_with_source("TOML serialization error", err)
    }
}

/// Convert from `serde_yaml::Error` to `ChartError`
impl From<serde_yaml::Error> for ChartError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::config_with_source("YAML parsing error", err)
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to `ChartError`
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for ChartError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::rendering_with_source("Chart drawing failed", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_creation() {
        let error = ChartError::malformed_date(2, "not-a-date");
        assert!(error.to_string().contains("record 2"));
        assert!(error.to_string().contains("not-a-date"));

        let empty = ChartError::EmptyInput;
        assert!(empty.to_string().contains("empty"));

        let config_error = ChartError::config("bad dpi");
        assert_eq!(config_error.to_string(), "Configuration error: bad dpi");

        let revenue_error = ChartError::invalid_revenue(4, f64::NAN);
        assert!(revenue_error.to_string().contains("record 4"));
        assert!(revenue_error.to_string().contains("NaN"));
    }

    #[test]
    fn test_filesystem_error_names_path() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "Access denied");
        let error = ChartError::filesystem("/readonly/out", io_error);

        assert!(error.to_string().contains("/readonly/out"));
        assert!(error.to_string().contains("Access denied"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_rendering_error_with_source() {
        let io_error = io::Error::new(io::ErrorKind::Other, "backend closed");
        let error = ChartError::rendering_with_source("Chart drawing failed", io_error);

        assert_eq!(error.to_string(), "Rendering error: Chart drawing failed");
        assert!(error.source().is_some());
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_error = toml::from_str::<toml::Value>("dpi = = 3").unwrap_err();
        let error: ChartError = toml_error.into();

        assert!(matches!(error, ChartError::Config { .. }));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_error_debug_formatting() {
        let error = ChartError::EmptyInput;
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("EmptyInput"));
    }
}
