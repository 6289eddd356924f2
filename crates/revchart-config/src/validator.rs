//! Runtime validation of chart configuration.

use crate::schema::{ChartStyle, Config};
use revchart_common::{parse_hex_color, ChartError, Result};

/// Largest accepted DPI.
pub const MAX_DPI: u32 = 1200;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    pub fn validate(config: &Config) -> Result<()> {
        Self::validate_style(&config.chart)?;

        let suffix = &config.output.file_suffix;
        if !suffix.to_ascii_lowercase().ends_with(".png") {
            return Err(ChartError::config(format!(
                "output.file_suffix must end in .png, got {suffix:?}"
            )));
        }
        if suffix.contains(['/', '\\']) {
            return Err(ChartError::config(
                "output.file_suffix must not contain path separators",
            ));
        }

        Ok(())
    }

    /// Validates the chart style on its own.
    pub fn validate_style(style: &ChartStyle) -> Result<()> {
        if style.dpi == 0 || style.dpi > MAX_DPI {
            return Err(ChartError::config(format!(
                "chart.dpi must be between 1 and {MAX_DPI}, got {}",
                style.dpi
            )));
        }

        for (field, value) in [
            ("chart.width_inches", style.width_inches),
            ("chart.height_inches", style.height_inches),
            ("chart.line_width", style.line_width),
            ("chart.marker_size", style.marker_size),
            ("chart.fonts.title_size", style.fonts.title_size),
            ("chart.fonts.axis_label_size", style.fonts.axis_label_size),
            ("chart.fonts.tick_label_size", style.fonts.tick_label_size),
            ("chart.grid.line_width", style.grid.line_width),
        ] {
            require_positive(field, value)?;
        }

        for (field, value) in [
            ("chart.marker_edge_width", style.marker_edge_width),
            ("chart.pad_inches", style.pad_inches),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::config(format!(
                    "{field} must be zero or positive, got {value}"
                )));
            }
        }

        for (field, value) in [
            ("chart.line_alpha", style.line_alpha),
            ("chart.fill_alpha", style.fill_alpha),
            ("chart.grid.alpha", style.grid.alpha),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ChartError::config(format!(
                    "{field} must be within [0, 1], got {value}"
                )));
            }
        }

        for (field, value) in [
            ("chart.line_color", &style.line_color),
            ("chart.marker_edge_color", &style.marker_edge_color),
            ("chart.background_color", &style.background_color),
            ("chart.text_color", &style.text_color),
            ("chart.grid.color", &style.grid.color),
        ] {
            if parse_hex_color(value).is_none() {
                return Err(ChartError::config(format!(
                    "{field} must be a #rrggbb color, got {value:?}"
                )));
            }
        }

        if style.fonts.family.trim().is_empty() {
            return Err(ChartError::config("chart.fonts.family cannot be empty"));
        }

        Ok(())
    }
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        ConfigValidator::validate(self)
    }
}

fn require_positive(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ChartError::config(format!(
            "{field} must be a positive number, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_dpi() {
        let mut config = Config::default();
        config.chart.dpi = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("chart.dpi"));
    }

    #[test]
    fn test_rejects_alpha_out_of_range() {
        let mut config = Config::default();
        config.chart.fill_alpha = 1.5;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("chart.fill_alpha"));
    }

    #[test]
    fn test_rejects_bad_color() {
        let mut config = Config::default();
        config.chart.grid.color = "grey".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("chart.grid.color"));
    }

    #[test]
    fn test_rejects_non_png_suffix() {
        let mut config = Config::default();
        config.output.file_suffix = "_daily_revenue.jpg".to_string();
        assert!(config.validate().is_err());

        config.output.file_suffix = "/../escape.png".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_nan_sizes() {
        let mut config = Config::default();
        config.chart.line_width = f64::NAN;
        assert!(config.validate().is_err());
    }
}
