//! Configuration schema definitions using serde.

use serde::{Deserialize, Serialize};

/// Points per inch; sizes in this schema are expressed in points.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Main configuration structure for revchart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Chart styling.
    pub chart: ChartStyle,
    /// Output naming.
    pub output: OutputConfig,
}

/// Visual contract of the daily revenue chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    /// Figure width in inches before cropping.
    pub width_inches: f64,
    /// Figure height in inches before cropping.
    pub height_inches: f64,
    /// Pixels per inch.
    pub dpi: u32,
    /// Series line color, `#rrggbb`.
    pub line_color: String,
    /// Series line width in points.
    pub line_width: f64,
    /// Series line opacity.
    pub line_alpha: f64,
    /// Marker diameter in points.
    pub marker_size: f64,
    /// Marker outline color, `#rrggbb`.
    pub marker_edge_color: String,
    /// Marker outline width in points.
    pub marker_edge_width: f64,
    /// Opacity of the area filled beneath the line.
    pub fill_alpha: f64,
    /// Canvas background color, `#rrggbb`.
    pub background_color: String,
    /// Axis, label, and title text color, `#rrggbb`.
    pub text_color: String,
    /// Rotate x-axis date labels so long month names do not collide.
    pub rotate_date_labels: bool,
    /// Whitespace kept around the content when cropping, in inches.
    pub pad_inches: f64,
    /// Font settings.
    pub fonts: FontConfig,
    /// Background grid settings.
    pub grid: GridConfig,
}

impl ChartStyle {
    /// Pixels per point at the configured DPI.
    pub fn pixels_per_point(&self) -> f64 {
        f64::from(self.dpi) / POINTS_PER_INCH
    }

    /// Converts a size in points to whole pixels, never less than one.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn points_to_pixels(&self, points: f64) -> u32 {
        (points * self.pixels_per_point()).round().max(1.0) as u32
    }

    /// Converts a length in inches to whole pixels.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn inches_to_pixels(&self, inches: f64) -> u32 {
        (inches * f64::from(self.dpi)).round().max(0.0) as u32
    }

    /// Canvas size in pixels before cropping.
    pub fn canvas_size(&self) -> (u32, u32) {
        (
            self.inches_to_pixels(self.width_inches),
            self.inches_to_pixels(self.height_inches),
        )
    }
}

/// Font configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Font family name.
    pub family: String,
    /// Title size in points.
    pub title_size: f64,
    /// Axis description size in points.
    pub axis_label_size: f64,
    /// Tick label size in points.
    pub tick_label_size: f64,
}

/// Grid line configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Whether the grid is drawn at all.
    pub enabled: bool,
    /// Stroke pattern.
    pub line_style: GridLineStyle,
    /// Grid color, `#rrggbb`.
    pub color: String,
    /// Grid opacity.
    pub alpha: f64,
    /// Grid line width in points.
    pub line_width: f64,
}

/// Grid line styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridLineStyle {
    /// Continuous line.
    Solid,
    /// Long dashes.
    Dashed,
    /// Short dots.
    Dotted,
}

impl GridLineStyle {
    /// Dash and gap lengths in points, or `None` for a continuous line.
    pub const fn pattern_points(self) -> Option<(f64, f64)> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some((3.7, 1.6)),
            Self::Dotted => Some((1.0, 1.65)),
        }
    }
}

/// Output naming configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Appended to the lower-cased dataset label to form the file name.
    pub file_suffix: String,
}
