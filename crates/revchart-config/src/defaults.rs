//! Default values reproducing the reference chart appearance.

use crate::schema::*;
use revchart_common::DAILY_REVENUE_SUFFIX;

impl Default for Config {
    fn default() -> Self {
        Self {
            chart: ChartStyle::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width_inches: 12.0,
            height_inches: 5.0,
            dpi: 150,
            line_color: "#2563eb".to_string(),
            line_width: 1.5,
            line_alpha: 0.9,
            marker_size: 3.0,
            marker_edge_color: "#ffffff".to_string(),
            marker_edge_width: 0.5,
            fill_alpha: 0.15,
            background_color: "#ffffff".to_string(),
            text_color: "#000000".to_string(),
            rotate_date_labels: true,
            pad_inches: 0.1,
            fonts: FontConfig::default(),
            grid: GridConfig::default(),
        }
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            title_size: 14.0,
            axis_label_size: 10.0,
            tick_label_size: 10.0,
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            line_style: GridLineStyle::Dashed,
            color: "#b0b0b0".to_string(),
            alpha: 0.3,
            line_width: 0.8,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_suffix: DAILY_REVENUE_SUFFIX.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_canvas_is_twelve_by_five_inches_at_150_dpi() {
        let style = ChartStyle::default();
        assert_eq!(style.canvas_size(), (1800, 750));
    }

    #[test]
    fn test_points_to_pixels_at_default_dpi() {
        let style = ChartStyle::default();
        // 1.5pt at 150dpi is 3.125px
        assert_eq!(style.points_to_pixels(style.line_width), 3);
        assert_eq!(style.points_to_pixels(style.fonts.title_size), 29);
        assert_eq!(style.points_to_pixels(0.01), 1);
    }

    #[test]
    fn test_default_grid_is_dashed() {
        let grid = GridConfig::default();
        assert!(grid.enabled);
        assert_eq!(grid.line_style, GridLineStyle::Dashed);
        assert!(grid.line_style.pattern_points().is_some());
        assert!(GridLineStyle::Solid.pattern_points().is_none());
    }
}
