//! Graph utility functions and helpers.

use plotters::prelude::RGBColor;
use revchart_common::{parse_hex_color, ChartError, Result};

/// Converts a `#rrggbb` string into a plotters color.
///
/// `field` names the configuration entry in the error.
pub fn to_rgb(field: &str, hex: &str) -> Result<RGBColor> {
    parse_hex_color(hex)
        .map(|(r, g, b)| RGBColor(r, g, b))
        .ok_or_else(|| ChartError::config(format!("{field} must be a #rrggbb color, got {hex:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_rgb() {
        assert_eq!(to_rgb("line", "#2563eb").unwrap(), RGBColor(37, 99, 235));

        let err = to_rgb("chart.line_color", "blue").unwrap_err();
        assert!(err.to_string().contains("chart.line_color"));
    }
}
