//! Shared formatting and naming helpers.

use chrono::NaiveDate;

/// File name suffix appended to the lower-cased dataset label.
pub const DAILY_REVENUE_SUFFIX: &str = "_daily_revenue.png";

/// Formats an amount as whole US dollars with thousands separators.
///
/// `1234567.8` becomes `"$1,234,568"`.
pub fn format_currency(amount: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Formats a date as abbreviated month and four-digit year, e.g. `"Jan 2024"`.
pub fn format_month_label(date: &NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// Builds the output file name for a dataset label.
pub fn chart_file_name(dataset_label: &str, suffix: &str) -> String {
    format!("{}{}", dataset_label.to_lowercase(), suffix)
}

/// Parses a `#rrggbb` hex color into its components.
pub fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.4), "$999");
        assert_eq!(format_currency(1000.0), "$1,000");
        assert_eq!(format_currency(1_234_567.8), "$1,234,568");
        assert_eq!(format_currency(-2500.0), "-$2,500");
    }

    #[test]
    fn test_format_month_label() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(format_month_label(&date), "Jan 2024");
    }

    #[test]
    fn test_chart_file_name() {
        assert_eq!(
            chart_file_name("DATA1", DAILY_REVENUE_SUFFIX),
            "data1_daily_revenue.png"
        );
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#2563eb"), Some((0x25, 0x63, 0xeb)));
        assert_eq!(parse_hex_color("#FFFFFF"), Some((255, 255, 255)));
        assert_eq!(parse_hex_color("2563eb"), None);
        assert_eq!(parse_hex_color("#ZZ0000"), None);
        assert_eq!(parse_hex_color("#fff"), None);
    }
}
