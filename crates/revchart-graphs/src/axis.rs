//! Axis ranges and tick placement for the revenue chart.
//!
//! The x axis spans the data dates plus a margin and carries one tick per
//! calendar month. The y axis always starts at zero.

use chrono::{Datelike, Duration, Months, NaiveDate};
use plotters::coord::ranged1d::{DefaultFormatting, KeyPointHint, Ranged};
use plotters::coord::types::RangedCoordf64;
use revchart_common::{ChartError, Result, RevenuePoint};
use std::ops::Range;

/// Fraction of the data span added on each side of the x axis.
pub const X_MARGIN_FRACTION: f64 = 0.05;

/// Headroom above the largest revenue value.
pub const Y_HEADROOM_FRACTION: f64 = 0.05;

/// Approximate number of y ticks to aim for.
pub const TARGET_Y_TICKS: f64 = 6.0;

/// Upper bound on the number of y ticks for any range.
pub const MAX_Y_TICKS: usize = 64;

/// Date range of the x axis for date-sorted points.
///
/// Padded on both sides by 5% of the span, and by at least one day so a
/// single-day series still has a non-empty axis.
pub fn date_axis_range(points: &[RevenuePoint]) -> Result<Range<NaiveDate>> {
    let (first, last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) => (first.date, last.date),
        _ => return Err(ChartError::EmptyInput),
    };

    let span_days = (last - first).num_days();
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    let margin = ((span_days as f64 * X_MARGIN_FRACTION).ceil() as i64).max(1);

    let start = first
        .checked_sub_signed(Duration::days(margin))
        .unwrap_or(first);
    let end = last.checked_add_signed(Duration::days(margin)).unwrap_or(last);
    Ok(start..end)
}

/// First day of every calendar month that falls inside `range` (inclusive).
///
/// When no month boundary lies inside the range, `fallback` is the sole tick.
pub fn month_ticks(range: &Range<NaiveDate>, fallback: NaiveDate) -> Vec<NaiveDate> {
    let mut ticks = Vec::new();
    let mut month = NaiveDate::from_ymd_opt(range.start.year(), range.start.month(), 1);

    while let Some(tick) = month {
        if tick > range.end {
            break;
        }
        if tick >= range.start {
            ticks.push(tick);
        }
        month = tick.checked_add_months(Months::new(1));
    }

    if ticks.is_empty() {
        ticks.push(fallback);
    }
    ticks
}

/// Value range of the y axis: zero up to the largest revenue plus headroom.
///
/// The top stays finite for revenue close to `f64::MAX`.
pub fn revenue_axis_range(points: &[RevenuePoint]) -> Range<f64> {
    let max = points.iter().map(|p| p.revenue).fold(0.0, f64::max);
    let top = if max > 0.0 {
        (max * (1.0 + Y_HEADROOM_FRACTION)).min(f64::MAX)
    } else {
        1.0
    };
    0.0..top
}

/// Evenly spaced y ticks from zero, using a 1/2/2.5/5 × 10ⁿ step of at
/// least one dollar.
///
/// At most [`MAX_Y_TICKS`] ticks are returned, all of them finite.
pub fn revenue_ticks(range: &Range<f64>) -> Vec<f64> {
    let span = (range.end - range.start).min(f64::MAX);
    let step = nice_step(span, TARGET_Y_TICKS).max(1.0);
    let limit = range.end + step * 1e-9;

    let mut ticks = Vec::new();
    for i in 0..MAX_Y_TICKS {
        #[allow(clippy::cast_precision_loss)]
        let tick = step.mul_add(i as f64, range.start);
        if !tick.is_finite() || tick > limit {
            break;
        }
        ticks.push(tick);
    }
    ticks
}

/// Rounds `span / target` to a readable step size.
pub fn nice_step(span: f64, target: f64) -> f64 {
    if !(span.is_finite() && span > 0.0) {
        return 1.0;
    }

    let raw = span / target;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;

    let factor = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 2.5 {
        2.5
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

/// A linear axis whose labels sit exactly on precomputed ticks.
///
/// Light key points are empty, so only the ticks are labelled.
#[derive(Clone)]
pub struct TickedAxis {
    scale: RangedCoordf64,
    range: Range<f64>,
    ticks: Vec<f64>,
}

impl TickedAxis {
    /// Creates an axis over `range` labelled at `ticks`.
    pub fn new(range: Range<f64>, ticks: Vec<f64>) -> Self {
        Self {
            scale: range.clone().into(),
            range,
            ticks,
        }
    }

    /// Tick positions.
    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }
}

impl Ranged for TickedAxis {
    type FormatOption = DefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.scale.map(value, limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        if hint.weight().allow_light_points() {
            Vec::new()
        } else {
            self.ticks.clone()
        }
    }

    fn range(&self) -> Range<f64> {
        self.range.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn point(y: i32, m: u32, d: u32, revenue: f64) -> RevenuePoint {
        RevenuePoint {
            date: date(y, m, d),
            revenue,
        }
    }

    #[test]
    fn test_date_range_pads_short_series_by_one_day() {
        let points = [point(2024, 10, 1, 100.0), point(2024, 10, 3, 50.0)];
        let range = date_axis_range(&points).unwrap();

        assert_eq!(range, date(2024, 9, 30)..date(2024, 10, 4));
    }

    #[test]
    fn test_date_range_single_point() {
        let points = [point(2024, 5, 15, 10.0)];
        let range = date_axis_range(&points).unwrap();

        assert_eq!(range, date(2024, 5, 14)..date(2024, 5, 16));
    }

    #[test]
    fn test_date_range_pads_long_series_by_five_percent() {
        let points = [point(2024, 1, 1, 1.0), point(2024, 12, 31, 1.0)];
        let range = date_axis_range(&points).unwrap();

        // 365 day span, 5% rounds up to 19 days
        assert_eq!(range.start, date(2023, 12, 13));
        assert_eq!(range.end, date(2025, 1, 19));
    }

    #[test]
    fn test_date_range_empty_is_error() {
        assert!(matches!(date_axis_range(&[]), Err(ChartError::EmptyInput)));
    }

    #[test]
    fn test_month_ticks_one_per_month() {
        let ticks = month_ticks(&(date(2024, 9, 30)..date(2025, 1, 4)), date(2024, 10, 1));

        assert_eq!(
            ticks,
            vec![
                date(2024, 10, 1),
                date(2024, 11, 1),
                date(2024, 12, 1),
                date(2025, 1, 1)
            ]
        );
    }

    #[test]
    fn test_month_ticks_include_range_start_on_first_of_month() {
        let ticks = month_ticks(&(date(2024, 3, 1)..date(2024, 3, 20)), date(2024, 3, 2));
        assert_eq!(ticks, vec![date(2024, 3, 1)]);
    }

    #[test]
    fn test_month_ticks_fall_back_inside_single_month() {
        let ticks = month_ticks(&(date(2024, 3, 4)..date(2024, 3, 20)), date(2024, 3, 5));
        assert_eq!(ticks, vec![date(2024, 3, 5)]);
    }

    #[test]
    fn test_revenue_range_starts_at_zero() {
        let points = [point(2024, 1, 1, 50_000.0), point(2024, 1, 2, 60_000.0)];
        let range = revenue_axis_range(&points);

        assert_eq!(range.start, 0.0);
        assert!((range.end - 63_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_revenue_range_all_zero() {
        let points = [point(2024, 1, 1, 0.0)];
        assert_eq!(revenue_axis_range(&points), 0.0..1.0);
    }

    #[test]
    fn test_revenue_ticks() {
        assert_eq!(
            revenue_ticks(&(0.0..105.0)),
            vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]
        );
        assert_eq!(revenue_ticks(&(0.0..1.0)), vec![0.0, 1.0]);
    }

    #[test]
    fn test_revenue_range_stays_finite_near_f64_max() {
        let points = [point(2024, 1, 1, f64::MAX), point(2024, 1, 2, 1.0)];
        let range = revenue_axis_range(&points);

        assert_eq!(range.start, 0.0);
        assert_eq!(range.end, f64::MAX);
    }

    #[test]
    fn test_revenue_ticks_are_bounded_for_extreme_ranges() {
        for range in [0.0..f64::MAX, 0.0..f64::INFINITY, 0.0..f64::NAN, 0.0..1e300] {
            let ticks = revenue_ticks(&range);

            assert!(!ticks.is_empty(), "no ticks for {range:?}");
            assert!(ticks.len() <= MAX_Y_TICKS, "{} ticks for {range:?}", ticks.len());
            assert!(ticks.iter().all(|t| t.is_finite()));
        }
    }

    #[test]
    fn test_ticked_axis_labels_only_ticks() {
        use plotters::coord::ranged1d::BoldPoints;

        let axis = TickedAxis::new(0.0..105.0, vec![0.0, 50.0, 100.0]);

        assert_eq!(axis.key_points(BoldPoints(10)), vec![0.0, 50.0, 100.0]);
        assert!(axis.key_points(10usize).is_empty());
        assert_eq!(axis.map(&0.0, (0, 210)), 0);
        assert_eq!(axis.range(), 0.0..105.0);
    }

    #[test]
    fn test_nice_step() {
        assert!((nice_step(105.0, 6.0) - 20.0).abs() < 1e-9);
        assert!((nice_step(63_000.0, 6.0) - 20_000.0).abs() < 1e-6);
        assert!((nice_step(14.0, 6.0) - 2.5).abs() < 1e-9);
        assert_eq!(nice_step(0.0, 6.0), 1.0);
        assert_eq!(nice_step(f64::NAN, 6.0), 1.0);
    }
}
