//! Test utilities and shared fixtures for the revchart workspace.
//!
//! Enabled for downstream crates through the `testing` feature.

use crate::types::DailyRevenueRecord;
use chrono::{Duration, NaiveDate};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "testing")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Assert that two floating point numbers are approximately equal within a tolerance.
pub fn assert_approx_eq(left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "assertion failed: `{left}` is not approximately equal to `{right}` (tolerance: {tolerance}, diff: {diff})"
    );
}

/// Revenue record fixtures.
pub mod revenue_fixtures {
    use super::*;

    /// The three-record example: out of order, one per day in early October 2024.
    pub fn october_sample() -> Vec<DailyRevenueRecord> {
        vec![
            DailyRevenueRecord::new("2024-10-01", 100.0),
            DailyRevenueRecord::new("2024-10-03", 50.0),
            DailyRevenueRecord::new("2024-10-02", 75.0),
        ]
    }

    /// `count` consecutive days starting at `start`, with a weekly revenue swing.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
    pub fn daily_series(start: NaiveDate, count: usize) -> Vec<DailyRevenueRecord> {
        (0..count)
            .map(|i| {
                let date = start + Duration::days(i as i64);
                let revenue = 250.0 + (i % 7) as f64 * 40.0 + i as f64 * 1.5;
                DailyRevenueRecord::new(date.format("%Y-%m-%d").to_string(), revenue)
            })
            .collect()
    }

    /// A quarter of data spanning three calendar months.
    pub fn quarter_sample() -> Vec<DailyRevenueRecord> {
        let start = NaiveDate::from_ymd_opt(2024, 10, 1).expect("valid fixture date");
        daily_series(start, 92)
    }
}

/// Property-based testing utilities using proptest.
#[cfg(feature = "testing")]
pub mod property_testing {
    use super::*;
    use proptest::prelude::*;

    fn record_for_day(offset: i64, revenue: f64) -> DailyRevenueRecord {
        let base = NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid base date");
        let date = base + Duration::days(offset);
        DailyRevenueRecord::new(date.format("%Y-%m-%d").to_string(), revenue)
    }

    /// Strategy for generating a record with a date in 2023–2025 and a bounded revenue.
    pub fn record_strategy() -> impl Strategy<Value = DailyRevenueRecord> {
        (0i64..1096, 0.0f64..1_000_000.0).prop_map(|(offset, revenue)| record_for_day(offset, revenue))
    }

    /// Strategy for generating a non-empty record set. Dates may repeat.
    pub fn records_strategy(max_len: usize) -> impl Strategy<Value = Vec<DailyRevenueRecord>> {
        prop::collection::vec(record_strategy(), 1..=max_len)
    }

    /// Strategy for generating a non-empty record set with at most one record per day,
    /// in date order.
    pub fn distinct_day_records_strategy(
        max_len: usize,
    ) -> impl Strategy<Value = Vec<DailyRevenueRecord>> {
        prop::collection::btree_map(0i64..1096, 0.0f64..1_000_000.0, 1..=max_len).prop_map(|days| {
            days.into_iter()
                .map(|(offset, revenue)| record_for_day(offset, revenue))
                .collect()
        })
    }
}
