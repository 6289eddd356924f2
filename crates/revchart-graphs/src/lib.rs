//! # Revchart Graphs
//!
//! Renders daily revenue records as a line chart PNG.
//!
//! Rendering is synchronous and every call owns its own pixel buffer, so the
//! renderer can be shared across threads. [`GraphManager`] runs several
//! renders concurrently for async callers.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod axis;
pub mod context;
pub mod daily_revenue;
pub mod manager;
pub mod traits;
pub mod utils;

pub use axis::*;
pub use context::*;
pub use daily_revenue::*;
pub use manager::*;
pub use traits::*;
pub use utils::*;

use revchart_common::{DailyRevenueRecord, Result};
use std::path::Path;

/// Renders `records` with the default style and writes
/// `{output_directory}/{lowercase dataset_label}_daily_revenue.png`.
///
/// Returns the written path. Records may be in any order. Nothing is written
/// when the input is empty, a date is malformed, or drawing fails.
pub fn render_daily_revenue_chart(
    records: &[DailyRevenueRecord],
    output_directory: impl AsRef<Path>,
    dataset_label: &str,
) -> Result<String> {
    DailyRevenueChart::default()
        .render_to_file(records, output_directory.as_ref(), dataset_label)
        .map(String::from)
}
