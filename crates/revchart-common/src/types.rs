//! Record and artifact types shared across the workspace.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{ChartError, Result};

/// One daily revenue observation as supplied by a caller.
///
/// The date is kept as the raw ISO-8601 string and only validated when the
/// record is parsed into a [`RevenuePoint`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRevenueRecord {
    /// Calendar date, e.g. `"2024-10-15"`.
    pub date: String,
    /// Revenue for that day in USD.
    pub revenue: f64,
}

impl DailyRevenueRecord {
    /// Creates a new record.
    pub fn new(date: impl Into<String>, revenue: f64) -> Self {
        Self {
            date: date.into(),
            revenue,
        }
    }

    /// Parses this record into a typed point.
    ///
    /// `index` is the record's position in the caller's input and is carried
    /// into any error.
    pub fn parse(&self, index: usize) -> Result<RevenuePoint> {
        let date = parse_calendar_date(&self.date)
            .ok_or_else(|| ChartError::malformed_date(index, &self.date))?;

        if !self.revenue.is_finite() || self.revenue < 0.0 {
            return Err(ChartError::invalid_revenue(index, self.revenue));
        }

        Ok(RevenuePoint {
            date,
            revenue: self.revenue,
        })
    }
}

/// A validated revenue observation ready for plotting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    /// Calendar date.
    pub date: NaiveDate,
    /// Revenue for that day in USD.
    pub revenue: f64,
}

/// Everything a single render call needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartRequest {
    /// Records in any order.
    pub records: Vec<DailyRevenueRecord>,
    /// Directory the image is written into.
    pub output_directory: PathBuf,
    /// Short dataset identifier, e.g. `DATA1`.
    pub dataset_label: String,
}

impl ChartRequest {
    /// Creates a new chart request.
    pub fn new(
        records: Vec<DailyRevenueRecord>,
        output_directory: impl Into<PathBuf>,
        dataset_label: impl Into<String>,
    ) -> Self {
        Self {
            records,
            output_directory: output_directory.into(),
            dataset_label: dataset_label.into(),
        }
    }
}

/// A chart image that has been fully written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChartArtifact {
    /// Location of the written PNG.
    pub file_path: PathBuf,
}

impl ChartArtifact {
    /// Path of the written file.
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl fmt::Display for ChartArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_path.display())
    }
}

impl From<ChartArtifact> for String {
    fn from(artifact: ChartArtifact) -> Self {
        artifact.to_string()
    }
}

/// Parses an ISO-8601 calendar date.
///
/// A trailing time component (`T08:00:00` or ` 08:00:00`) is accepted and
/// discarded.
pub fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|datetime| datetime.date())
}
