//! Graph renderer trait shared by chart types.

use revchart_common::{ChartArtifact, Result};
use std::path::Path;

/// A chart type that can turn its input data into a PNG image.
///
/// Implementations are synchronous and own no drawing state between calls,
/// so one renderer can serve many threads at once.
pub trait GraphRenderer: Send + Sync {
    /// The type of data this renderer expects.
    type Data: ?Sized;

    /// Renders `data` and writes it under `output_directory`, returning the
    /// written file.
    fn render_to_file(
        &self,
        data: &Self::Data,
        output_directory: &Path,
        dataset_label: &str,
    ) -> Result<ChartArtifact>;

    /// Renders `data` into encoded PNG bytes without touching the filesystem.
    fn render_to_bytes(&self, data: &Self::Data, dataset_label: &str) -> Result<Vec<u8>>;

    /// Gets the name of this graph type.
    fn name(&self) -> &'static str;

    /// Gets the description of this graph type.
    fn description(&self) -> &'static str;
}
