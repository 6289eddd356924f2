//! Graph manager for rendering several datasets concurrently.

use crate::daily_revenue::DailyRevenueChart;
use futures::future::join_all;
use revchart_common::{ChartArtifact, ChartError, ChartRequest, Result};
use revchart_config::ConfigCache;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Renders batches of daily revenue charts on the blocking thread pool.
///
/// Each request gets its own render context, so one failing dataset does not
/// affect the others.
pub struct GraphManager {
    config: Arc<ConfigCache>,
}

impl GraphManager {
    /// Creates a new graph manager reading its style from `config`.
    pub const fn new(config: Arc<ConfigCache>) -> Self {
        Self { config }
    }

    /// The configuration cache this manager reads from.
    pub fn config(&self) -> &Arc<ConfigCache> {
        &self.config
    }

    /// Renders every request and returns one result per request, in order.
    ///
    /// The outer error is returned only when the current configuration
    /// cannot build a renderer.
    pub async fn generate_all(
        &self,
        requests: Vec<ChartRequest>,
    ) -> Result<Vec<Result<ChartArtifact>>> {
        let snapshot = self.config.get();
        let chart = Arc::new(DailyRevenueChart::new(&snapshot)?);
        debug!(charts = requests.len(), "generating daily revenue charts");

        let tasks = requests.into_iter().map(|request| {
            let chart = Arc::clone(&chart);
            let label = request.dataset_label.clone();
            async move {
                tokio::task::spawn_blocking(move || chart.render(&request))
                    .await
                    .map_err(|e| {
                        ChartError::rendering_with_source(
                            format!("render task for {label} did not complete"),
                            e,
                        )
                    })?
            }
        });

        let results = join_all(tasks).await;

        let failed = results.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            warn!(
                failed,
                total = results.len(),
                "some daily revenue charts failed to render"
            );
        } else {
            info!(total = results.len(), "generated daily revenue charts");
        }

        Ok(results)
    }

    /// Renders a single request.
    pub async fn generate_one(&self, request: ChartRequest) -> Result<ChartArtifact> {
        let mut results = self.generate_all(vec![request]).await?;
        results
            .pop()
            .unwrap_or_else(|| Err(ChartError::rendering("render task produced no result")))
    }
}

impl Default for GraphManager {
    fn default() -> Self {
        Self::new(Arc::new(ConfigCache::default()))
    }
}
