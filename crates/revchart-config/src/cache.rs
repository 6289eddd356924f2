//! Thread-safe configuration caching with arc-swap for lock-free reads.

use crate::schema::Config;
use arc_swap::ArcSwap;
use revchart_common::Result;
use std::sync::Arc;

/// Thread-safe configuration cache using arc-swap for lock-free reads.
///
/// Renders take a snapshot with [`ConfigCache::get`] at the start of a batch,
/// so an update never changes the style of a chart already in progress.
pub struct ConfigCache {
    config: ArcSwap<Config>,
}

impl ConfigCache {
    /// Creates a new configuration cache with the given initial configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config: ArcSwap::from_pointee(config),
        }
    }

    /// Gets the current configuration.
    pub fn get(&self) -> Arc<Config> {
        self.config.load_full()
    }

    /// Validates and then atomically replaces the configuration.
    ///
    /// An invalid configuration leaves the cached one untouched.
    pub fn update(&self, config: Config) -> Result<()> {
        config.validate()?;
        self.config.store(Arc::new(config));
        Ok(())
    }
}

impl Default for ConfigCache {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
