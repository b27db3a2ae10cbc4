use anvil_dns_cache::CacheEngine;
use anvil_dns_domain::CacheConfig;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Periodic driver for proactive cache expiry.
///
/// Fire-and-forget: each tick calls [`CacheEngine::sweep`], which is
/// idempotent and only holds the cache lock for the expired head run.
pub struct CacheSweeper {
    cache: Arc<CacheEngine>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl CacheSweeper {
    pub fn new(cache: Arc<CacheEngine>, interval_secs: u64) -> Self {
        Self {
            cache,
            interval_secs,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn from_config(cache: Arc<CacheEngine>, config: &CacheConfig) -> Self {
        Self::new(cache, config.sweep_interval_secs)
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Start the background sweep loop.
    pub async fn start(self: Arc<Self>) {
        info!(interval_secs = self.interval_secs, "Starting cache sweep job");

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("CacheSweeper: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let removed = self.cache.sweep();
                        if removed > 0 {
                            info!(
                                removed,
                                cache_size = self.cache.len(),
                                "Sweep cycle completed"
                            );
                        } else {
                            debug!("No expired entries to sweep");
                        }
                    }
                }
            }
        });
    }
}
