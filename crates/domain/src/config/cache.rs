use serde::{Deserialize, Serialize};

/// Resolution cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Enable the resolution cache (default: true)
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Maximum number of live entries (default: 10000).
    /// 0 leaves the cache permanently disabled.
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,

    /// Seconds between proactive expiry sweeps (default: 60)
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_secs: u64,
}

impl CacheConfig {
    /// Capacity the engine is built with; 0 when the cache is disabled.
    pub fn effective_capacity(&self) -> usize {
        if self.enabled {
            self.max_entries
        } else {
            0
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            max_entries: default_max_entries(),
            sweep_interval_secs: default_sweep_interval(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_max_entries() -> usize {
    10_000
}

fn default_sweep_interval() -> u64 {
    60
}
