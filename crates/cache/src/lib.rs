//! Resolution cache for a DNS resolving proxy.
//!
//! Stores recently resolved `(domain, record type)` → address mappings so
//! repeat queries are answered without contacting an upstream resolver.
//! One mutex guards the combined index + recency structure; `Arc` reference
//! counts decouple entry lifetime from cache membership, so a handle
//! returned by a lookup stays valid while the entry is evicted, removed or
//! swept by another thread.

mod clock;

pub mod engine;
pub mod entry;
pub mod handle;
pub mod key;
pub mod metrics;

pub use engine::{CacheEngine, InsertOutcome};
pub use entry::CacheEntry;
pub use handle::EntryRef;
pub use key::CacheKey;
pub use metrics::{CacheMetrics, CacheMetricsSnapshot};
