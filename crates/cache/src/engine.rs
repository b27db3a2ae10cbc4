use crate::clock;
use crate::entry::CacheEntry;
use crate::handle::EntryRef;
use crate::key::CacheKey;
use crate::metrics::CacheMetrics;
use anvil_dns_domain::{CacheConfig, DomainError, RecordType};
use lru::LruCache;
use rustc_hash::FxBuildHasher;
use std::net::IpAddr;
use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// Outcome of a successful insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new entry was stored, possibly evicting the recency head.
    Stored,
    /// A live entry already exists for the key; it was left untouched.
    AlreadyCached,
    /// The cache is disabled; nothing was stored.
    Disabled,
}

/// Concurrent, size-bounded, TTL-aware resolution cache.
///
/// The index and the recency list are one structure: an unbounded
/// [`LruCache`] guarded by a single mutex. `put` appends at the tail,
/// `peek` looks up without reordering, `promote` is the explicit touch and
/// `pop_lru` takes the head — the oldest-inserted-or-touched entry, which
/// is always the eviction and sweep candidate.
///
/// Entries are shared as `Arc`s: the map holds one strong reference, every
/// [`EntryRef`] handed out by [`get`](Self::get) holds another. An entry is
/// freed when the last reference drops, which is necessarily after it has
/// been unlinked, so freeing never happens under the lock.
pub struct CacheEngine {
    entries: Mutex<LruCache<CacheKey, Arc<CacheEntry>, FxBuildHasher>>,
    capacity: usize,
    metrics: Arc<CacheMetrics>,
}

impl CacheEngine {
    /// Create an engine bounded to `capacity` live entries.
    ///
    /// Capacity 0 is the permanent disabled state: inserts succeed without
    /// storing, lookups return nothing, sweeps do nothing.
    pub fn new(capacity: usize) -> Self {
        info!(capacity, "Initializing resolution cache");

        Self {
            entries: Mutex::new(LruCache::unbounded_with_hasher(FxBuildHasher)),
            capacity,
            metrics: Arc::new(CacheMetrics::default()),
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.effective_capacity())
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_disabled(&self) -> bool {
        self.capacity == 0
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        if self.is_disabled() {
            return 0;
        }
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn metrics(&self) -> Arc<CacheMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Store a freshly resolved record.
    ///
    /// The first insert for a key wins: a live entry is never overwritten
    /// and the duplicate insert succeeds as a no-op. An expired entry under
    /// the same key is unlinked and replaced. When the new entry pushes the
    /// live count past capacity, the recency head is evicted — at most one
    /// eviction per insert.
    pub fn insert(
        &self,
        domain: &str,
        record_type: RecordType,
        address: IpAddr,
        ttl: u32,
    ) -> Result<InsertOutcome, DomainError> {
        self.insert_at(clock::now_secs(), domain, record_type, address, ttl)
    }

    pub(crate) fn insert_at(
        &self,
        now: u64,
        domain: &str,
        record_type: RecordType,
        address: IpAddr,
        ttl: u32,
    ) -> Result<InsertOutcome, DomainError> {
        if self.is_disabled() {
            return Ok(InsertOutcome::Disabled);
        }

        if !record_type.matches(&address) {
            return Err(DomainError::AddressFamilyMismatch { record_type });
        }

        let key = CacheKey::new(domain, record_type);
        let mut entries = self.entries.lock().unwrap();

        match entries.peek(&key).map(|existing| existing.is_expired_at(now)) {
            Some(false) => return Ok(InsertOutcome::AlreadyCached),
            Some(true) => {
                // Expired under the same key: unlink before storing the
                // replacement, so the uniqueness invariant never wobbles.
                entries.pop(&key);
                self.metrics.lazy_expirations.fetch_add(1, Ordering::Relaxed);
            }
            None => {}
        }

        let entry = Arc::new(CacheEntry::new(key.clone(), address, ttl, now));
        entries.put(key, entry);
        self.metrics.insertions.fetch_add(1, Ordering::Relaxed);

        if entries.len() > self.capacity {
            if let Some((evicted, _)) = entries.pop_lru() {
                self.metrics.evictions.fetch_add(1, Ordering::Relaxed);
                debug!(
                    domain = %evicted.domain,
                    record_type = %evicted.record_type,
                    "Evicted recency head"
                );
            }
        }
        drop(entries);

        debug!(domain = %domain, record_type = %record_type, ttl, "Inserted into cache");
        Ok(InsertOutcome::Stored)
    }

    /// Look up a live entry, returning a borrow that outlives eviction.
    ///
    /// An expired match is unlinked on the spot (lazy expiry) and reported
    /// as a miss. A hit does not change the entry's recency position; call
    /// [`touch`](Self::touch) afterwards for access-order eviction.
    pub fn get(&self, domain: &str, record_type: RecordType) -> Option<EntryRef> {
        self.get_at(clock::now_secs(), domain, record_type)
    }

    pub(crate) fn get_at(
        &self,
        now: u64,
        domain: &str,
        record_type: RecordType,
    ) -> Option<EntryRef> {
        if self.is_disabled() {
            return None;
        }

        let key = CacheKey::new(domain, record_type);
        let mut entries = self.entries.lock().unwrap();

        let found = entries
            .peek(&key)
            .map(|entry| (Arc::clone(entry), entry.is_expired_at(now)));

        match found {
            None => {
                self.metrics.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
            Some((_, true)) => {
                // Lazy expiry: unlink now, memory is freed once the last
                // outstanding borrow drops.
                entries.pop(&key);
                self.metrics.misses.fetch_add(1, Ordering::Relaxed);
                self.metrics.lazy_expirations.fetch_add(1, Ordering::Relaxed);
                debug!(domain = %domain, record_type = %record_type, "Dropped expired entry on lookup");
                None
            }
            Some((entry, false)) => {
                self.metrics.hits.fetch_add(1, Ordering::Relaxed);
                Some(EntryRef::new(entry))
            }
        }
    }

    /// Mark an entry most-recently-used.
    ///
    /// No-op unless this exact entry is still linked; an entry re-inserted
    /// under the same key after eviction is a different entry and is left
    /// alone. Does not refresh the ttl.
    pub fn touch(&self, handle: &EntryRef) {
        if self.is_disabled() {
            return;
        }

        let mut entries = self.entries.lock().unwrap();
        let linked = entries
            .peek(handle.entry.key())
            .is_some_and(|current| Arc::ptr_eq(current, &handle.entry));
        if linked {
            entries.promote(handle.entry.key());
        }
    }

    /// Unlink an entry explicitly.
    ///
    /// The caller's handle stays readable; the memory is freed once every
    /// outstanding borrow has been dropped.
    pub fn remove(&self, handle: &EntryRef) {
        if self.is_disabled() {
            return;
        }

        let mut entries = self.entries.lock().unwrap();
        let linked = entries
            .peek(handle.entry.key())
            .is_some_and(|current| Arc::ptr_eq(current, &handle.entry));
        if linked {
            entries.pop(handle.entry.key());
        }
    }

    /// Proactively drop expired entries from the recency head.
    ///
    /// Walks from the head and stops at the first non-expired entry, so the
    /// cost is proportional to the expired run, not the cache size. An
    /// expired entry sitting behind a live one stays until a lookup or a
    /// later sweep catches it; recency order only approximates expiry
    /// order. Idempotent and safe to fire from any thread.
    pub fn sweep(&self) -> usize {
        self.sweep_at(clock::now_secs())
    }

    pub(crate) fn sweep_at(&self, now: u64) -> usize {
        if self.is_disabled() {
            return 0;
        }

        let mut removed: usize = 0;
        let mut entries = self.entries.lock().unwrap();
        while entries
            .peek_lru()
            .is_some_and(|(_, entry)| entry.is_expired_at(now))
        {
            entries.pop_lru();
            removed += 1;
        }
        drop(entries);

        if removed > 0 {
            self.metrics
                .sweep_removals
                .fetch_add(removed as u64, Ordering::Relaxed);
            debug!(removed, "Sweep dropped expired entries");
        }
        removed
    }

    /// Unlink every entry.
    ///
    /// Outstanding handles keep their entries alive until dropped, so this
    /// is safe to call while other threads still hold borrows.
    pub fn clear(&self) {
        if self.is_disabled() {
            return;
        }

        let mut entries = self.entries.lock().unwrap();
        let dropped = entries.len();
        entries.clear();
        drop(entries);

        info!(dropped, "Cache cleared");
    }
}
