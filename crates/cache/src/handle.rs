use crate::clock;
use crate::entry::CacheEntry;
use anvil_dns_domain::RecordType;
use std::net::IpAddr;
use std::sync::Arc;

/// Borrowed view of a cache entry.
///
/// Holding an `EntryRef` keeps the entry's memory alive even if another
/// thread evicts, removes or sweeps it out of the cache in the meantime.
/// Dropping the handle is the release; a clone is one more borrow.
#[derive(Clone, Debug)]
pub struct EntryRef {
    pub(crate) entry: Arc<CacheEntry>,
}

impl EntryRef {
    pub(crate) fn new(entry: Arc<CacheEntry>) -> Self {
        Self { entry }
    }

    pub fn domain(&self) -> &str {
        self.entry.domain()
    }

    pub fn record_type(&self) -> RecordType {
        self.entry.record_type()
    }

    pub fn address(&self) -> IpAddr {
        self.entry.address()
    }

    pub fn ttl(&self) -> u32 {
        self.entry.ttl()
    }

    pub fn inserted_at(&self) -> u64 {
        self.entry.inserted_at()
    }

    /// Seconds left before this entry expires; exactly 0 once expired.
    pub fn remaining_ttl(&self) -> u32 {
        self.entry.remaining_ttl_at(clock::now_secs())
    }

    pub fn is_expired(&self) -> bool {
        self.entry.is_expired_at(clock::now_secs())
    }
}
