use anvil_dns_domain::RecordType;
use compact_str::CompactString;

/// Composite cache key: domain name plus record type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub domain: CompactString,
    pub record_type: RecordType,
}

impl CacheKey {
    #[inline]
    pub fn new(domain: &str, record_type: RecordType) -> Self {
        Self {
            domain: CompactString::from(domain),
            record_type,
        }
    }
}
