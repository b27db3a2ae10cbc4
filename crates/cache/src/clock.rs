use std::time::{SystemTime, UNIX_EPOCH};

/// Current time in whole seconds since the UNIX epoch.
///
/// Second resolution matches ttl granularity; an entry expires once the
/// elapsed whole seconds strictly exceed its ttl.
#[inline]
pub(crate) fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
