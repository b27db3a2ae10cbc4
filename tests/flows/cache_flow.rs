//! End-to-end cache flows: the paths the resolution pipeline takes on
//! every query and every upstream answer.

#[path = "../common/fixtures.rs"]
mod fixtures;

use anvil_dns_cache::{CacheEngine, InsertOutcome};
use anvil_dns_domain::{validate_domain_name, Config, RecordType};
use fixtures::{v4, v6};

#[test]
fn test_resolution_roundtrip() {
    let engine = CacheEngine::new(128);

    // Upstream answered: populate.
    let outcome = engine
        .insert("www.example.com", RecordType::A, v4(10), 300)
        .unwrap();
    assert_eq!(outcome, InsertOutcome::Stored);

    // Next query short-circuits upstream.
    let handle = engine.get("www.example.com", RecordType::A).unwrap();
    assert_eq!(handle.address(), v4(10));
    assert!(handle.remaining_ttl() <= 300);
    assert!(!handle.is_expired());

    // Unknown names still miss.
    assert!(engine.get("other.example.com", RecordType::A).is_none());
    assert!(engine.get("www.example.com", RecordType::AAAA).is_none());
}

#[test]
fn test_capacity_two_eviction_order() {
    let engine = CacheEngine::new(2);
    engine.insert("a.example", RecordType::A, v4(1), 60).unwrap();
    engine.insert("b.example", RecordType::A, v4(2), 60).unwrap();
    engine.insert("c.example", RecordType::A, v4(3), 60).unwrap();

    assert_eq!(engine.len(), 2);
    assert!(engine.get("a.example", RecordType::A).is_none());
    assert!(engine.get("b.example", RecordType::A).is_some());
    assert!(engine.get("c.example", RecordType::A).is_some());
}

#[test]
fn test_duplicate_insert_keeps_first_answer() {
    let engine = CacheEngine::new(128);
    engine.insert("dup.example", RecordType::A, v4(1), 60).unwrap();

    let outcome = engine
        .insert("dup.example", RecordType::A, v4(2), 600)
        .unwrap();
    assert_eq!(outcome, InsertOutcome::AlreadyCached);
    assert_eq!(engine.len(), 1);

    let handle = engine.get("dup.example", RecordType::A).unwrap();
    assert_eq!(handle.address(), v4(1));
    assert_eq!(handle.ttl(), 60);
}

#[test]
fn test_touch_converts_to_access_order() {
    let engine = CacheEngine::new(2);
    engine.insert("x.example", RecordType::A, v4(1), 60).unwrap();
    engine.insert("k.example", RecordType::A, v4(2), 60).unwrap();

    let handle = engine.get("x.example", RecordType::A).unwrap();
    engine.touch(&handle);

    // x was the insertion-order eviction candidate; after the touch the
    // displaced neighbour goes instead.
    engine.insert("y.example", RecordType::A, v4(3), 60).unwrap();
    assert!(engine.get("x.example", RecordType::A).is_some());
    assert!(engine.get("k.example", RecordType::A).is_none());
}

#[test]
fn test_remove_then_reinsert() {
    let engine = CacheEngine::new(128);
    engine.insert("x.example", RecordType::A, v4(1), 60).unwrap();

    let handle = engine.get("x.example", RecordType::A).unwrap();
    engine.remove(&handle);
    assert!(engine.get("x.example", RecordType::A).is_none());

    // The removed borrow still reads, and the key is free for a new entry.
    assert_eq!(handle.address(), v4(1));
    let outcome = engine
        .insert("x.example", RecordType::A, v4(9), 60)
        .unwrap();
    assert_eq!(outcome, InsertOutcome::Stored);
    let fresh = engine.get("x.example", RecordType::A).unwrap();
    assert_eq!(fresh.address(), v4(9));
}

#[test]
fn test_clear_empties_every_key() {
    let engine = CacheEngine::new(128);
    for i in 0..20u8 {
        engine
            .insert(&format!("host{i}.example"), RecordType::A, v4(i), 60)
            .unwrap();
    }
    let held = engine.get("host3.example", RecordType::A).unwrap();

    engine.clear();

    assert_eq!(engine.len(), 0);
    for i in 0..20u8 {
        assert!(engine
            .get(&format!("host{i}.example"), RecordType::A)
            .is_none());
    }

    // Teardown does not tear the borrow out from under us.
    assert_eq!(held.domain(), "host3.example");
    assert_eq!(held.address(), v4(3));
}

#[test]
fn test_mixed_families() {
    let engine = CacheEngine::new(128);
    engine
        .insert("dual.example", RecordType::A, v4(1), 60)
        .unwrap();
    engine
        .insert("dual.example", RecordType::AAAA, v6(1), 60)
        .unwrap();

    assert_eq!(engine.len(), 2);
    assert_eq!(
        engine.get("dual.example", RecordType::A).unwrap().address(),
        v4(1)
    );
    assert_eq!(
        engine
            .get("dual.example", RecordType::AAAA)
            .unwrap()
            .address(),
        v6(1)
    );

    // Family mismatch is rejected before anything is stored.
    assert!(engine
        .insert("bad.example", RecordType::A, v6(2), 60)
        .is_err());
    assert!(engine.get("bad.example", RecordType::A).is_none());
}

#[test]
fn test_wire_boundary_parsing() {
    let engine = CacheEngine::new(128);

    // The resolution pipeline validates the name and maps wire TYPE +
    // RDATA before inserting.
    validate_domain_name("wire.example").unwrap();
    let record_type = RecordType::from_wire(1).unwrap();
    let address = record_type.parse_address(&[192, 0, 2, 7]).unwrap();
    engine
        .insert("wire.example", record_type, address, 120)
        .unwrap();
    assert_eq!(
        engine.get("wire.example", RecordType::A).unwrap().address(),
        v4(7)
    );

    // Unsupported types and bad RDATA lengths never reach the cache.
    assert!(RecordType::from_wire(5).is_err());
    assert!(RecordType::AAAA.parse_address(&[192, 0, 2, 7]).is_err());
}

#[test]
fn test_engine_from_config() {
    let config = Config::load(None).unwrap();
    let engine = CacheEngine::from_config(&config.cache);
    assert_eq!(engine.capacity(), 10_000);

    engine.insert("x.example", RecordType::A, v4(1), 60).unwrap();
    assert!(engine.get("x.example", RecordType::A).is_some());
}

#[test]
fn test_disabled_cache_flows() {
    let engine = CacheEngine::new(0);

    let outcome = engine
        .insert("x.example", RecordType::A, v4(1), 60)
        .unwrap();
    assert_eq!(outcome, InsertOutcome::Disabled);
    assert!(engine.get("x.example", RecordType::A).is_none());
    assert_eq!(engine.sweep(), 0);
    assert_eq!(engine.len(), 0);
    engine.clear();
}

#[test]
fn test_metrics_across_a_flow() {
    let engine = CacheEngine::new(2);
    engine.insert("a.example", RecordType::A, v4(1), 60).unwrap();
    engine.insert("b.example", RecordType::A, v4(2), 60).unwrap();
    engine.insert("c.example", RecordType::A, v4(3), 60).unwrap();

    let _hit = engine.get("b.example", RecordType::A);
    let _miss = engine.get("a.example", RecordType::A);

    let snapshot = engine.metrics().snapshot();
    assert_eq!(snapshot.insertions, 3);
    assert_eq!(snapshot.evictions, 1);
    assert_eq!(snapshot.hits, 1);
    assert_eq!(snapshot.misses, 1);
}
