//! Statistics Unit Tests.
//!
//! Verifies the derived hit rates and the empty-counter edge case; the
//! counter wiring itself is exercised through the facade tests.

use memsim_core::stats::MemStats;

#[test]
fn hit_rates_default_to_zero_when_empty() {
    let stats = MemStats::default();
    assert_eq!(stats.l1_hit_rate(), 0.0);
    assert_eq!(stats.l2_hit_rate(), 0.0);
}

#[test]
fn hit_rates_are_hits_over_total() {
    let stats = MemStats {
        l1_hits: 3,
        l1_misses: 1,
        l2_hits: 1,
        l2_misses: 3,
        ..MemStats::default()
    };
    assert_eq!(stats.l1_hit_rate(), 0.75);
    assert_eq!(stats.l2_hit_rate(), 0.25);
}

#[test]
fn all_misses_is_zero_rate() {
    let stats = MemStats {
        l1_misses: 10,
        ..MemStats::default()
    };
    assert_eq!(stats.l1_hit_rate(), 0.0);
}
