//! Access statistics collection and reporting.
//!
//! This module tracks behavioral counters for the hierarchy. It provides:
//! 1. **Per-level counts:** Hits, misses, and dirty write-backs for L1 and L2.
//! 2. **Store traffic:** Block reads and writes reaching the backing store.
//! 3. **Derived metrics:** Hit rates and the cycle total.
//!
//! Counters live in the components that observe the events; the facade
//! assembles this snapshot on demand.

/// Snapshot of hierarchy statistics.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MemStats {
    /// Total simulated cycles elapsed.
    pub cycles: u64,
    /// L1 accesses that found their block present.
    pub l1_hits: u64,
    /// L1 accesses that required a fill from L2.
    pub l1_misses: u64,
    /// Dirty L1 victims written back to L2.
    pub l1_writebacks: u64,
    /// L2 accesses that found their block present.
    pub l2_hits: u64,
    /// L2 accesses that required a fill from the store.
    pub l2_misses: u64,
    /// Dirty L2 victims written back to the store.
    pub l2_writebacks: u64,
    /// Block reads served by the backing store.
    pub dram_reads: u64,
    /// Block writes absorbed by the backing store.
    pub dram_writes: u64,
}

impl MemStats {
    /// Returns the L1 hit rate in [0, 1], or 0 when L1 saw no accesses.
    pub fn l1_hit_rate(&self) -> f64 {
        rate(self.l1_hits, self.l1_misses)
    }

    /// Returns the L2 hit rate in [0, 1], or 0 when L2 saw no accesses.
    pub fn l2_hit_rate(&self) -> f64 {
        rate(self.l2_hits, self.l2_misses)
    }

    /// Prints a human-readable report to stdout.
    pub fn print(&self) {
        println!("=== Hierarchy Statistics ===");
        println!("Cycles:       {}", self.cycles);
        println!(
            "L1:           {} hits / {} misses ({:.2}% hit), {} write-backs",
            self.l1_hits,
            self.l1_misses,
            self.l1_hit_rate() * 100.0,
            self.l1_writebacks
        );
        println!(
            "L2:           {} hits / {} misses ({:.2}% hit), {} write-backs",
            self.l2_hits,
            self.l2_misses,
            self.l2_hit_rate() * 100.0,
            self.l2_writebacks
        );
        println!(
            "Store:        {} block reads, {} block writes",
            self.dram_reads, self.dram_writes
        );
    }
}

/// Hits over total, guarding the empty case.
fn rate(hits: u64, misses: u64) -> f64 {
    let total = hits + misses;
    if total == 0 {
        0.0
    } else {
        hits as f64 / total as f64
    }
}
