//! Owning facade over the whole hierarchy.
//!
//! External collaborators only ever call `read`/`write` on this type and
//! inspect the clock and statistics; no external code mutates line or set
//! state directly. The facade exclusively owns L1, L2, the backing store,
//! and the clock, so tests can build any number of independent hierarchies.

use tracing::debug;

use super::dram::Dram;
use super::l1::L1Cache;
use super::l2::L2Cache;
use super::traits::BlockLevel;
use crate::clock::Clock;
use crate::common::constants::{BLOCK_SIZE, WORD_SIZE};
use crate::common::error::MemoryError;
use crate::config::Config;
use crate::stats::MemStats;

/// Binds L2 to the store so L1 sees a single backing [`BlockLevel`] while the
/// facade keeps exclusive ownership of both.
struct BackedL2<'a> {
    cache: &'a mut L2Cache,
    store: &'a mut Dram,
}

impl BlockLevel for BackedL2<'_> {
    fn read_block(
        &mut self,
        address: u32,
        block: &mut [u8; BLOCK_SIZE],
        clock: &mut Clock,
    ) -> Result<(), MemoryError> {
        self.cache.read_block(address, block, &mut *self.store, clock)
    }

    fn write_block(
        &mut self,
        address: u32,
        block: &[u8; BLOCK_SIZE],
        clock: &mut Clock,
    ) -> Result<(), MemoryError> {
        self.cache.write_block(address, block, &mut *self.store, clock)
    }
}

/// The two-level memory hierarchy: L1 over L2 over the backing store, plus
/// the cycle counter.
#[derive(Debug)]
pub struct Hierarchy {
    l1: L1Cache,
    l2: L2Cache,
    dram: Dram,
    clock: Clock,
}

impl Hierarchy {
    /// Builds a hierarchy from `config`: all lines invalid and clean, victim
    /// pointers at way 0, store zero-filled, clock at zero.
    ///
    /// # Panics
    ///
    /// Panics if a configured line or set count is not a power of two.
    pub fn new(config: &Config) -> Self {
        debug!(
            dram_bytes = config.dram.size_bytes,
            l1_lines = config.l1.lines,
            l2_sets = config.l2.sets,
            "building hierarchy"
        );
        Self {
            l1: L1Cache::new(&config.l1),
            l2: L2Cache::new(&config.l2),
            dram: Dram::new(&config.dram),
            clock: Clock::new(),
        }
    }

    /// Reads the word containing `address` into `word`, routing through L1.
    pub fn read(&mut self, address: u32, word: &mut [u8; WORD_SIZE]) -> Result<(), MemoryError> {
        let mut next = BackedL2 {
            cache: &mut self.l2,
            store: &mut self.dram,
        };
        self.l1.read_word(address, word, &mut next, &mut self.clock)
    }

    /// Writes `word` into the word slot containing `address`, routing through
    /// L1.
    pub fn write(&mut self, address: u32, word: &[u8; WORD_SIZE]) -> Result<(), MemoryError> {
        let mut next = BackedL2 {
            cache: &mut self.l2,
            store: &mut self.dram,
        };
        self.l1
            .write_word(address, word, &mut next, &mut self.clock)
    }

    /// Reads the word containing `address` as a little-endian `u32`.
    pub fn read_u32(&mut self, address: u32) -> Result<u32, MemoryError> {
        let mut word = [0u8; WORD_SIZE];
        self.read(address, &mut word)?;
        Ok(u32::from_le_bytes(word))
    }

    /// Writes `value` as a little-endian word at `address`.
    pub fn write_u32(&mut self, address: u32, value: u32) -> Result<(), MemoryError> {
        self.write(address, &value.to_le_bytes())
    }

    /// Zeroes the cycle counter; cache and store contents are untouched.
    pub fn reset_time(&mut self) {
        self.clock.reset();
    }

    /// Returns the current cycle count.
    pub fn time(&self) -> u64 {
        self.clock.now()
    }

    /// Returns both caches to the all-invalid initial state and zeroes the
    /// clock. Dirty lines are discarded, not written back; the store keeps
    /// whatever last reached it.
    pub fn reset(&mut self) {
        self.l1.invalidate_all();
        self.l2.invalidate_all();
        self.clock.reset();
    }

    /// Snapshots the per-level counters and the cycle total.
    pub fn stats(&self) -> MemStats {
        MemStats {
            cycles: self.clock.now(),
            l1_hits: self.l1.hits(),
            l1_misses: self.l1.misses(),
            l1_writebacks: self.l1.writebacks(),
            l2_hits: self.l2.hits(),
            l2_misses: self.l2.misses(),
            l2_writebacks: self.l2.writebacks(),
            dram_reads: self.dram.reads(),
            dram_writes: self.dram.writes(),
        }
    }
}
