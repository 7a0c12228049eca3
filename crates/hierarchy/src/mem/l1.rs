//! Direct-mapped first-level cache.
//!
//! Write-back, write-allocate, word-granularity access. The index field of an
//! address fully determines the unique candidate line; on a miss the whole
//! block is fetched from the backing level, a valid dirty victim is written
//! back to its reconstructed address, and the word access then proceeds
//! against the freshly installed line.

use tracing::trace;

use super::traits::BlockLevel;
use super::CacheLine;
use crate::clock::Clock;
use crate::common::addr::{word_base, Fields, Geometry};
use crate::common::constants::{BLOCK_SIZE, WORD_SIZE};
use crate::common::error::MemoryError;
use crate::config::L1Config;

/// Direct-mapped write-back cache serving word accesses.
#[derive(Debug)]
pub struct L1Cache {
    lines: Vec<CacheLine>,
    geometry: Geometry,
    read_latency: u64,
    write_latency: u64,
    hits: u64,
    misses: u64,
    writebacks: u64,
}

impl L1Cache {
    /// Creates an all-invalid cache from `config`.
    ///
    /// # Panics
    ///
    /// Panics if the configured line count is not a power of two.
    pub fn new(config: &L1Config) -> Self {
        Self {
            lines: vec![CacheLine::INVALID; config.lines],
            geometry: Geometry::new(config.lines),
            read_latency: config.read_latency,
            write_latency: config.write_latency,
            hits: 0,
            misses: 0,
            writebacks: 0,
        }
    }

    /// Reads the word containing `address` into `word`.
    ///
    /// Misses fill from `next` (write-allocate) before the word is copied out
    /// of the line; the L1 read latency is charged on top of whatever the
    /// fill cost.
    pub fn read_word(
        &mut self,
        address: u32,
        word: &mut [u8; WORD_SIZE],
        next: &mut impl BlockLevel,
        clock: &mut Clock,
    ) -> Result<(), MemoryError> {
        let fields = self.geometry.decompose(address);
        self.fill(address, fields, next, clock)?;

        let base = word_base(fields.offset);
        word.copy_from_slice(&self.lines[fields.index].data[base..base + WORD_SIZE]);
        clock.advance(self.read_latency);
        Ok(())
    }

    /// Writes `word` into the word slot containing `address` and marks the
    /// line dirty.
    ///
    /// A write that misses still fetches the block first (write-allocate);
    /// the new contents reach the next level only when the line is evicted.
    pub fn write_word(
        &mut self,
        address: u32,
        word: &[u8; WORD_SIZE],
        next: &mut impl BlockLevel,
        clock: &mut Clock,
    ) -> Result<(), MemoryError> {
        let fields = self.geometry.decompose(address);
        self.fill(address, fields, next, clock)?;

        let base = word_base(fields.offset);
        let line = &mut self.lines[fields.index];
        line.data[base..base + WORD_SIZE].copy_from_slice(word);
        line.dirty = true;
        clock.advance(self.write_latency);
        Ok(())
    }

    /// Ensures the candidate line holds `address`'s block.
    ///
    /// The incoming block is fetched before the victim is retired, so the
    /// line is overwritten only after both transfers succeeded. After this
    /// returns, `lines[fields.index]` is present for `fields.tag`.
    fn fill(
        &mut self,
        address: u32,
        fields: Fields,
        next: &mut impl BlockLevel,
        clock: &mut Clock,
    ) -> Result<(), MemoryError> {
        if self.lines[fields.index].present(fields.tag) {
            self.hits += 1;
            return Ok(());
        }
        self.misses += 1;
        trace!(
            address = format_args!("{address:#010x}"),
            index = fields.index,
            "l1 miss"
        );

        let mut incoming = [0u8; BLOCK_SIZE];
        next.read_block(self.geometry.block_base(address), &mut incoming, clock)?;

        if self.lines[fields.index].valid && self.lines[fields.index].dirty {
            let victim_addr = self
                .geometry
                .reconstruct(self.lines[fields.index].tag, fields.index);
            next.write_block(victim_addr, &self.lines[fields.index].data, clock)?;
            self.writebacks += 1;
            trace!(
                victim = format_args!("{victim_addr:#010x}"),
                index = fields.index,
                "l1 dirty write-back"
            );
        }

        let line = &mut self.lines[fields.index];
        line.data = incoming;
        line.valid = true;
        line.tag = fields.tag;
        line.dirty = false;
        Ok(())
    }

    /// Returns every line to the invalid, clean, zero-tag state.
    ///
    /// Dirty contents are discarded, not written back.
    pub fn invalidate_all(&mut self) {
        for line in &mut self.lines {
            *line = CacheLine::INVALID;
        }
    }

    /// Accesses that found their block present.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Accesses that required a fill.
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Dirty victims written back to the next level.
    pub fn writebacks(&self) -> u64 {
        self.writebacks
    }
}
