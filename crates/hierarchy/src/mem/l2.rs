//! Two-way set-associative second-level cache.
//!
//! Write-back, write-allocate, block-granularity access: L1 exchanges whole
//! blocks with L2, so the offset field matters only for block alignment.
//! Victim selection is a per-set pointer that toggles between the two ways on
//! every miss and is deliberately left untouched on hits — this is the
//! reference model's stand-in for LRU, not true recency tracking, and a way
//! can be victimized immediately after being hit.

use tracing::trace;

use super::traits::BlockLevel;
use super::CacheLine;
use crate::clock::Clock;
use crate::common::addr::Geometry;
use crate::common::constants::BLOCK_SIZE;
use crate::common::error::MemoryError;
use crate::config::L2Config;

/// Associativity of every set; fixed by the model.
const WAYS: usize = 2;

/// One set: two ways plus the pointer selecting the next victim.
#[derive(Clone, Debug)]
struct CacheSet {
    ways: [CacheLine; WAYS],
    victim: usize,
}

impl CacheSet {
    /// Initial state: both ways invalid, victim pointer at way 0.
    const INVALID: Self = Self {
        ways: [CacheLine::INVALID; WAYS],
        victim: 0,
    };
}

/// Two-way set-associative write-back cache serving block accesses.
#[derive(Debug)]
pub struct L2Cache {
    sets: Vec<CacheSet>,
    geometry: Geometry,
    read_latency: u64,
    write_latency: u64,
    hits: u64,
    misses: u64,
    writebacks: u64,
}

impl L2Cache {
    /// Creates an all-invalid cache from `config`.
    ///
    /// # Panics
    ///
    /// Panics if the configured set count is not a power of two.
    pub fn new(config: &L2Config) -> Self {
        Self {
            sets: vec![CacheSet::INVALID; config.sets],
            geometry: Geometry::new(config.sets),
            read_latency: config.read_latency,
            write_latency: config.write_latency,
            hits: 0,
            misses: 0,
            writebacks: 0,
        }
    }

    /// Copies the block at `address` out of the cache, filling from `next` on
    /// a miss, and charges the L2 read latency.
    pub fn read_block(
        &mut self,
        address: u32,
        block: &mut [u8; BLOCK_SIZE],
        next: &mut impl BlockLevel,
        clock: &mut Clock,
    ) -> Result<(), MemoryError> {
        let (set, way) = self.lookup(address, next, clock)?;
        block.copy_from_slice(&self.sets[set].ways[way].data);
        clock.advance(self.read_latency);
        Ok(())
    }

    /// Copies `block` into the cache at `address`, filling from `next` on a
    /// miss (write-allocate), marks the way dirty, and charges the L2 write
    /// latency.
    pub fn write_block(
        &mut self,
        address: u32,
        block: &[u8; BLOCK_SIZE],
        next: &mut impl BlockLevel,
        clock: &mut Clock,
    ) -> Result<(), MemoryError> {
        let (set, way) = self.lookup(address, next, clock)?;
        let line = &mut self.sets[set].ways[way];
        line.data = *block;
        line.dirty = true;
        clock.advance(self.write_latency);
        Ok(())
    }

    /// Resolves `address` to a `(set, way)` whose line is present.
    ///
    /// Hit: the matching way; the victim pointer is not consulted or moved.
    /// Miss: fetch from `next`, retire the pointed-at victim (writing it back
    /// if valid and dirty), install clean, toggle the pointer. When both ways
    /// are invalid or neither matches, the pointer alone picks the way.
    fn lookup(
        &mut self,
        address: u32,
        next: &mut impl BlockLevel,
        clock: &mut Clock,
    ) -> Result<(usize, usize), MemoryError> {
        let fields = self.geometry.decompose(address);
        let set = &self.sets[fields.index];

        if let Some(way) = (0..WAYS).find(|&w| set.ways[w].present(fields.tag)) {
            self.hits += 1;
            return Ok((fields.index, way));
        }

        self.misses += 1;
        trace!(
            address = format_args!("{address:#010x}"),
            set = fields.index,
            "l2 miss"
        );

        let mut incoming = [0u8; BLOCK_SIZE];
        next.read_block(self.geometry.block_base(address), &mut incoming, clock)?;

        let way = self.sets[fields.index].victim;
        let victim = &self.sets[fields.index].ways[way];
        if victim.valid && victim.dirty {
            let victim_addr = self.geometry.reconstruct(victim.tag, fields.index);
            next.write_block(victim_addr, &victim.data, clock)?;
            self.writebacks += 1;
            trace!(
                victim = format_args!("{victim_addr:#010x}"),
                set = fields.index,
                way,
                "l2 dirty write-back"
            );
        }

        let set = &mut self.sets[fields.index];
        let line = &mut set.ways[way];
        line.data = incoming;
        line.valid = true;
        line.tag = fields.tag;
        line.dirty = false;
        set.victim ^= 1;

        Ok((fields.index, way))
    }

    /// Returns every set to the initial state: both ways invalid and clean,
    /// victim pointer back at way 0. Dirty contents are discarded.
    pub fn invalidate_all(&mut self) {
        for set in &mut self.sets {
            *set = CacheSet::INVALID;
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
