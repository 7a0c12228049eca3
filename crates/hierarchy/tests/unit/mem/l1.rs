//! Direct-Mapped L1 Unit Tests.
//!
//! Exercises the L1 cache against a recording `MockStore` so fill and
//! write-back traffic is directly observable. A tiny 4-line geometry keeps
//! conflict addresses easy to reason about:
//!
//!   index = (addr / 64) % 4, tag = addr / 256
//!
//! so 0x100, 0x200, and 0x300 all collide on index 0 with distinct tags.

use memsim_core::clock::Clock;
use memsim_core::common::constants::{BLOCK_SIZE, WORD_SIZE};
use memsim_core::config::L1Config;
use memsim_core::mem::l1::L1Cache;

use crate::common::mocks::MockStore;

/// Mock backing latencies (read, write).
const NEXT_READ: u64 = 10;
const NEXT_WRITE: u64 = 5;

fn test_cache() -> L1Cache {
    L1Cache::new(&L1Config {
        lines: 4,
        read_latency: 1,
        write_latency: 1,
    })
}

fn test_next() -> MockStore {
    MockStore::new(NEXT_READ, NEXT_WRITE)
}

fn pattern(seed: u8) -> [u8; BLOCK_SIZE] {
    let mut block = [0u8; BLOCK_SIZE];
    for (i, byte) in block.iter_mut().enumerate() {
        *byte = seed.wrapping_add(i as u8);
    }
    block
}

// ══════════════════════════════════════════════════════════
// 1. Cold Miss / Fill
// ══════════════════════════════════════════════════════════

/// A cold read fetches the whole containing block and returns the right word.
#[test]
fn cold_read_fills_from_next() {
    let mut l1 = test_cache();
    let mut next = test_next();
    let mut clock = Clock::new();
    next.preload(0x100, pattern(0));

    let mut word = [0u8; WORD_SIZE];
    l1.read_word(0x104, &mut word, &mut next, &mut clock).unwrap();

    assert_eq!(word, [4, 5, 6, 7], "word at offset 4 of the block");
    assert_eq!(next.reads, vec![0x100], "one block fill, block-aligned");
    assert_eq!(l1.misses(), 1);
}

/// A second access to the same block is served without touching the next level.
#[test]
fn warm_read_hits_without_fill() {
    let mut l1 = test_cache();
    let mut next = test_next();
    let mut clock = Clock::new();

    let mut word = [0u8; WORD_SIZE];
    l1.read_word(0x100, &mut word, &mut next, &mut clock).unwrap();
    l1.read_word(0x13C, &mut word, &mut next, &mut clock).unwrap();

    assert_eq!(next.reads.len(), 1, "second access must not re-fetch");
    assert_eq!(l1.hits(), 1);
    assert_eq!(l1.misses(), 1);
}

/// A write that misses still fetches the block first (write-allocate).
#[test]
fn cold_write_allocates() {
    let mut l1 = test_cache();
    let mut next = test_next();
    let mut clock = Clock::new();

    l1.write_word(0x100, &[1, 2, 3, 4], &mut next, &mut clock).unwrap();

    assert_eq!(next.reads, vec![0x100], "write-allocate fetches the block");
    assert!(next.writes.is_empty(), "nothing written down yet");
}

/// A written word reads back from the line (write-back: next level untouched).
#[test]
fn written_word_reads_back() {
    let mut l1 = test_cache();
    let mut next = test_next();
    let mut clock = Clock::new();

    l1.write_word(0x108, &[0xDE, 0xAD, 0xBE, 0xEF], &mut next, &mut clock)
        .unwrap();
    let mut word = [0u8; WORD_SIZE];
    l1.read_word(0x108, &mut word, &mut next, &mut clock).unwrap();

    assert_eq!(word, [0xDE, 0xAD, 0xBE, 0xEF]);
    assert!(next.writes.is_empty(), "write-back defers the update");
}

// ══════════════════════════════════════════════════════════
// 2. Eviction
// ══════════════════════════════════════════════════════════

/// Evicting a dirty line writes the block back to its reconstructed address.
#[test]
fn dirty_eviction_writes_back() {
    let mut l1 = test_cache();
    let mut next = test_next();
    let mut clock = Clock::new();

    l1.write_word(0x104, &[9, 9, 9, 9], &mut next, &mut clock).unwrap();
    // 0x200 collides on index 0 and evicts the dirty 0x100 block.
    let mut word = [0u8; WORD_SIZE];
    l1.read_word(0x200, &mut word, &mut next, &mut clock).unwrap();

    assert_eq!(next.writes, vec![0x100], "write-back targets the old block base");
    assert_eq!(l1.writebacks(), 1);

    let spilled = next.block(0x100).expect("block must have been written back");
    assert_eq!(&spilled[4..8], &[9, 9, 9, 9], "spilled block carries the write");
}

/// Evicting a clean line writes nothing back.
#[test]
fn clean_eviction_writes_nothing() {
    let mut l1 = test_cache();
    let mut next = test_next();
    let mut clock = Clock::new();

    let mut word = [0u8; WORD_SIZE];
    l1.read_word(0x100, &mut word, &mut next, &mut clock).unwrap();
    l1.read_word(0x200, &mut word, &mut next, &mut clock).unwrap();

    assert!(next.writes.is_empty());
    assert_eq!(l1.writebacks(), 0);
}

/// After a dirty round trip through the next level, the data comes back.
#[test]
fn evicted_data_survives_round_trip() {
    let mut l1 = test_cache();
    let mut next = test_next();
    let mut clock = Clock::new();

    l1.write_word(0x104, &[1, 2, 3, 4], &mut next, &mut clock).unwrap();
    let mut word = [0u8; WORD_SIZE];
    l1.read_word(0x200, &mut word, &mut next, &mut clock).unwrap(); // evict
    l1.read_word(0x104, &mut word, &mut next, &mut clock).unwrap(); // refill

    assert_eq!(word, [1, 2, 3, 4]);
}

// ══════════════════════════════════════════════════════════
// 3. Latency
// ══════════════════════════════════════════════════════════

/// A hit charges only the L1 latency; a miss adds the fill underneath it.
#[test]
fn hit_and_miss_latencies() {
    let mut l1 = test_cache();
    let mut next = test_next();
    let mut clock = Clock::new();
    let mut word = [0u8; WORD_SIZE];

    l1.read_word(0x100, &mut word, &mut next, &mut clock).unwrap();
    assert_eq!(clock.now(), NEXT_READ + 1, "cold miss: fill + L1 read");

    l1.read_word(0x100, &mut word, &mut next, &mut clock).unwrap();
    assert_eq!(clock.now(), NEXT_READ + 2, "warm hit: L1 read only");
}

/// A dirty eviction adds the next level's write cost to the miss.
#[test]
fn dirty_eviction_latency() {
    let mut l1 = test_cache();
    let mut next = test_next();
    let mut clock = Clock::new();

    l1.write_word(0x100, &[1, 1, 1, 1], &mut next, &mut clock).unwrap();
    let after_write = clock.now();

    let mut word = [0u8; WORD_SIZE];
    l1.read_word(0x200, &mut word, &mut next, &mut clock).unwrap();
    assert_eq!(
        clock.now() - after_write,
        NEXT_READ + NEXT_WRITE + 1,
        "miss fill + victim write-back + L1 read"
    );
}

// ══════════════════════════════════════════════════════════
// 4. Invalidation
// ══════════════════════════════════════════════════════════

/// `invalidate_all` discards dirty contents; the next level never sees them.
#[test]
fn invalidate_discards_dirty_lines() {
    let mut l1 = test_cache();
    let mut next = test_next();
    let mut clock = Clock::new();

    l1.write_word(0x100, &[7, 7, 7, 7], &mut next, &mut clock).unwrap();
    l1.invalidate_all();

    let mut word = [0u8; WORD_SIZE];
    l1.read_word(0x100, &mut word, &mut next, &mut clock).unwrap();

    assert_eq!(word, [0, 0, 0, 0], "refill sees the stale backing copy");
    assert!(next.writes.is_empty(), "discard, not flush");
    assert_eq!(next.reads.len(), 2, "second fill after invalidation");
}
