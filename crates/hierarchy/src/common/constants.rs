//! Build-time size constants.
//!
//! Block and word size are fixed at build time: the bit-field layout of every
//! address, the shape of every cache line, and the public buffer types all
//! depend on them. Line counts, set counts, capacities, and latencies are
//! runtime configuration instead (see [`crate::config`]).

/// Size in bytes of the block transferred between adjacent hierarchy levels.
///
/// Determines the offset field width of every address: `BLOCK_SIZE.ilog2()`
/// low bits select a byte within a block.
pub const BLOCK_SIZE: usize = 64;

/// Size in bytes of the word transferred between the caller and L1.
///
/// The two lowest offset bits select a byte within a word.
pub const WORD_SIZE: usize = 4;
