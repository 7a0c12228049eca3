//! Address bit-field geometry.
//!
//! Every cache level partitions a 32-bit address into three disjoint,
//! contiguous fields `{tag, index, offset}`. This module provides:
//! 1. **Decomposition:** Splitting an address into its fields, with the index
//!    masked so it is in range by construction.
//! 2. **Reconstruction:** The pure inverse used to rebuild a dirty victim's
//!    original address from its stored tag and line index.
//! 3. **Alignment helpers:** Block-base and word-base rounding.
//!
//! Invariant for any geometry:
//! `tag << (index_bits + offset_bits) | index << offset_bits | offset == address`.

use super::constants::{BLOCK_SIZE, WORD_SIZE};

/// The decomposed fields of one address under a specific [`Geometry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fields {
    /// Block identity bits above index and offset.
    pub tag: u32,
    /// Line (or set) selector; always `< 1 << index_bits`.
    pub index: usize,
    /// Byte position within the block; always `< BLOCK_SIZE`.
    pub offset: usize,
}

/// Fixed bit-field widths for one cache level.
///
/// The offset width is determined by [`BLOCK_SIZE`]; the index width by the
/// level's line (or set) count. Both are fixed for the lifetime of the level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    offset_bits: u32,
    index_bits: u32,
}

impl Geometry {
    /// Creates the geometry for a level with `slots` lines or sets.
    ///
    /// # Arguments
    ///
    /// * `slots` - Number of directly indexed lines (L1) or sets (L2).
    ///
    /// # Panics
    ///
    /// Panics if `slots` is not a power of two; index bits would otherwise
    /// not tile the address.
    pub fn new(slots: usize) -> Self {
        assert!(
            slots.is_power_of_two(),
            "line/set count must be a power of two, got {}",
            slots
        );
        Self {
            offset_bits: BLOCK_SIZE.trailing_zeros(),
            index_bits: slots.trailing_zeros(),
        }
    }

    /// Returns the offset field width in bits.
    #[inline(always)]
    pub fn offset_bits(&self) -> u32 {
        self.offset_bits
    }

    /// Returns the index field width in bits.
    #[inline(always)]
    pub fn index_bits(&self) -> u32 {
        self.index_bits
    }

    /// Splits `address` into `{tag, index, offset}` under this geometry.
    ///
    /// The index is masked here, once; downstream array indexing relies on it
    /// being in range rather than re-checking.
    #[inline]
    pub fn decompose(&self, address: u32) -> Fields {
        Fields {
            tag: address >> (self.index_bits + self.offset_bits),
            index: ((address >> self.offset_bits) & ((1 << self.index_bits) - 1)) as usize,
            offset: (address & ((1 << self.offset_bits) - 1)) as usize,
        }
    }

    /// Rebuilds the block-aligned address a line was filled from.
    ///
    /// Pure inverse of [`Geometry::decompose`] for a zero offset; used to
    /// compute the write-back target of a dirty victim.
    ///
    /// # Arguments
    ///
    /// * `tag` - The tag stored in the victim line.
    /// * `index` - The line (or set) index the victim occupies.
    #[inline]
    pub fn reconstruct(&self, tag: u32, index: usize) -> u32 {
        ((tag << self.index_bits) | index as u32) << self.offset_bits
    }

    /// Rounds `address` down to its block boundary.
    #[inline]
    pub fn block_base(&self, address: u32) -> u32 {
        address & !((1 << self.offset_bits) - 1)
    }
}

/// Rounds a block offset down to its word boundary.
///
/// The two low bits of the offset select a byte within a word and are
/// discarded for word transfers.
#[inline]
pub fn word_base(offset: usize) -> usize {
    offset & !(WORD_SIZE - 1)
}
