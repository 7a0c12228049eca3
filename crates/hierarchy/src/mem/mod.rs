//! Memory hierarchy components.
//!
//! This module organizes the hierarchy leaf-first:
//! 1. **Buffer:** Raw byte storage behind the backing store.
//! 2. **Dram:** The byte-addressable backing store with block transfers.
//! 3. **L2:** Two-way set-associative cache backed by the store.
//! 4. **L1:** Direct-mapped cache backed by any [`BlockLevel`].
//! 5. **Hierarchy:** The owning facade external collaborators call.

/// Raw byte buffer backing the store.
pub mod buffer;
/// Byte-addressable backing store.
pub mod dram;
/// Owning facade over the whole hierarchy.
pub mod hierarchy;
/// Direct-mapped first-level cache.
pub mod l1;
/// Two-way set-associative second-level cache.
pub mod l2;
/// The block-transfer seam between cache levels.
pub mod traits;

pub use traits::BlockLevel;

use crate::common::constants::BLOCK_SIZE;

/// One cache line: validity, dirtiness, stored tag, and the block payload.
///
/// A line is *present* for a probe iff it is valid and its stored tag equals
/// the probe tag; the index that selected it is implicit in its position.
#[derive(Clone, Debug)]
pub struct CacheLine {
    /// Whether the line holds any block at all.
    pub valid: bool,
    /// Whether the payload differs from the next level's copy.
    pub dirty: bool,
    /// Tag of the block currently held.
    pub tag: u32,
    /// The cached block contents.
    pub data: [u8; BLOCK_SIZE],
}

impl CacheLine {
    /// The initial state: invalid, clean, zero tag, zeroed payload.
    pub const INVALID: Self = Self {
        valid: false,
        dirty: false,
        tag: 0,
        data: [0; BLOCK_SIZE],
    };

    /// Returns true iff this line currently holds the block with `tag`.
    #[inline(always)]
    pub fn present(&self, tag: u32) -> bool {
        self.valid && self.tag == tag
    }
}
