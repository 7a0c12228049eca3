//! The block-transfer seam between hierarchy levels.
//!
//! L1 fills from and spills to whatever backs it through this trait. In the
//! real hierarchy that is L2 bound to the store; tests substitute a recording
//! mock to observe fill and write-back traffic directly.

use crate::clock::Clock;
use crate::common::constants::BLOCK_SIZE;
use crate::common::error::MemoryError;

/// A level that serves whole-block reads and writes.
///
/// Addresses are block-aligned in practice (callers round down before
/// transferring); implementations charge their own latency on the clock and
/// propagate [`MemoryError`] unchanged.
pub trait BlockLevel {
    /// Copies the block at `address` into `block`.
    fn read_block(
        &mut self,
        address: u32,
        block: &mut [u8; BLOCK_SIZE],
        clock: &mut Clock,
    ) -> Result<(), MemoryError>;

    /// Copies `block` into this level at `address`.
    fn write_block(
        &mut self,
        address: u32,
        block: &[u8; BLOCK_SIZE],
        clock: &mut Clock,
    ) -> Result<(), MemoryError>;
}
