//! Byte-addressable backing store.
//!
//! The store is the bottom of the hierarchy: it serves whole blocks at a
//! fixed per-direction latency and holds the authoritative copy of every
//! byte. It performs the single range check in the hierarchy — an access
//! whose block does not fit below the capacity is a fatal
//! [`MemoryError::AddressOutOfRange`], never a recoverable condition.

use tracing::trace;

use super::buffer::StoreBuffer;
use super::traits::BlockLevel;
use crate::clock::Clock;
use crate::common::constants::BLOCK_SIZE;
use crate::common::error::MemoryError;
use crate::config::DramConfig;

/// The backing store: fixed-capacity byte array with block transfers.
#[derive(Debug)]
pub struct Dram {
    buffer: StoreBuffer,
    read_latency: u64,
    write_latency: u64,
    reads: u64,
    writes: u64,
}

impl Dram {
    /// Creates a zero-filled store from `config`.
    pub fn new(config: &DramConfig) -> Self {
        Self {
            buffer: StoreBuffer::new(config.size_bytes),
            read_latency: config.read_latency,
            write_latency: config.write_latency,
            reads: 0,
            writes: 0,
        }
    }

    /// Returns the store capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Returns how many block reads the store has served.
    pub fn reads(&self) -> u64 {
        self.reads
    }

    /// Returns how many block writes the store has absorbed.
    pub fn writes(&self) -> u64 {
        self.writes
    }

    /// Rejects any access whose block would not fit below the capacity.
    ///
    /// No alignment is required: callers pass block-aligned addresses in
    /// practice, but only the fit is enforced.
    fn check_range(&self, address: u32) -> Result<(), MemoryError> {
        if address as usize + BLOCK_SIZE > self.buffer.len() {
            return Err(MemoryError::AddressOutOfRange {
                address,
                capacity: self.buffer.len(),
            });
        }
        Ok(())
    }
}

impl BlockLevel for Dram {
    /// Copies one block out of the store and charges the read latency.
    fn read_block(
        &mut self,
        address: u32,
        block: &mut [u8; BLOCK_SIZE],
        clock: &mut Clock,
    ) -> Result<(), MemoryError> {
        self.check_range(address)?;
        block.copy_from_slice(self.buffer.read_slice(address as usize, BLOCK_SIZE));
        clock.advance(self.read_latency);
        self.reads += 1;
        trace!(address = format_args!("{address:#010x}"), "store block read");
        Ok(())
    }

    /// Copies one block into the store and charges the write latency.
    fn write_block(
        &mut self,
        address: u32,
        block: &[u8; BLOCK_SIZE],
        clock: &mut Clock,
    ) -> Result<(), MemoryError> {
        self.check_range(address)?;
        self.buffer.write_slice(address as usize, block);
        clock.advance(self.write_latency);
        self.writes += 1;
        trace!(address = format_args!("{address:#010x}"), "store block write");
        Ok(())
    }
}
