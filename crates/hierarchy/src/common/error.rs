//! Error types surfaced by the hierarchy.
//!
//! There is exactly one fatal kind: an access that would overrun the backing
//! store. It signals a bug in address decomposition or in the caller, not a
//! transient condition, so no component ever recovers from it — every level
//! propagates it unchanged to the facade caller. Cache misses and dirty
//! write-backs are normal control flow and never appear here.

use thiserror::Error;

/// Fatal memory access error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MemoryError {
    /// A block transfer at `address` would read or write past the backing
    /// store's capacity. Unrecoverable by design; stop the simulation.
    #[error(
        "address {address:#010x} overruns the {capacity}-byte backing store \
         (a full block must fit)"
    )]
    AddressOutOfRange {
        /// The offending block-transfer address.
        address: u32,
        /// Backing store capacity in bytes.
        capacity: usize,
    },
}
