//! Two-level write-back cache hierarchy simulator library.
//!
//! This crate implements a functional model of a two-level memory hierarchy with the following:
//! 1. **Backing store:** Byte-addressable DRAM with block-granularity transfers and fixed latencies.
//! 2. **L1 cache:** Direct-mapped, write-back, write-allocate, word-granularity access.
//! 3. **L2 cache:** Two-way set-associative, write-back, write-allocate, block-granularity access.
//! 4. **Cycle accounting:** A clock advanced by every access at every level, never overlapped.
//! 5. **Configuration and statistics:** Serde-based config with reference defaults, per-level counters.
//!
//! The [`Hierarchy`] facade owns all structures; external collaborators only call
//! `read`/`write` and inspect the clock and statistics.

/// Common types (address geometry, constants, errors).
pub mod common;
/// Simulator configuration (defaults and hierarchical config structures).
pub mod config;
/// Cycle counter shared by every level of the hierarchy.
pub mod clock;
/// Memory hierarchy components (store, caches, facade).
pub mod mem;
/// Access statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Owning facade over L1, L2, and the backing store; construct with `Hierarchy::new`.
pub use crate::mem::hierarchy::Hierarchy;
/// Fatal access error; the only error kind the hierarchy surfaces.
pub use crate::common::error::MemoryError;
