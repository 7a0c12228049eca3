//! Common utilities and types used throughout the hierarchy simulator.
//!
//! This module provides the building blocks shared across all components:
//! 1. **Address Geometry:** Tag/index/offset decomposition and its inverse.
//! 2. **Constants:** Block and word sizes fixed at build time.
//! 3. **Error Handling:** The fatal out-of-range access error.

/// Address bit-field geometry and decomposition.
pub mod addr;

/// Build-time block and word size constants.
pub mod constants;

/// Error types surfaced by the hierarchy.
pub mod error;

pub use addr::{Fields, Geometry};
pub use constants::{BLOCK_SIZE, WORD_SIZE};
pub use error::MemoryError;
