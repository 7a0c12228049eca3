//! Configuration system for the hierarchy simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! hierarchy. It provides:
//! 1. **Defaults:** The reference model's constants (store capacity, line and
//!    set counts, per-level/per-direction latencies).
//! 2. **Structures:** Hierarchical config for the backing store, L1, and L2.
//!
//! Configuration is supplied as JSON or via `Config::default()`. Block and
//! word size are build-time constants and deliberately absent here (see
//! [`crate::common::constants`]).

use serde::Deserialize;

/// Default configuration constants for the simulator.
///
/// These are the reference model's build constants; they apply when a field
/// is not explicitly overridden.
mod defaults {
    /// Backing store capacity in bytes (1 MiB).
    pub const DRAM_SIZE: usize = 1024 * 1024;

    /// Backing store read latency per block transfer, in cycles.
    pub const DRAM_READ_LATENCY: u64 = 100;

    /// Backing store write latency per block transfer, in cycles.
    pub const DRAM_WRITE_LATENCY: u64 = 50;

    /// Number of direct-mapped L1 lines (8 index bits).
    pub const L1_LINES: usize = 256;

    /// L1 read latency per word access, in cycles.
    pub const L1_READ_LATENCY: u64 = 1;

    /// L1 write latency per word access, in cycles.
    pub const L1_WRITE_LATENCY: u64 = 1;

    /// Number of two-way L2 sets (8 index bits).
    pub const L2_SETS: usize = 256;

    /// L2 read latency per block access, in cycles.
    pub const L2_READ_LATENCY: u64 = 10;

    /// L2 write latency per block access, in cycles.
    pub const L2_WRITE_LATENCY: u64 = 5;
}

/// Root configuration structure for a hierarchy instance.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use memsim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.dram.size_bytes, 1024 * 1024);
/// assert_eq!(config.l1.lines, 256);
/// assert_eq!(config.l2.sets, 256);
/// ```
///
/// Deserializing from JSON; omitted fields take the reference defaults:
///
/// ```
/// use memsim_core::config::Config;
///
/// let json = r#"{
///     "dram": { "size_bytes": 65536, "read_latency": 80, "write_latency": 40 },
///     "l1":   { "lines": 64 },
///     "l2":   { "sets": 32, "read_latency": 8 }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.dram.size_bytes, 65536);
/// assert_eq!(config.l1.lines, 64);
/// assert_eq!(config.l1.read_latency, 1);
/// assert_eq!(config.l2.read_latency, 8);
/// assert_eq!(config.l2.write_latency, 5);
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Backing store configuration.
    #[serde(default)]
    pub dram: DramConfig,
    /// Direct-mapped L1 configuration.
    #[serde(default)]
    pub l1: L1Config,
    /// Two-way set-associative L2 configuration.
    #[serde(default)]
    pub l2: L2Config,
}

/// Backing store configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DramConfig {
    /// Capacity in bytes; every block transfer must fit below this bound.
    #[serde(default = "DramConfig::default_size")]
    pub size_bytes: usize,

    /// Cycles added per block read.
    #[serde(default = "DramConfig::default_read_latency")]
    pub read_latency: u64,

    /// Cycles added per block write.
    #[serde(default = "DramConfig::default_write_latency")]
    pub write_latency: u64,
}

impl DramConfig {
    /// Returns the default backing store capacity in bytes.
    fn default_size() -> usize {
        defaults::DRAM_SIZE
    }

    /// Returns the default block read latency in cycles.
    fn default_read_latency() -> u64 {
        defaults::DRAM_READ_LATENCY
    }

    /// Returns the default block write latency in cycles.
    fn default_write_latency() -> u64 {
        defaults::DRAM_WRITE_LATENCY
    }
}

impl Default for DramConfig {
    fn default() -> Self {
        Self {
            size_bytes: defaults::DRAM_SIZE,
            read_latency: defaults::DRAM_READ_LATENCY,
            write_latency: defaults::DRAM_WRITE_LATENCY,
        }
    }
}

/// Direct-mapped L1 cache configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct L1Config {
    /// Line count; must be a power of two (determines the index field width).
    #[serde(default = "L1Config::default_lines")]
    pub lines: usize,

    /// Cycles added per word read.
    #[serde(default = "L1Config::default_read_latency")]
    pub read_latency: u64,

    /// Cycles added per word write.
    #[serde(default = "L1Config::default_write_latency")]
    pub write_latency: u64,
}

impl L1Config {
    /// Returns the default L1 line count.
    fn default_lines() -> usize {
        defaults::L1_LINES
    }

    /// Returns the default word read latency in cycles.
    fn default_read_latency() -> u64 {
        defaults::L1_READ_LATENCY
    }

    /// Returns the default word write latency in cycles.
    fn default_write_latency() -> u64 {
        defaults::L1_WRITE_LATENCY
    }
}

impl Default for L1Config {
    fn default() -> Self {
        Self {
            lines: defaults::L1_LINES,
            read_latency: defaults::L1_READ_LATENCY,
            write_latency: defaults::L1_WRITE_LATENCY,
        }
    }
}

/// Two-way set-associative L2 cache configuration.
///
/// The associativity is fixed at two ways; only the set count and latencies
/// vary.
#[derive(Debug, Clone, Deserialize)]
pub struct L2Config {
    /// Set count; must be a power of two (determines the index field width).
    #[serde(default = "L2Config::default_sets")]
    pub sets: usize,

    /// Cycles added per block read.
    #[serde(default = "L2Config::default_read_latency")]
    pub read_latency: u64,

    /// Cycles added per block write.
    #[serde(default = "L2Config::default_write_latency")]
    pub write_latency: u64,
}

impl L2Config {
    /// Returns the default L2 set count.
    fn default_sets() -> usize {
        defaults::L2_SETS
    }

    /// Returns the default block read latency in cycles.
    fn default_read_latency() -> u64 {
        defaults::L2_READ_LATENCY
    }

    /// Returns the default block write latency in cycles.
    fn default_write_latency() -> u64 {
        defaults::L2_WRITE_LATENCY
    }
}

impl Default for L2Config {
    fn default() -> Self {
        Self {
            sets: defaults::L2_SETS,
            read_latency: defaults::L2_READ_LATENCY,
            write_latency: defaults::L2_WRITE_LATENCY,
        }
    }
}
