//! Cycle counter shared by every level of the hierarchy.
//!
//! Every store, L1, and L2 access adds its fixed per-direction latency here.
//! Latencies are never pipelined or overlapped: a miss that cascades through
//! L2 and the store accumulates the sum of every level touched. The counter
//! only moves backward through an explicit [`Clock::reset`].

/// Monotone cycle counter.
///
/// Owned by the facade and threaded through every access; two independent
/// hierarchies never share a clock.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    cycles: u64,
}

impl Clock {
    /// Creates a clock at cycle zero.
    pub fn new() -> Self {
        Self { cycles: 0 }
    }

    /// Returns the current cycle count.
    #[inline(always)]
    pub fn now(&self) -> u64 {
        self.cycles
    }

    /// Adds `cycles` to the counter.
    #[inline(always)]
    pub fn advance(&mut self, cycles: u64) {
        self.cycles += cycles;
    }

    /// Zeroes the counter.
    pub fn reset(&mut self) {
        self.cycles = 0;
    }
}
