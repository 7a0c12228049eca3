//! Unit tests for the memory hierarchy components.



/// Direct-mapped L1 against a recording mock backing level.
pub mod l1;
