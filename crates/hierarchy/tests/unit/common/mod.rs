//! Unit tests for common hierarchy types.
