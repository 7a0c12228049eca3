//! Raw byte buffer backing the store.
//!
//! On Unix the buffer is an anonymous `mmap`, so the OS allocates pages only
//! when a block is first touched; a large configured capacity costs nothing
//! until the simulation actually reaches it. Elsewhere a zeroed `Vec` is used.
//!
//! Bounds are asserted here as an internal invariant; the store performs the
//! caller-facing range check and returns an error before ever reaching this
//! buffer with an out-of-range offset.

#[cfg(unix)]
use std::slice;

/// Fixed-capacity byte buffer with slice access.
#[derive(Debug)]
pub struct StoreBuffer {
    #[cfg(unix)]
    ptr: *mut u8,
    #[cfg(unix)]
    size: usize,
    #[cfg(not(unix))]
    bytes: Vec<u8>,
}

impl StoreBuffer {
    /// Allocates a zero-initialized buffer of `size` bytes.
    ///
    /// # Panics
    ///
    /// Panics if the anonymous mapping fails on Unix.
    pub fn new(size: usize) -> Self {
        #[cfg(unix)]
        {
            use std::ptr;
            let ptr = unsafe {
                libc::mmap(
                    ptr::null_mut(),
                    size,
                    libc::PROT_READ | libc::PROT_WRITE,
                    libc::MAP_PRIVATE | libc::MAP_ANONYMOUS,
                    -1,
                    0,
                )
            };
            if ptr == libc::MAP_FAILED {
                panic!("failed to mmap store buffer of size {}", size);
            }
            Self {
                ptr: ptr.cast::<u8>(),
                size,
            }
        }

        #[cfg(not(unix))]
        {
            Self {
                bytes: vec![0u8; size],
            }
        }
    }

    /// Returns the buffer capacity in bytes.
    pub fn len(&self) -> usize {
        #[cfg(unix)]
        {
            self.size
        }
        #[cfg(not(unix))]
        {
            self.bytes.len()
        }
    }

    /// Returns true if the buffer has zero capacity.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the `len` bytes starting at `offset`.
    pub fn read_slice(&self, offset: usize, len: usize) -> &[u8] {
        assert!(offset + len <= self.len(), "store read out of bounds");
        #[cfg(unix)]
        unsafe {
            slice::from_raw_parts(self.ptr.add(offset), len)
        }
        #[cfg(not(unix))]
        {
            &self.bytes[offset..offset + len]
        }
    }

    /// Overwrites the bytes starting at `offset` with `data`.
    pub fn write_slice(&mut self, offset: usize, data: &[u8]) {
        assert!(
            offset + data.len() <= self.len(),
            "store write out of bounds"
        );
        #[cfg(unix)]
        unsafe {
            let dest = slice::from_raw_parts_mut(self.ptr.add(offset), data.len());
            dest.copy_from_slice(data);
        }
        #[cfg(not(unix))]
        {
            self.bytes[offset..offset + data.len()].copy_from_slice(data);
        }
    }
}

#[cfg(unix)]
impl Drop for StoreBuffer {
    /// Unmaps the anonymous mapping.
    fn drop(&mut self) {
        unsafe {
            libc::munmap(self.ptr.cast(), self.size);
        }
    }
}
