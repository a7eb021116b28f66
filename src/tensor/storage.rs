//! Storage: host memory backing a tensor

use std::alloc::{Layout as AllocLayout, alloc_zeroed, dealloc, handle_alloc_error};
use std::ptr::NonNull;

/// Alignment of every allocation (AVX-512 width)
const ALIGN: usize = 64;

/// Zero-initialised, 64-byte aligned byte buffer.
///
/// Storage hands out raw write access through a shared reference so that a
/// kernel can fill disjoint regions of one output from several workers. It is
/// therefore `Send` but deliberately not `Sync`: sharing a tensor across
/// threads is only possible through the scheduler, which guarantees the
/// regions it writes are disjoint.
pub struct Storage {
    ptr: NonNull<u8>,
    len: usize,
}

// SAFETY: Storage exclusively owns its allocation.
unsafe impl Send for Storage {}

impl Storage {
    /// Allocate `len` zeroed bytes
    pub fn zeroed(len: usize) -> Self {
        if len == 0 {
            return Self::empty();
        }
        let layout = Self::layout(len);
        // SAFETY: layout has non-zero size.
        let raw = unsafe { alloc_zeroed(layout) };
        let Some(ptr) = NonNull::new(raw) else {
            handle_alloc_error(layout);
        };
        Self { ptr, len }
    }

    /// Allocate and copy `bytes`
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let storage = Self::zeroed(bytes.len());
        if !bytes.is_empty() {
            // SAFETY: the fresh allocation is `bytes.len()` long and cannot overlap `bytes`.
            unsafe {
                std::ptr::copy_nonoverlapping(bytes.as_ptr(), storage.ptr.as_ptr(), bytes.len());
            }
        }
        storage
    }

    /// Storage with no allocation
    pub fn empty() -> Self {
        Self {
            ptr: NonNull::dangling(),
            len: 0,
        }
    }

    /// Size in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if storage is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// View the bytes
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: ptr is valid for len bytes (or dangling with len 0).
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Copy `src` into the buffer at byte `offset`.
    ///
    /// # Panics
    /// If `offset + src.len()` exceeds the buffer.
    ///
    /// # Safety
    /// No other reference may read or write `offset..offset + src.len()` for
    /// the duration of the call; in particular no `as_bytes` slice covering
    /// that range may be alive.
    #[inline]
    pub(crate) unsafe fn write_at(&self, offset: usize, src: &[u8]) {
        let end = offset
            .checked_add(src.len())
            .filter(|&end| end <= self.len);
        assert!(
            end.is_some(),
            "write of {} bytes at offset {} exceeds storage of {} bytes",
            src.len(),
            offset,
            self.len
        );
        // SAFETY: range checked above; exclusivity guaranteed by the caller.
        unsafe {
            std::ptr::copy_nonoverlapping(src.as_ptr(), self.ptr.as_ptr().add(offset), src.len());
        }
    }

    fn layout(len: usize) -> AllocLayout {
        match AllocLayout::from_size_align(len, ALIGN) {
            Ok(layout) => layout,
            Err(_) => panic!("Out of memory: failed to allocate {len} bytes"),
        }
    }
}

impl Drop for Storage {
    fn drop(&mut self) {
        if self.len != 0 {
            // SAFETY: allocated in `zeroed` with the same layout.
            unsafe { dealloc(self.ptr.as_ptr(), Self::layout(self.len)) };
        }
    }
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage").field("len", &self.len).finish()
    }
}
