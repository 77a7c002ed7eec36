//! Page-aligned memory for the copy buffer
//!
//! [`AlignedBuffer`] owns a zero-initialized block of memory which starts on a page boundary. The
//! memory is released exactly once, either explicitly with [`align_free`] or when the buffer goes
//! out of scope.

use std::alloc::{alloc_zeroed, dealloc, Layout};
use std::fmt::Debug;
use std::ptr::NonNull;

use crate::blocksize::page_size;

/// An owned, aligned and zero-initialized block of bytes
pub struct AlignedBuffer {
    layout: Layout,
    ptr: NonNull<u8>,
}

impl AlignedBuffer {
    /// Allocate `size` bytes aligned to `alignment`
    ///
    /// Returns `None` if `size` is zero, `alignment` is not a power of two, the rounded up `size`
    /// would overflow `isize` or the allocator is out of memory.
    pub fn new(size: usize, alignment: usize) -> Option<Self> {
        if size == 0 {
            return None;
        }

        let layout = Layout::from_size_align(size, alignment).ok()?;
        // SAFETY: The layout has a non-zero size
        let ptr = unsafe { alloc_zeroed(layout) };
        NonNull::new(ptr).map(|ptr| Self { layout, ptr })
    }

    /// The alignment this buffer was allocated with
    pub fn alignment(&self) -> usize {
        self.layout.align()
    }

    /// The size of the buffer in bytes
    pub fn len(&self) -> usize {
        self.layout.size()
    }

    /// Always `false`, zero-sized buffers can't be allocated
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A raw pointer to the start of the buffer
    pub fn as_ptr(&self) -> *const u8 {
        self.ptr.as_ptr().cast_const()
    }

    /// The whole buffer as slice
    pub fn as_slice(&self) -> &[u8] {
        // SAFETY: ptr points to `len` initialized bytes owned by self
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len()) }
    }

    /// The whole buffer as mutable slice
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: ptr points to `len` initialized bytes exclusively borrowed through self
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len()) }
    }
}

impl Debug for AlignedBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlignedBuffer")
            .field("ptr", &self.ptr)
            .field("len", &self.len())
            .field("alignment", &self.alignment())
            .finish()
    }
}

impl Drop for AlignedBuffer {
    fn drop(&mut self) {
        // SAFETY: ptr was returned by `alloc_zeroed` with exactly this layout and is freed only
        // here
        unsafe {
            dealloc(self.ptr.as_ptr(), self.layout);
        }
    }
}

/// Allocate a zero-initialized buffer of exactly `size` bytes aligned to the memory page size
///
/// Returns `None` if the allocation fails.
///
/// # Examples
///
/// ```
/// use pagecat::blocksize::page_size;
/// use pagecat::buffer::{align_alloc, align_free};
///
/// let buffer = align_alloc(32_768).unwrap();
/// assert_eq!(buffer.as_ptr() as usize % page_size(), 0);
/// align_free(buffer);
/// ```
pub fn align_alloc(size: usize) -> Option<AlignedBuffer> {
    AlignedBuffer::new(size, page_size())
}

/// Release a buffer previously returned by [`align_alloc`]
///
/// This function can't fail. Taking the buffer by value makes a second release impossible.
pub fn align_free(buffer: AlignedBuffer) {
    drop(buffer);
}
