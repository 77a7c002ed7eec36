//! Choose the size of the copy buffer
//!
//! The buffer size is derived from the preferred I/O block size of the input file (`st_blksize`)
//! scaled by [`BUFFER_MULTIPLIER`] and rounded up to a power of two. If the filesystem doesn't
//! report a usable block size, the memory page size takes its place.

use std::fs::File;
use std::os::unix::fs::MetadataExt;

use log::debug;

/// The factor applied to the block size
pub const BUFFER_MULTIPLIER: usize = 8;

/// The page size to assume if `sysconf` can't tell us
pub const FALLBACK_PAGE_SIZE: usize = 4096;

/// Block sizes below this value are not trusted
pub const MIN_BLOCK_SIZE: usize = 512;

/// Return the smallest power of two greater than or equal to `x`
///
/// `next_pow2(0)` is `1`. There's no overflow protection: if `x` is greater than the largest
/// power of two representable in a `usize`, the result wraps around to `0`.
///
/// # Examples
///
/// ```
/// use pagecat::blocksize::next_pow2;
///
/// assert_eq!(next_pow2(0), 1);
/// assert_eq!(next_pow2(4096), 4096);
/// assert_eq!(next_pow2(4097), 8192);
/// ```
pub const fn next_pow2(x: usize) -> usize {
    if x == 0 {
        return 1;
    }

    let mut x = x - 1;
    x |= x >> 1;
    x |= x >> 2;
    x |= x >> 4;
    x |= x >> 8;
    #[cfg(any(target_pointer_width = "32", target_pointer_width = "64"))]
    {
        x |= x >> 16;
    }
    #[cfg(target_pointer_width = "64")]
    {
        x |= x >> 32;
    }
    x.wrapping_add(1)
}

/// Return the memory page size of the system
///
/// Falls back to [`FALLBACK_PAGE_SIZE`] if the query fails or returns a non-positive value.
pub fn page_size() -> usize {
    // SAFETY: sysconf has no preconditions and only reads system configuration
    let raw = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
    usize::try_from(raw)
        .ok()
        .filter(|size| *size > 0)
        .unwrap_or(FALLBACK_PAGE_SIZE)
}

/// Choose the buffer size for bulk I/O from the `page_size` and the reported `block_size`
///
/// A `block_size` which is unknown (`None`), smaller than [`MIN_BLOCK_SIZE`], not a power of two
/// or so large that scaling it would overflow is replaced by the `page_size`.
pub fn choose_blocksize(page_size: usize, block_size: Option<u64>) -> usize {
    let block_size = block_size
        .and_then(|size| usize::try_from(size).ok())
        .filter(|size| *size >= MIN_BLOCK_SIZE && size.is_power_of_two())
        .filter(|size| size.checked_mul(BUFFER_MULTIPLIER).is_some())
        .unwrap_or(page_size);

    next_pow2(block_size.saturating_mul(BUFFER_MULTIPLIER))
}

/// Return a generous, power-of-two buffer size for bulk reads from `file`
///
/// The result is never smaller than `512 * 8` bytes.
pub fn io_blocksize(file: &File) -> usize {
    let page_size = page_size();
    let block_size = match file.metadata() {
        Ok(metadata) => Some(metadata.blksize()),
        Err(error) => {
            debug!("Unable to query the preferred block size: {error}");
            None
        }
    };

    let size = choose_blocksize(page_size, block_size);
    debug!(
        "Page size: {page_size}, block size: {}, buffer size: {size}",
        block_size.map_or_else(|| "unknown".to_owned(), |s| s.to_string())
    );
    size
}
