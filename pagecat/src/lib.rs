//! The pagecat library
//!
//! `pagecat` copies a single file to stdout. The read buffer is sized after the preferred I/O
//! block size of the file ([`blocksize::io_blocksize`]) and aligned to a memory page
//! ([`buffer::align_alloc`]). The copy loop in [`runner::copy`] keeps writing until every chunk
//! is fully flushed, no matter how few bytes the consumer accepts per call.

#![doc(test(attr(warn(unused))))]
#![doc(test(attr(allow(unused_extern_crates))))]

pub mod blocksize;
pub mod buffer;
pub mod error;
pub mod runner;
