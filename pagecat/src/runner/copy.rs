//! The read/write copy loop

use std::io::{self, ErrorKind, Read, Write};

use log::trace;

/// The side of the copy loop which failed
#[derive(Debug)]
pub enum CopyError {
    /// Reading from the source failed
    Read(io::Error),
    /// Writing to the destination failed
    Write(io::Error),
}

/// A [`Write`] implementation which writes directly to the stdout file descriptor
///
/// Unlike [`std::io::Stdout`] there's no line buffering involved, so every call to `write` is a
/// single `write(2)` system call and may transfer fewer bytes than requested.
#[derive(Debug, Default, Clone, Copy)]
pub struct RawStdout;

impl Write for RawStdout {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // SAFETY: buf is a valid slice of buf.len() readable bytes for the duration of the call
        let written = unsafe { libc::write(libc::STDOUT_FILENO, buf.as_ptr().cast(), buf.len()) };
        usize::try_from(written).map_err(|_| io::Error::last_os_error())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Write the whole `chunk` to `writer`, reissuing the remainder after partial writes
///
/// Interrupted writes are retried. A writer which accepts zero bytes of a non-empty remainder
/// fails with [`ErrorKind::WriteZero`].
pub fn write_chunk<W>(writer: &mut W, chunk: &[u8]) -> io::Result<()>
where
    W: Write + ?Sized,
{
    let mut written = 0;
    while written < chunk.len() {
        match writer.write(&chunk[written..]) {
            Ok(0) => {
                return Err(io::Error::new(
                    ErrorKind::WriteZero,
                    format!("wrote 0 of {} remaining bytes", chunk.len() - written),
                ));
            }
            Ok(n) => {
                written += n;
                if written < chunk.len() {
                    trace!("Partial write: {written} of {} bytes", chunk.len());
                }
            }
            Err(error) if error.kind() == ErrorKind::Interrupted => {}
            Err(error) => return Err(error),
        }
    }
    Ok(())
}

/// Copy everything from `reader` to `writer` in chunks of at most `buffer.len()` bytes
///
/// Each chunk is written completely before the next read is issued. Returns the number of bytes
/// copied.
pub fn copy<R, W>(reader: &mut R, writer: &mut W, buffer: &mut [u8]) -> Result<u64, CopyError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut total = 0u64;
    loop {
        let n = match reader.read(buffer) {
            Ok(0) => return Ok(total),
            Ok(n) => n,
            Err(error) if error.kind() == ErrorKind::Interrupted => continue,
            Err(error) => return Err(CopyError::Read(error)),
        };
        trace!("Read {n} bytes");

        write_chunk(writer, &buffer[..n]).map_err(CopyError::Write)?;
        total += n as u64;
    }
}
