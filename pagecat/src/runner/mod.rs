//! The driver of the `pagecat` binary
//!
//! [`run`] parses the command line and hands the file over to [`cat`], which walks through the
//! stages of a copy:
//!
//! 1. Open the input file read-only
//! 2. Size the buffer after the preferred block size of the file
//! 3. Allocate a page-aligned buffer of that size
//! 4. Read chunks and write each chunk completely
//! 5. Release the buffer and close the file
//!
//! Resources already acquired are released on every error path before the error is returned.

pub mod args;
pub mod copy;
pub mod input;

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use log::debug;

use self::args::{CommandLineArgs, Parsed};
use self::copy::{CopyError, RawStdout};
use self::input::InputFile;
use crate::blocksize::page_size;
use crate::buffer::{align_alloc, align_free};
use crate::error::Error;

/// The environment variables understood by `pagecat`
pub mod envs {
    /// Set the color of log messages to `never`, `always` or `auto`
    pub const PAGECAT_COLOR: &str = "PAGECAT_COLOR";
    /// The log level filter in `env_logger` syntax
    pub const PAGECAT_LOG: &str = "PAGECAT_LOG";
}

/// Copy the file at `path` to `writer`
///
/// Returns the number of bytes copied.
pub fn cat<T, W>(path: T, writer: &mut W) -> Result<u64, Error>
where
    T: AsRef<Path>,
    W: Write + ?Sized,
{
    let input = InputFile::open(path)?;
    let size = input.blocksize();
    copy_input(input, size, writer)
}

/// Copy `input` to `writer` through a page-aligned buffer of `size` bytes
///
/// The file is closed on every path, the buffer is released before the file.
fn copy_input<W>(mut input: InputFile, size: usize, writer: &mut W) -> Result<u64, Error>
where
    W: Write + ?Sized,
{
    let Some(mut buffer) = align_alloc(size) else {
        return Err(Error::AllocationError(size, page_size()));
    };
    debug!(
        "Allocated {} bytes at {:p} aligned to {} bytes",
        buffer.len(),
        buffer.as_ptr(),
        buffer.alignment()
    );

    let result = copy::copy(&mut input, writer, buffer.as_mut_slice());
    let copied = result.map_err(|error| match error {
        CopyError::Read(error) => Error::ReadError(input.path().to_owned(), error),
        CopyError::Write(error) => Error::WriteError(error),
    })?;

    align_free(buffer);
    input.close()?;

    debug!("Copied {copied} bytes");
    Ok(copied)
}

/// The main entry point of the `pagecat` binary
///
/// Parses the arguments of the current process and copies the file to stdout.
pub fn run() -> Result<()> {
    run_with_args(std::env::args_os())
}

/// Like [`run`] but with the given `args` (including the binary name)
pub fn run_with_args<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match CommandLineArgs::parse_args(args)? {
        Parsed::Copy(args) => {
            cat(&args.file, &mut RawStdout)?;
            Ok(())
        }
        Parsed::Exit => Ok(()),
    }
}
