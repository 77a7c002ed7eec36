//! The input file of the copy loop

use std::fs::File;
use std::io::{self, Read};
use std::os::fd::{AsRawFd, IntoRawFd, RawFd};
use std::path::{Path, PathBuf};

use log::debug;

use crate::blocksize::io_blocksize;
use crate::error::Error;

/// A file opened read-only together with its path
///
/// The file descriptor is closed by [`InputFile::close`] or, on error paths, when dropped.
#[derive(Debug)]
pub struct InputFile {
    file: File,
    path: PathBuf,
}

impl InputFile {
    /// Open the file at `path` for reading only
    pub fn open<T>(path: T) -> Result<Self, Error>
    where
        T: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|error| Error::OpenError(path.to_owned(), error))?;
        debug!("Opened '{}'", path.display());

        Ok(Self {
            file,
            path: path.to_owned(),
        })
    }

    /// The path this file was opened with
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The buffer size to use for bulk reads from this file
    pub fn blocksize(&self) -> usize {
        io_blocksize(&self.file)
    }

    /// Close the file descriptor and report a failure of `close(2)`
    pub fn close(self) -> Result<(), Error> {
        let Self { file, path } = self;
        let fd = file.into_raw_fd();

        // SAFETY: The file descriptor is owned by us and not used after this call
        if unsafe { libc::close(fd) } == 0 {
            debug!("Closed '{}'", path.display());
            Ok(())
        } else {
            Err(Error::CloseError(path, io::Error::last_os_error()))
        }
    }
}

impl AsRawFd for InputFile {
    fn as_raw_fd(&self) -> RawFd {
        self.file.as_raw_fd()
    }
}

impl Read for InputFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}
