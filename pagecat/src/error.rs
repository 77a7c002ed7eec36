//! The module containing the crate main [`Error`] type

use std::fmt::Display;
use std::io;
use std::path::PathBuf;

/// The main pagecat error type
///
/// All errors are terminal and lead to exit code `1`.
#[derive(Debug)]
pub enum Error {
    /// The command-line arguments are invalid
    ///
    /// `UsageError(rendered_usage)`
    UsageError(String),
    /// The input file could not be opened for reading
    ///
    /// `OpenError(path, cause)`
    OpenError(PathBuf, io::Error),
    /// The page-aligned copy buffer could not be allocated
    ///
    /// `AllocationError(size, alignment)`
    AllocationError(usize, usize),
    /// Reading from the input file failed
    ///
    /// `ReadError(path, cause)`
    ReadError(PathBuf, io::Error),
    /// Writing to stdout failed
    ///
    /// `WriteError(cause)`
    WriteError(io::Error),
    /// Closing the input file failed
    ///
    /// `CloseError(path, cause)`
    CloseError(PathBuf, io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UsageError(usage) => write!(f, "{usage}"),
            Self::OpenError(path, error) => {
                write!(f, "Failed to open '{}': {error}", path.display())
            }
            Self::AllocationError(size, alignment) => write!(
                f,
                "Failed to allocate a buffer of {size} bytes aligned to {alignment} bytes"
            ),
            Self::ReadError(path, error) => {
                write!(f, "Failed to read from '{}': {error}", path.display())
            }
            Self::WriteError(error) => write!(f, "Failed to write to stdout: {error}"),
            Self::CloseError(path, error) => {
                write!(f, "Failed to close '{}': {error}", path.display())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OpenError(_, error)
            | Self::ReadError(_, error)
            | Self::WriteError(error)
            | Self::CloseError(_, error) => Some(error),
            Self::UsageError(_) | Self::AllocationError(..) => None,
        }
    }
}
