//! The command-line interface of the `pagecat` binary

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

use crate::error::Error;

/// The command line arguments of `pagecat`
#[derive(Parser, Debug, PartialEq, Eq)]
#[command(
    author,
    version,
    about = "Copy a file to stdout through a page-aligned, block-size tuned buffer",
    long_about = None,
    after_help = "A FILE starting with '-' must follow '--', as in 'pagecat -- -file'",
)]
pub struct CommandLineArgs {
    /// The file to copy to stdout
    #[arg(value_name = "FILE", required = true)]
    pub file: PathBuf,
}

/// The outcome of parsing the command line
#[derive(Debug, PartialEq, Eq)]
pub enum Parsed {
    /// Copy the file in the arguments
    Copy(CommandLineArgs),
    /// `--help` or `--version` was requested and has already been printed
    Exit,
}

impl CommandLineArgs {
    /// Parse `args` (including the binary name) into [`Parsed`]
    ///
    /// Help and version requests are printed right away. Any other parser error, in particular a
    /// wrong number of arguments, becomes an [`Error::UsageError`] with clap's rendered usage.
    pub fn parse_args<I, T>(args: I) -> Result<Parsed, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(args) => Ok(Parsed::Copy(args)),
            Err(error) => match error.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    error.print().map_err(Error::WriteError)?;
                    Ok(Parsed::Exit)
                }
                _ => Err(Error::UsageError(error.render().to_string())),
            },
        }
    }
}
