//! Closing a descriptor behind the back of `InputFile` frees its number for reuse, so this is
//! the only test in this binary.

use std::os::fd::AsRawFd;

use pagecat::error::Error;
use pagecat::runner::input::InputFile;
use tempfile::NamedTempFile;

#[test]
fn test_close_error_when_descriptor_already_closed() {
    let tmp = NamedTempFile::new().unwrap();
    let input = InputFile::open(tmp.path()).unwrap();

    // SAFETY: The descriptor is owned by `input` which only calls close(2) on it afterwards
    assert_eq!(unsafe { libc::close(input.as_raw_fd()) }, 0);

    match input.close() {
        Err(Error::CloseError(path, error)) => {
            assert_eq!(path, tmp.path());
            assert_eq!(error.raw_os_error(), Some(libc::EBADF));
        }
        other => panic!("Expected a close error but was: {other:?}"),
    }
}
