//! Platform facade over readable stream handles.

use std::io;

/// The classified result of one read from a stream handle.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ReadOutcome {
    /// `n > 0` bytes were read into the front of the buffer.
    Data(usize),
    /// The peer closed its end of the stream; no further data will arrive.
    EndOfFile,
    /// The handle is non-blocking and no data is available right now.
    WouldBlock,
}

/// A readable stream handle the event loop can drive.
///
/// Implementations classify reads into [`ReadOutcome`]; any other failure is
/// surfaced as an `io::Error` and is outside the loop's retry policy.
pub trait ReadPipe {
    /// Reads up to `buf.len()` bytes from the handle into `buf`.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<ReadOutcome>;

    /// Returns `true` if the handle is in non-blocking mode.
    ///
    /// Non-blocking handles may return [`ReadOutcome::WouldBlock`] and
    /// require a readiness wait between reads; blocking handles park the
    /// calling thread inside [`read`](Self::read) instead.
    fn is_nonblocking(&self) -> bool;

    /// Blocks until the handle is readable (or at end of stream).
    ///
    /// Never called for blocking handles.
    fn wait_readable(&mut self) -> io::Result<()>;
}

#[cfg(unix)]
pub use unix::PipeReader;

#[cfg(unix)]
mod unix {
    use super::{ReadOutcome, ReadPipe};
    use nix::fcntl::{fcntl, FcntlArg, OFlag};
    use nix::poll::{poll, PollFd, PollFlags, PollTimeout};
    use std::fs::File;
    use std::io::{self, Read};
    use std::os::fd::{AsFd, AsRawFd, OwnedFd};

    /// A readable pipe or socket end on Unix.
    ///
    /// Reads go through `std::io::Read`; the readiness wait is a
    /// level-triggered `poll(2)` on `POLLIN` with no timeout, so the loop
    /// suspends instead of busy-polling.
    pub struct PipeReader {
        file: File,
    }

    impl PipeReader {
        /// Takes ownership of a readable file descriptor.
        pub fn new(fd: OwnedFd) -> Self {
            Self { file: File::from(fd) }
        }

        /// Switches the descriptor between blocking and non-blocking mode.
        pub fn set_nonblocking(&self, nonblocking: bool) -> io::Result<()> {
            let raw = fcntl(self.file.as_raw_fd(), FcntlArg::F_GETFL).map_err(io::Error::from)?;
            let mut flags = OFlag::from_bits_truncate(raw);
            flags.set(OFlag::O_NONBLOCK, nonblocking);
            fcntl(self.file.as_raw_fd(), FcntlArg::F_SETFL(flags)).map_err(io::Error::from)?;
            Ok(())
        }
    }

    impl ReadPipe for PipeReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<ReadOutcome> {
            match self.file.read(buf) {
                Ok(0) => Ok(ReadOutcome::EndOfFile),
                Ok(n) => Ok(ReadOutcome::Data(n)),
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => Ok(ReadOutcome::WouldBlock),
                Err(e) => Err(e),
            }
        }

        fn is_nonblocking(&self) -> bool {
            fcntl(self.file.as_raw_fd(), FcntlArg::F_GETFL)
                .map(|raw| OFlag::from_bits_truncate(raw).contains(OFlag::O_NONBLOCK))
                .unwrap_or(false)
        }

        fn wait_readable(&mut self) -> io::Result<()> {
            let mut fds = [PollFd::new(self.file.as_fd(), PollFlags::POLLIN)];
            loop {
                match poll(&mut fds, PollTimeout::NONE) {
                    Ok(_) => return Ok(()),
                    Err(nix::errno::Errno::EINTR) => continue,
                    Err(e) => return Err(io::Error::from(e)),
                }
            }
        }
    }

}
