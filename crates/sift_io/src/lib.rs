//! Single-threaded stream pumping for long-running analyzer sessions.
//!
//! The [`EventLoop`] repeatedly reads from one readable stream handle and
//! forwards each chunk to an owner-supplied consumer until the peer closes
//! its end of the stream. All I/O goes through the [`ReadPipe`] facade, so
//! the loop itself never touches OS primitives directly.

#![warn(missing_docs)]

pub mod event_loop;
pub mod pipe;

pub use event_loop::{EventLoop, EventLoopDelegate, EventLoopError};
#[cfg(unix)]
pub use pipe::PipeReader;
pub use pipe::{ReadOutcome, ReadPipe};
