//! A cooperative, single-threaded loop pumping bytes from a stream handle.

use crate::pipe::{ReadOutcome, ReadPipe};
use std::io;
use tracing::{debug, trace};

/// The read buffer size for one loop iteration.
const READ_BUFFER_SIZE: usize = 1024;

/// The owner of an [`EventLoop`]: supplies the stream handle and consumes
/// the bytes read from it.
///
/// Dispatch is compile-time polymorphic; no indirection is imposed, none is
/// forbidden. The loop never calls these operations concurrently.
pub trait EventLoopDelegate {
    /// The concrete stream handle type this delegate exposes.
    type Pipe: ReadPipe;

    /// Returns the readable stream handle to pump.
    fn readable_pipe(&mut self) -> &mut Self::Pipe;

    /// Consumes one chunk of bytes read from the stream.
    ///
    /// Called with `data.len() > 0`, in read order, with the exact chunk
    /// boundaries the reads produced. Runs to completion on the loop's
    /// thread before the next read, so it must not block indefinitely.
    fn append(&mut self, data: &[u8]);
}

/// A non-retryable event loop failure.
///
/// Would-block results are retried silently and end-of-stream is the normal
/// termination; everything else is unrecoverable within the loop's scope
/// and is handed back to the caller.
#[derive(Debug, thiserror::Error)]
pub enum EventLoopError {
    /// Reading from the stream handle failed.
    #[error("failed to read from input stream: {0}")]
    Read(#[source] io::Error),

    /// Waiting for the stream handle to become readable failed.
    #[error("failed to wait for input stream readiness: {0}")]
    Wait(#[source] io::Error),
}

/// An event loop pumping one readable stream into its delegate.
///
/// Strictly single-threaded and cooperative: read, synchronous hand-off to
/// the delegate, readiness wait, repeat. The only suspension point is the
/// readiness wait (or the read itself for blocking handles), and the only
/// liveness signal is end-of-stream; a caller wanting cancellation must
/// close the stream from outside.
pub struct EventLoop<D: EventLoopDelegate> {
    delegate: D,
}

impl<D: EventLoopDelegate> EventLoop<D> {
    /// Creates an event loop driving the given delegate.
    pub fn new(delegate: D) -> Self {
        Self { delegate }
    }

    /// Returns the delegate.
    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    /// Returns the delegate mutably.
    pub fn delegate_mut(&mut self) -> &mut D {
        &mut self.delegate
    }

    /// Consumes the loop, returning the delegate.
    pub fn into_delegate(self) -> D {
        self.delegate
    }

    /// Runs until the stream reports end-of-stream.
    ///
    /// Each iteration performs one read. Data is forwarded to the delegate
    /// in one `append` call per chunk; a would-block result skips the
    /// delegate and falls through to the readiness wait. The delegate is
    /// never invoked with zero bytes nor after end-of-stream, and at most
    /// one blocking readiness wait happens per iteration.
    pub fn run(&mut self) -> Result<(), EventLoopError> {
        let mut stream_ended = false;
        while !stream_ended {
            let mut buffer = [0u8; READ_BUFFER_SIZE];
            let outcome = self
                .delegate
                .readable_pipe()
                .read(&mut buffer)
                .map_err(EventLoopError::Read)?;
            match outcome {
                ReadOutcome::EndOfFile => {
                    debug!("input stream reached end of stream");
                    stream_ended = true;
                }
                ReadOutcome::WouldBlock => {
                    trace!("read would block; waiting for readiness");
                }
                ReadOutcome::Data(n) => {
                    debug_assert!(n > 0 && n <= buffer.len());
                    trace!(bytes = n, "forwarding chunk to delegate");
                    self.delegate.append(&buffer[..n]);
                }
            }

            if !stream_ended && self.delegate.readable_pipe().is_nonblocking() {
                self.delegate
                    .readable_pipe()
                    .wait_readable()
                    .map_err(EventLoopError::Wait)?;
            }
        }
        Ok(())
    }
}
