//! Byte sources
//!
//! The input primitive the line reader polls.

use std::io::{self, ErrorKind, Read};

/// Result of polling a byte source once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Poll {
    /// The next input byte
    Byte(u8),

    /// Nothing available right now; poll again later
    Pending,

    /// The source will never produce more data
    Closed,
}

/// A non-blocking, one-byte-at-a-time input primitive
pub trait ByteSource {
    /// Poll for the next byte without waiting
    fn poll_byte(&mut self) -> io::Result<Poll>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn poll_byte(&mut self) -> io::Result<Poll> {
        (**self).poll_byte()
    }
}

/// Adapts any `Read` into a `ByteSource`
///
/// `Ok(0)` means end of stream. Timeouts and `WouldBlock` (from a socket with
/// a read timeout or in non-blocking mode) mean no data yet.
pub struct StreamSource<R> {
    inner: R,
}

impl<R: Read> StreamSource<R> {
    /// Wrap a reader. Wrap unbuffered handles in a `BufReader` first.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Get a reference to the wrapped reader
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Unwrap the reader
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> ByteSource for StreamSource<R> {
    fn poll_byte(&mut self) -> io::Result<Poll> {
        let mut byte = [0u8; 1];
        match self.inner.read(&mut byte) {
            Ok(0) => Ok(Poll::Closed),
            Ok(_) => Ok(Poll::Byte(byte[0])),
            Err(e)
                if matches!(
                    e.kind(),
                    ErrorKind::WouldBlock | ErrorKind::TimedOut | ErrorKind::Interrupted
                ) =>
            {
                Ok(Poll::Pending)
            }
            Err(e) => Err(e),
        }
    }
}
