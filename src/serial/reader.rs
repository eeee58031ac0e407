//! Line Reader
//!
//! Accumulates input bytes into a bounded line.

use std::borrow::Cow;
use std::thread;
use std::time::Duration;

use bytes::{BufMut, Bytes, BytesMut};

use crate::config::Config;
use crate::error::{Result, SerialError};
use super::{ByteSource, Poll};

/// A line as received, newline removed
///
/// `count` is the true number of bytes seen before the newline, which
/// exceeds `bytes().len()` when the line overran the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadLine {
    data: Bytes,
    count: usize,
    overrun: bool,
}

impl ReadLine {
    /// Stored bytes (at most `CAP - 1`)
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Stored bytes as text, with invalid UTF-8 replaced
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }

    /// True number of bytes received before the newline
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether the line exceeded the buffer and was truncated
    pub fn is_overrun(&self) -> bool {
        self.overrun
    }

    /// Whether the line was a bare newline
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Reads newline-terminated lines from a byte source
pub struct LineReader<S> {
    /// Input primitive
    source: S,

    /// Scratch line buffer, cleared before every line
    scratch: BytesMut,

    /// Buffer capacity (`CAP`)
    capacity: usize,

    /// Sleep between polls while the source is pending
    retry_delay: Duration,
}

impl<S: ByteSource> LineReader<S> {
    /// Create a reader using the configured capacity and retry delay
    pub fn new(source: S, config: &Config) -> Self {
        Self::with_capacity(source, config.line_capacity, config.read_retry_delay())
    }

    /// Create a reader with an explicit capacity (`CAP`, at least 1)
    pub fn with_capacity(source: S, capacity: usize, retry_delay: Duration) -> Self {
        let capacity = capacity.max(1);
        Self {
            source,
            scratch: BytesMut::with_capacity(capacity),
            capacity,
            retry_delay,
        }
    }

    /// Block until a full line arrives
    ///
    /// Sleeps `retry_delay` between polls while no data is available and
    /// never returns on that condition alone. Returns
    /// [`SerialError::Disconnected`] if the source closes, discarding any
    /// partial line.
    pub fn read_line(&mut self) -> Result<ReadLine> {
        self.scratch.clear();
        let limit = self.capacity - 1;
        let mut count = 0usize;

        loop {
            match self.source.poll_byte()? {
                Poll::Byte(b'\n') => break,
                Poll::Byte(byte) => {
                    if count < limit {
                        self.scratch.put_u8(byte);
                    }
                    count += 1;
                }
                Poll::Pending => thread::sleep(self.retry_delay),
                Poll::Closed => {
                    self.scratch.clear();
                    return Err(SerialError::Disconnected);
                }
            }
        }

        let overrun = count > limit;
        if overrun {
            tracing::warn!(
                "Input overrun: {} bytes received, {} stored",
                count,
                limit
            );
        }

        let line = ReadLine {
            data: Bytes::copy_from_slice(&self.scratch),
            count,
            overrun,
        };
        self.scratch.clear();

        Ok(line)
    }

    /// Buffer capacity (`CAP`)
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get a mutable reference to the byte source
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
