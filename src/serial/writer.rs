//! Line Writer
//!
//! Frames output text with a single trailing newline.

use std::io::Write;

use bytes::{BufMut, BytesMut};

use crate::config::Config;
use crate::error::Result;

/// Writes bounded, newline-terminated lines and the prompt token
pub struct LineWriter<W> {
    /// Output stream
    sink: W,

    /// Scratch line buffer, cleared before every line
    scratch: BytesMut,

    /// Buffer capacity (`CAP`)
    capacity: usize,

    /// Token written by `write_prompt`
    prompt: String,
}

impl<W: Write> LineWriter<W> {
    /// Create a writer using the configured capacity and prompt
    pub fn new(sink: W, config: &Config) -> Self {
        Self::with_capacity(sink, config.line_capacity, config.prompt.clone())
    }

    /// Create a writer with an explicit capacity (`CAP`, at least 2)
    pub fn with_capacity(sink: W, capacity: usize, prompt: impl Into<String>) -> Self {
        let capacity = capacity.max(2);
        Self {
            sink,
            scratch: BytesMut::with_capacity(capacity),
            capacity,
            prompt: prompt.into(),
        }
    }

    /// Write `text` plus one newline, then flush
    ///
    /// Text longer than `CAP - 2` bytes is cut to `CAP - 2`. Empty text
    /// writes nothing.
    pub fn write_line(&mut self, text: impl AsRef<[u8]>) -> Result<()> {
        let text = text.as_ref();
        if text.is_empty() {
            return Ok(());
        }

        self.scratch.clear();
        let end = text.len().min(self.capacity - 2);
        self.scratch.put_slice(&text[..end]);
        self.scratch.put_u8(b'\n');

        self.sink.write_all(&self.scratch)?;
        self.sink.flush()?;
        self.scratch.clear();

        Ok(())
    }

    /// Write the prompt token as-is, then flush
    pub fn write_prompt(&mut self) -> Result<()> {
        self.sink.write_all(self.prompt.as_bytes())?;
        self.sink.flush()?;
        Ok(())
    }

    /// Buffer capacity (`CAP`)
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get a reference to the output stream
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Unwrap the output stream
    pub fn into_inner(self) -> W {
        self.sink
    }
}
