//! Session
//!
//! The device-side read → dispatch → write loop for one operator.

use std::io::Write;

use crate::config::Config;
use crate::dispatcher::Dispatcher;
use crate::error::{Result, SerialError};
use crate::platform::Platform;
use crate::protocol::{Outcome, ERROR_OVERRUN, MESSAGE_SYNC};
use crate::serial::{ByteSource, LineReader, LineWriter};

/// What a single [`Session::step`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// Line exceeded the buffer; the overrun line was written
    Overrun { count: usize },

    /// Bare newline; nothing written
    Empty,

    /// Line was dispatched and answered
    Replied(Outcome),
}

/// Runs the interpreter over one byte source and output stream
pub struct Session<S, W, P> {
    reader: LineReader<S>,
    writer: LineWriter<W>,
    dispatcher: Dispatcher<P>,
}

impl<S: ByteSource, W: Write, P: Platform> Session<S, W, P> {
    pub fn new(source: S, sink: W, platform: P, config: &Config) -> Self {
        Self {
            reader: LineReader::new(source, config),
            writer: LineWriter::new(sink, config),
            dispatcher: Dispatcher::new(platform, config),
        }
    }

    /// Write the banner, then serve lines until the source closes
    ///
    /// A closed source ends the session cleanly. Command errors never end
    /// it; only transport I/O errors do.
    pub fn run(&mut self) -> Result<()> {
        tracing::debug!("Session started");
        self.writer.write_line(MESSAGE_SYNC)?;

        loop {
            match self.step() {
                Ok(result) => tracing::trace!("Step finished: {:?}", result),
                Err(SerialError::Disconnected) => {
                    tracing::debug!("Byte source closed, ending session");
                    return Ok(());
                }
                Err(e) => {
                    tracing::warn!("Session I/O error: {}", e);
                    return Err(e);
                }
            }
        }
    }

    /// Prompt, read one line, and answer it
    pub fn step(&mut self) -> Result<StepResult> {
        self.writer.write_prompt()?;
        let line = self.reader.read_line()?;

        tracing::trace!("Received line ({} bytes): {:?}", line.count(), line.text());

        if line.is_overrun() {
            self.writer.write_line(ERROR_OVERRUN)?;
            return Ok(StepResult::Overrun {
                count: line.count(),
            });
        }
        if line.is_empty() {
            return Ok(StepResult::Empty);
        }

        let reply = self.dispatcher.process(&line.text());
        match reply.outcome.error_message() {
            None => {
                // The writer adds the one newline the wire line ends with
                let text = reply.text.strip_suffix('\n').unwrap_or(reply.text.as_str());
                self.writer.write_line(text)?;
            }
            Some(message) => self.writer.write_line(message)?,
        }

        Ok(StepResult::Replied(reply.outcome))
    }

    /// Get the output stream
    pub fn sink(&self) -> &W {
        self.writer.get_ref()
    }

    /// Consume the session, returning the output stream
    pub fn into_sink(self) -> W {
        self.writer.into_inner()
    }
}
