//! Host Console
//!
//! Operator-side client for a device speaking the line protocol.
//!
//! ## Flow
//! 1. (optional) discard stale input until the line goes quiet
//! 2. `sync`: wait for the banner, printing `.` for every other line
//! 3. loop: show device output up to the prompt, read an operator line,
//!    send it; `exit` quits

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use crate::config::Config;
use crate::error::{Result, SerialError};
use crate::protocol::MESSAGE_SYNC;
use crate::serial::{ByteSource, Poll};

/// Operator line that ends the interactive loop
pub const EXIT_COMMAND: &str = "exit";

/// Quiet period required before stale input counts as drained
pub const STALE_SETTLE: Duration = Duration::from_millis(200);

/// Client side of the serial line
pub struct Console<S, L, W> {
    /// Bytes from the device
    source: S,

    /// Bytes to the device
    link: L,

    /// Where device output is shown to the operator
    output: W,

    /// Prompt token the device writes before each read
    prompt: String,

    /// Sleep between polls, and the quiet window after a prompt
    poll_delay: Duration,

    /// Byte read while checking for a quiet line, replayed next
    lookahead: Option<u8>,
}

impl<S: ByteSource, L: Write, W: Write> Console<S, L, W> {
    pub fn new(source: S, link: L, output: W, config: &Config) -> Self {
        Self {
            source,
            link,
            output,
            prompt: config.prompt.clone(),
            poll_delay: config.read_retry_delay(),
            lookahead: None,
        }
    }

    /// Next byte if one is available now
    fn take_byte(&mut self) -> Result<Option<u8>> {
        if let Some(byte) = self.lookahead.take() {
            return Ok(Some(byte));
        }
        match self.source.poll_byte()? {
            Poll::Byte(byte) => Ok(Some(byte)),
            Poll::Pending => Ok(None),
            Poll::Closed => Err(SerialError::Disconnected),
        }
    }

    /// Drop input until nothing arrives for a full `settle` window
    /// (normally [`STALE_SETTLE`])
    ///
    /// Returns the number of bytes discarded.
    pub fn discard_pending(&mut self, settle: Duration) -> Result<usize> {
        let mut discarded = 0usize;
        loop {
            while self.take_byte()?.is_some() {
                discarded += 1;
            }
            thread::sleep(settle);
            match self.take_byte()? {
                Some(_) => discarded += 1,
                None => break,
            }
        }
        tracing::debug!("Discarded {} stale bytes", discarded);
        Ok(discarded)
    }

    /// Wait for the device banner
    pub fn sync(&mut self) -> Result<()> {
        writeln!(self.output, "Reboot device to synchronize.")?;
        self.output.flush()?;

        let mut partial = Vec::new();
        loop {
            let byte = match self.take_byte() {
                Ok(Some(byte)) => byte,
                Ok(None) => {
                    thread::sleep(self.poll_delay);
                    continue;
                }
                Err(SerialError::Disconnected) => {
                    return Err(SerialError::Sync(
                        "line closed before the device banner arrived".to_string(),
                    ));
                }
                Err(e) => return Err(e),
            };
            if byte != b'\n' {
                partial.push(byte);
                continue;
            }

            let line = String::from_utf8_lossy(&partial).into_owned();
            partial.clear();
            if line.starts_with(MESSAGE_SYNC) {
                writeln!(self.output, "\n{}", MESSAGE_SYNC)?;
                self.output.flush()?;
                tracing::debug!("Device synchronized");
                return Ok(());
            }
            write!(self.output, ".")?;
            self.output.flush()?;
        }
    }

    /// Show device lines until the prompt arrives and the line goes quiet
    ///
    /// Returns the complete lines seen, newline removed. The prompt itself is
    /// echoed to the output but not returned.
    pub fn read_until_prompt(&mut self) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        let mut partial = Vec::new();

        loop {
            let Some(byte) = self.take_byte()? else {
                thread::sleep(self.poll_delay);
                continue;
            };
            partial.push(byte);

            if byte == b'\n' {
                partial.pop();
                let line = String::from_utf8_lossy(&partial).into_owned();
                writeln!(self.output, "{}", line)?;
                lines.push(line);
                partial.clear();
            } else if partial == self.prompt.as_bytes() {
                thread::sleep(self.poll_delay);
                match self.take_byte()? {
                    None => {
                        write!(self.output, "{}", self.prompt)?;
                        self.output.flush()?;
                        return Ok(lines);
                    }
                    Some(next) => self.lookahead = Some(next),
                }
            }
        }
    }

    /// Send one operator line, newline-terminated
    pub fn send(&mut self, line: &str) -> Result<()> {
        self.link.write_all(line.as_bytes())?;
        self.link.write_all(b"\n")?;
        self.link.flush()?;
        Ok(())
    }

    /// Interactive loop reading operator lines from `input`
    ///
    /// Ends on `exit` or end of input.
    pub fn run_interactive<I: BufRead>(&mut self, input: I) -> Result<()> {
        let mut input_lines = input.lines();
        loop {
            self.read_until_prompt()?;

            let Some(line) = input_lines.next() else {
                return Ok(());
            };
            let line = line?;
            if line == EXIT_COMMAND {
                return Ok(());
            }
            self.send(&line)?;
        }
    }

    /// Get the outbound link
    pub fn link(&self) -> &L {
        &self.link
    }

    /// Get the operator output
    pub fn output(&self) -> &W {
        &self.output
    }
}
