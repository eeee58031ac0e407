//! Serial Line Module
//!
//! Bounded line framing over a byte stream.
//!
//! ## Responsibilities
//! - Poll a byte source, sleeping while no data is available
//! - Accumulate input into a `CAP`-sized line buffer, detecting overrun
//! - Frame output text with exactly one trailing newline, bounded to `CAP`
//! - Flush after every write
//!
//! ## Line Bounds
//! ```text
//! input : ┌──────────── CAP - 1 stored bytes ─────────────┐ (rest counted, dropped)
//! output: ┌────────── CAP - 2 text bytes ──────────┬ \n ┐
//! ```

mod source;
mod reader;
mod writer;

pub use source::{ByteSource, Poll, StreamSource};
pub use reader::{LineReader, ReadLine};
pub use writer::LineWriter;
