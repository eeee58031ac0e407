//! Protocol Module
//!
//! Defines the text command protocol spoken over the serial line.
//!
//! ## Line Grammar
//! ```text
//! [blanks] keyword [blanks argument...] \n
//! ```
//! `blanks` are runs of space or tab. The keyword is matched
//! case-insensitively; the argument is kept verbatim.
//!
//! ### Commands
//! - `mac`          - hardware address
//! - `id`           - identity list
//! - `status`       - uptime, cores, free heap
//! - `dec <number>` - `0x`/`0b`/leading-zero octal/decimal to decimal
//!
//! ### Outcomes (legacy codes)
//! - 0: SUCCESS
//! - 1: COMMAND ERROR
//! - 2: ARGUMENT ERROR
//! - other: PROCESSING FAILURE

mod command;
mod parser;
mod response;

pub use command::{Command, Keyword};
pub use parser::{parse, parse_bounded};
pub use response::{
    Outcome, Reply, ARGUMENT_ERROR_TEXT, COMMAND_ERROR_TEXT, ERROR_ARGUMENT, ERROR_COMMAND,
    ERROR_OVERRUN, ERROR_UNKNOWN, MESSAGE_SYNC,
};

/// Default line buffer capacity (`CAP`)
pub const DEFAULT_LINE_CAPACITY: usize = 128;

/// Cut `text` to at most `max` bytes without splitting a character
pub(crate) fn clip(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
