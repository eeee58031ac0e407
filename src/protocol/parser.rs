//! Command parser
//!
//! Splits a raw line into keyword and argument. Never fails.

use super::{clip, Command, Keyword, DEFAULT_LINE_CAPACITY};

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Parse a line using the default capacity
pub fn parse(raw: &str) -> Command {
    parse_bounded(raw, DEFAULT_LINE_CAPACITY)
}

/// Parse a line, bounding each field to `capacity - 1` bytes
///
/// A keyword token longer than the bound is cut; its remainder is not a
/// separator, so it becomes the start of the argument.
pub fn parse_bounded(raw: &str, capacity: usize) -> Command {
    let limit = capacity.saturating_sub(1);

    let rest = raw.trim_start_matches(is_blank);
    let token_end = rest.find(is_blank).unwrap_or(rest.len());
    let name = clip(&rest[..token_end], limit);
    let rest = &rest[name.len()..];

    let argument = clip(rest.trim_start_matches(is_blank), limit);
    let name = name.to_ascii_lowercase();

    Command {
        keyword: Keyword::from_token(&name),
        name,
        argument: argument.to_string(),
    }
}
