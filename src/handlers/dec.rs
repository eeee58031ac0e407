//! `dec` handler
//!
//! Converts a binary, hex, octal, or decimal literal to decimal.
//!
//! ```text
//! 0b101 / 0B101  -> base 2   (prefix stripped)
//! 0x1F  / 0X1F   -> base 16  (prefix stripped)
//! 010            -> base 8   (leading zero kept)
//! 42             -> base 10
//! ```

use crate::protocol::Reply;

/// Largest value `dec` accepts
pub const DEC_MAX: u32 = u16::MAX as u32;

/// `dec <number>`
pub fn dec(argument: &str) -> Reply {
    match convert(argument) {
        Some(value) => Reply::ok(value.to_string()),
        None => Reply::argument_error(),
    }
}

/// Parse a `dec` argument into a 16-bit value
///
/// Returns `None` for an empty argument, trailing garbage, a negative sign,
/// or a value above [`DEC_MAX`].
pub fn convert(argument: &str) -> Option<u16> {
    let (digits, radix) = match argument.as_bytes() {
        [] => return None,
        [b'0', b'b' | b'B', ..] => (&argument[2..], 2),
        [b'0', b'x' | b'X', ..] => (&argument[2..], 16),
        [b'0', next, ..] if next.is_ascii_digit() => (argument, 8),
        _ => (argument, 10),
    };

    let value = parse_unsigned(digits, radix)?;
    (value <= DEC_MAX).then_some(value as u16)
}

/// `strtoul`-style parse that must consume the whole input
///
/// Leading whitespace and one `+` are allowed. An empty input converts
/// nothing and leaves nothing behind, so it reads as zero.
fn parse_unsigned(text: &str, radix: u32) -> Option<u32> {
    if text.is_empty() {
        return Some(0);
    }

    let body = text.trim_start_matches(|c: char| {
        matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
    });
    let body = body.strip_prefix('+').unwrap_or(body);

    if body.is_empty() || !body.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    // Overflow is out of range either way
    u32::from_str_radix(body, radix).ok()
}
