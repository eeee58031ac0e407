//! Command definitions
//!
//! Represents a parsed operator line.

/// Recognized command keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Keyword {
    #[default]
    Unknown,
    Mac,
    Id,
    Status,
    Dec,
}

impl Keyword {
    /// Map a lower-cased token to a keyword (exact match)
    pub fn from_token(token: &str) -> Self {
        match token {
            "mac" => Keyword::Mac,
            "id" => Keyword::Id,
            "status" => Keyword::Status,
            "dec" => Keyword::Dec,
            _ => Keyword::Unknown,
        }
    }

    /// Canonical spelling, or `None` for `Unknown`
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            Keyword::Mac => Some("mac"),
            Keyword::Id => Some("id"),
            Keyword::Status => Some("status"),
            Keyword::Dec => Some("dec"),
            Keyword::Unknown => None,
        }
    }
}

/// A parsed command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Command {
    /// Keyword derived from `name`
    pub keyword: Keyword,

    /// First token of the line, lower-cased
    pub name: String,

    /// Everything after the blanks following `name`, verbatim
    pub argument: String,
}
