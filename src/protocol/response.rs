//! Response definitions
//!
//! Outcome classification and the fixed operator-facing strings.

// =============================================================================
// Fixed Strings (operator tooling matches these verbatim)
// =============================================================================

/// Banner written once before the first prompt
pub const MESSAGE_SYNC: &str = "SYNC // FIRMWARE READY";

/// Written when an input line exceeds the buffer
pub const ERROR_OVERRUN: &str = "ERROR // INPUT OVERRUN";

/// Written for an unclassified outcome
pub const ERROR_UNKNOWN: &str = "ERROR // PROCESSING FAILURE";

/// Written for an unrecognized keyword
pub const ERROR_COMMAND: &str = "Command error";

/// Written for a rejected argument
pub const ERROR_ARGUMENT: &str = "Argument error";

/// Reply text produced by the dispatcher for an unrecognized keyword
pub const COMMAND_ERROR_TEXT: &str = "COMMAND ERROR";

/// Reply text produced by handlers that reject their argument
pub const ARGUMENT_ERROR_TEXT: &str = "ARGUMENT ERROR";

// =============================================================================
// Outcome
// =============================================================================

/// Classification of a dispatched command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    CommandError,
    ArgumentError,
    ProcessingFailure,
}

impl Outcome {
    /// Legacy integer code
    pub fn code(&self) -> i32 {
        match self {
            Outcome::Success => 0,
            Outcome::CommandError => 1,
            Outcome::ArgumentError => 2,
            Outcome::ProcessingFailure => -1,
        }
    }

    /// Classify a legacy integer code; anything unrecognized is a failure
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Outcome::Success,
            1 => Outcome::CommandError,
            2 => Outcome::ArgumentError,
            _ => Outcome::ProcessingFailure,
        }
    }

    /// Fixed line written to the operator instead of the reply text
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Outcome::Success => None,
            Outcome::CommandError => Some(ERROR_COMMAND),
            Outcome::ArgumentError => Some(ERROR_ARGUMENT),
            Outcome::ProcessingFailure => Some(ERROR_UNKNOWN),
        }
    }
}

// =============================================================================
// Reply
// =============================================================================

/// Text produced for one command, with its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub outcome: Outcome,
}

impl Reply {
    /// Create a successful reply
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            outcome: Outcome::Success,
        }
    }

    /// Create an unrecognized-keyword reply
    pub fn command_error() -> Self {
        Self {
            text: COMMAND_ERROR_TEXT.to_string(),
            outcome: Outcome::CommandError,
        }
    }

    /// Create a rejected-argument reply
    pub fn argument_error() -> Self {
        Self {
            text: ARGUMENT_ERROR_TEXT.to_string(),
            outcome: Outcome::ArgumentError,
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }
}
