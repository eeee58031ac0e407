//! Dispatcher Module
//!
//! Routes parsed commands to handlers and normalizes their replies.
//!
//! ## Responsibilities
//! - Parse a raw line into a [`Command`]
//! - Invoke the handler for its keyword
//! - Force `CommandError` for unrecognized keywords
//! - Bound the reply to the line buffer and newline-terminate it

use crate::config::Config;
use crate::handlers;
use crate::platform::Platform;
use crate::protocol::{clip, parse_bounded, Command, Keyword, Outcome, Reply};

/// Stateless command dispatcher
///
/// Nothing is retained between lines; the platform is only queried.
pub struct Dispatcher<P> {
    /// Source of hardware facts for `mac` and `status`
    platform: P,

    /// Line buffer capacity (`CAP`)
    capacity: usize,
}

impl<P: Platform> Dispatcher<P> {
    /// Create a dispatcher using the configured capacity
    pub fn new(platform: P, config: &Config) -> Self {
        Self::with_capacity(platform, config.line_capacity)
    }

    /// Create a dispatcher with an explicit capacity (`CAP`, at least 2)
    pub fn with_capacity(platform: P, capacity: usize) -> Self {
        Self {
            platform,
            capacity: capacity.max(2),
        }
    }

    /// Process one raw line
    ///
    /// Steps:
    /// 1. Parse into keyword + argument
    /// 2. Execute the handler
    /// 3. Normalize the reply text
    pub fn process(&self, raw_line: &str) -> Reply {
        let command = parse_bounded(raw_line, self.capacity);
        let reply = self.execute(&command);
        let text = self.normalize(reply.text);

        tracing::trace!(
            "Dispatched {:?} (argument {:?}): outcome {:?} (code {})",
            command.name,
            command.argument,
            reply.outcome,
            reply.outcome.code()
        );

        Reply {
            text,
            outcome: reply.outcome,
        }
    }

    /// Execute a parsed command without normalizing its text
    pub fn execute(&self, command: &Command) -> Reply {
        let reply = match command.keyword {
            Keyword::Mac => handlers::mac(&self.platform),
            Keyword::Id => handlers::id(),
            Keyword::Status => handlers::status(&self.platform),
            Keyword::Dec => handlers::dec(&command.argument),
            Keyword::Unknown => Reply::command_error(),
        };

        // Unknown keywords are a command error whatever text was produced
        let outcome = match command.keyword {
            Keyword::Unknown => Outcome::CommandError,
            _ => reply.outcome,
        };

        Reply {
            text: reply.text,
            outcome,
        }
    }

    /// Bound to `CAP - 1` bytes and append a newline if there is room
    fn normalize(&self, text: String) -> String {
        let limit = self.capacity - 1;
        let mut text = clip(&text, limit).to_string();
        if !text.is_empty() && !text.ends_with('\n') && text.len() < limit {
            text.push('\n');
        }
        text
    }

    /// Line buffer capacity (`CAP`)
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the platform
    pub fn platform(&self) -> &P {
        &self.platform
    }
}
