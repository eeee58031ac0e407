//! # serialcmd
//!
//! A line-oriented command interpreter for a device's serial interface:
//! - Bounded line framing with overrun detection
//! - Case-insensitive keyword parsing with a verbatim argument
//! - Four-way outcome classification (success, command, argument, failure)
//! - Host-side operator console
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Byte Source (UART / stdin / TCP)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ bytes
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     Line Reader                              │
//! │              (CAP - 1 stored, overrun flag)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ raw line
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │               Parser → Dispatcher → Handler                  │
//! │              (mac / id / status / dec)                       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ reply + outcome
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     Line Writer                              │
//! │              (CAP - 2 text + newline, flush)                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod serial;
pub mod protocol;
pub mod platform;
pub mod handlers;
pub mod dispatcher;
pub mod session;
pub mod console;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{SerialError, Result};
pub use config::Config;
pub use dispatcher::Dispatcher;
pub use session::{Session, StepResult};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of serialcmd
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
