//! Configuration for serialcmd
//!
//! Centralized configuration with sensible defaults.

use std::time::Duration;

use crate::error::{Result, SerialError};
use crate::protocol::DEFAULT_LINE_CAPACITY;

/// Smallest usable line capacity: one byte of text, the newline, the terminator.
pub const MIN_LINE_CAPACITY: usize = 3;

/// Main configuration for an interpreter instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Line Protocol Configuration
    // -------------------------------------------------------------------------
    /// Line buffer capacity (`CAP`), including room for a terminator.
    /// Stored input lines hold at most `CAP - 1` bytes; written lines hold at
    /// most `CAP - 2` bytes of text plus the newline.
    pub line_capacity: usize,

    /// Delay between polls while the input has no data (milliseconds)
    pub read_retry_delay_ms: u64,

    /// Token written before every read, without a newline
    pub prompt: String,

    // -------------------------------------------------------------------------
    // Platform Configuration
    // -------------------------------------------------------------------------
    /// Hardware address reported by `mac` on the host platform
    pub mac_address: [u8; 6],

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// TCP address used when the interpreter is exposed as a network UART
    pub listen_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            line_capacity: DEFAULT_LINE_CAPACITY,
            read_retry_delay_ms: 50,
            prompt: "> ".to_string(),
            mac_address: [0x24, 0x0A, 0xC4, 0x00, 0x00, 0x01],
            listen_addr: "127.0.0.1:3333".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Read retry delay as a `Duration`
    pub fn read_retry_delay(&self) -> Duration {
        Duration::from_millis(self.read_retry_delay_ms)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the line buffer capacity (`CAP`)
    pub fn line_capacity(mut self, capacity: usize) -> Self {
        self.config.line_capacity = capacity;
        self
    }

    /// Set the read retry delay (in milliseconds)
    pub fn read_retry_delay_ms(mut self, ms: u64) -> Self {
        self.config.read_retry_delay_ms = ms;
        self
    }

    /// Set the prompt token
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.prompt = prompt.into();
        self
    }

    /// Set the hardware address reported by the host platform
    pub fn mac_address(mut self, mac: [u8; 6]) -> Self {
        self.config.mac_address = mac;
        self
    }

    /// Set the TCP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Validate and build the config
    pub fn build(self) -> Result<Config> {
        if self.config.line_capacity < MIN_LINE_CAPACITY {
            return Err(SerialError::Config(format!(
                "line capacity {} is below the minimum of {}",
                self.config.line_capacity, MIN_LINE_CAPACITY
            )));
        }
        Ok(self.config)
    }
}
