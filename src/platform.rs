//! Platform queries
//!
//! The hardware facts reported by `mac` and `status`. Handlers see only the
//! [`Platform`] trait; [`HostPlatform`] answers from the running host and
//! [`FixedPlatform`] answers with constants.

use std::fs;
use std::thread;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::error::{Result, SerialError};

/// Hardware and runtime facts about the device
pub trait Platform {
    /// 6-byte hardware (station) address
    fn mac_address(&self) -> [u8; 6];

    /// Time elapsed since boot
    fn uptime(&self) -> Duration;

    /// Number of processing cores
    fn core_count(&self) -> u32;

    /// Free memory in bytes
    fn free_heap(&self) -> usize;
}

impl<P: Platform + ?Sized> Platform for &P {
    fn mac_address(&self) -> [u8; 6] {
        (**self).mac_address()
    }

    fn uptime(&self) -> Duration {
        (**self).uptime()
    }

    fn core_count(&self) -> u32 {
        (**self).core_count()
    }

    fn free_heap(&self) -> usize {
        (**self).free_heap()
    }
}

// =============================================================================
// Host Platform
// =============================================================================

/// Platform backed by the host running the interpreter
///
/// "Boot" is the moment the value was created.
#[derive(Debug, Clone)]
pub struct HostPlatform {
    mac: [u8; 6],
    booted_at: Instant,
}

impl HostPlatform {
    const MEMINFO_PATH: &'static str = "/proc/meminfo";

    pub fn new(mac: [u8; 6]) -> Self {
        Self {
            mac,
            booted_at: Instant::now(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.mac_address)
    }
}

impl Platform for HostPlatform {
    fn mac_address(&self) -> [u8; 6] {
        self.mac
    }

    fn uptime(&self) -> Duration {
        self.booted_at.elapsed()
    }

    fn core_count(&self) -> u32 {
        thread::available_parallelism()
            .map(|n| u32::try_from(n.get()).unwrap_or(u32::MAX))
            .unwrap_or(1)
    }

    fn free_heap(&self) -> usize {
        fs::read_to_string(Self::MEMINFO_PATH)
            .ok()
            .and_then(|meminfo| parse_mem_available(&meminfo))
            .unwrap_or(0)
    }
}

/// Extract `MemAvailable` (in bytes) from `/proc/meminfo` contents
fn parse_mem_available(meminfo: &str) -> Option<usize> {
    let line = meminfo
        .lines()
        .find(|line| line.starts_with("MemAvailable:"))?;
    let kib: usize = line.split_whitespace().nth(1)?.parse().ok()?;
    kib.checked_mul(1024)
}

// =============================================================================
// Fixed Platform
// =============================================================================

/// Platform that reports constant values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPlatform {
    pub mac: [u8; 6],
    pub uptime: Duration,
    pub cores: u32,
    pub free_heap: usize,
}

impl Platform for FixedPlatform {
    fn mac_address(&self) -> [u8; 6] {
        self.mac
    }

    fn uptime(&self) -> Duration {
        self.uptime
    }

    fn core_count(&self) -> u32 {
        self.cores
    }

    fn free_heap(&self) -> usize {
        self.free_heap
    }
}

// =============================================================================
// MAC Address Helpers
// =============================================================================

/// Format as `XX:XX:XX:XX:XX:XX` (uppercase hex)
pub fn format_mac(mac: &[u8; 6]) -> String {
    format!(
        "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
        mac[0], mac[1], mac[2], mac[3], mac[4], mac[5]
    )
}

/// Parse a colon-separated 6-octet hex address (either case)
pub fn parse_mac(text: &str) -> Result<[u8; 6]> {
    let invalid = || SerialError::Config(format!("invalid MAC address: {:?}", text));

    let mut mac = [0u8; 6];
    let mut octets = text.trim().split(':');
    for slot in mac.iter_mut() {
        let octet = octets.next().ok_or_else(invalid)?;
        if octet.len() != 2 {
            return Err(invalid());
        }
        *slot = u8::from_str_radix(octet, 16).map_err(|_| invalid())?;
    }
    if octets.next().is_some() {
        return Err(invalid());
    }

    Ok(mac)
}
