//! Platform and identity handlers

use crate::platform::{format_mac, Platform};
use crate::protocol::Reply;

/// Identity tokens reported by `id`
pub const IDENTITY: &str = "imv2@hi.is,hfa8@hi.is";

/// `mac`: hardware address as `MAC XX:XX:XX:XX:XX:XX`
pub fn mac<P: Platform + ?Sized>(platform: &P) -> Reply {
    Reply::ok(format!("MAC {}", format_mac(&platform.mac_address())))
}

/// `id`: fixed identity list
pub fn id() -> Reply {
    Reply::ok(IDENTITY)
}

/// `status`: uptime in whole seconds, core count, free heap
pub fn status<P: Platform + ?Sized>(platform: &P) -> Reply {
    Reply::ok(format!(
        "SYSTEM UPTIME: {} S\nAVAILABLE CORES: {}\nAVAILABLE HEAP MEMORY: {}\n",
        platform.uptime().as_secs(),
        platform.core_count(),
        platform.free_heap()
    ))
}
