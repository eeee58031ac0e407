//! Handler Set
//!
//! One function per keyword. Each returns the reply text (without the
//! trailing newline the dispatcher adds) and its outcome.
//!
//! | Keyword  | Handler          | Argument  |
//! |----------|------------------|-----------|
//! | `mac`    | [`mac`]          | ignored   |
//! | `id`     | [`id`]           | ignored   |
//! | `status` | [`status`]       | ignored   |
//! | `dec`    | [`dec`]          | required  |

mod dec;
mod system;

pub use dec::{convert, dec, DEC_MAX};
pub use system::{id, mac, status, IDENTITY};
