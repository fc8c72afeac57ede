//! keys/mod.rs
//! Key material and its on-disk record.
//!
//! Notes:
//! - Key file is 96 bytes, position-defined: `d ‖ Qx ‖ Qy`, big-endian.
//! - No length prefix, no version byte; the boot verifier only ever sees
//!   the public half, pasted into firmware source via `format`.

pub mod types;
pub mod encode;
pub mod decode;
pub mod format;

pub use types::*;
pub use encode::*;
pub use decode::*;
pub use format::*;
