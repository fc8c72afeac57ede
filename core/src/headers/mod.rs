//! headers/mod.rs
//! Public module export for the signed image header.
//!
//! Industry notes:
//! - Fixed-size header (256 bytes) lets the boot verifier read it straight
//!   out of flash with no parsing state.
//! - The signature covers the length field through the end of the payload,
//!   so length, version, padding and payload are all authenticated. Magic and
//!   the signature slot itself are outside the signed range.
//! - Big-endian for every multi-byte field, scalars included.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
