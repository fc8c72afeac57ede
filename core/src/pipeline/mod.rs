//! Sign / verify / inspect pipelines.
//!
//! Responsibilities:
//! - Compose the key, header and provider layers into whole-image operations
//!
//! Non-responsibilities:
//! - File I/O
//! - Curve arithmetic

pub mod sign;
pub mod verify;
pub mod inspect;

pub use sign::*;
pub use verify::*;
pub use inspect::*;
