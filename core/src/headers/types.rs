// ## 📂 File: `src/headers/types.rs`

//! headers/types.rs
//! Image header struct, summary view and header errors.
//!
//! Notes:
//! - The header is 256 bytes, fixed length. Padding is always zero.
//! - `length` counts version + padding + payload, not the bytes before it.

use serde::Serialize;
use thiserror::Error;

use crate::constants::{LENGTH_FIELD_BASE, MAGIC_YASB, MIN_LENGTH_VALUE};
use crate::crypto::types::Signature;
use crate::scalar::ScalarError;

/// Decoded view of the 256-byte image header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHeader {
    pub magic: [u8; 4],        // "YASB"
    pub signature: Signature,  // r ‖ s over the signed range
    pub length: u32,           // version + padding + payload
    pub version: u32,          // operator-supplied image version
}

impl ImageHeader {
    /// Header with a zeroed signature slot, ready to be signed.
    pub fn unsigned(version: u32, length: u32) -> Self {
        Self {
            magic: MAGIC_YASB,
            signature: Signature::default(),
            length,
            version,
        }
    }

    /// Payload bytes implied by the length field.
    pub fn payload_len(&self) -> usize {
        (self.length as usize).saturating_sub(MIN_LENGTH_VALUE)
    }

    /// Total image size implied by the length field.
    pub fn total_len(&self) -> usize {
        LENGTH_FIELD_BASE + self.length as usize
    }

    pub fn summary(&self, signed_range_sha256: &[u8; 32]) -> ImageSummary {
        ImageSummary {
            magic: fmt_bytes(&self.magic),
            version: self.version,
            length: self.length,
            payload_len: self.payload_len(),
            total_len: self.total_len(),
            signature_r: hex::encode(self.signature.r.as_bytes()),
            signature_s: hex::encode(self.signature.s.as_bytes()),
            signed_range_sha256: hex::encode(signed_range_sha256),
        }
    }
}

/// Operator-facing description of a signed image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageSummary {
    pub magic: String,
    pub version: u32,
    pub length: u32,
    pub payload_len: usize,
    pub total_len: usize,
    pub signature_r: String,
    pub signature_s: String,
    pub signed_range_sha256: String,
}

pub fn fmt_bytes(b: &[u8]) -> String {
    if b.iter().all(|&c| c.is_ascii_graphic() || c == b' ') {
        format!("b\"{}\"", String::from_utf8_lossy(b))
    } else {
        format!("0x{}", hex::encode(b))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    /// Buffer too short for the requested region.
    #[error("image buffer too short: {have} < {need}")]
    Truncated { have: usize, need: usize },

    /// Magic marker mismatch (expected "YASB").
    #[error("invalid magic: expected {}, got {}", fmt_bytes(.need), fmt_bytes(.have))]
    BadMagic { have: [u8; 4], need: [u8; 4] },

    /// Length field disagrees with the buffer size.
    #[error("length field {length} implies {expected} image bytes, buffer has {actual}")]
    LengthMismatch { length: u32, expected: usize, actual: usize },

    /// Computed length does not fit the 32-bit field.
    #[error("length field overflow: {payload_len} payload bytes + {overhead} header bytes exceed u32")]
    Overflow { payload_len: usize, overhead: usize },

    /// Padding must be zero.
    #[error("padding byte at offset {offset} is 0x{value:02x}, must be zero")]
    PaddingNonZero { offset: usize, value: u8 },

    /// Signature component does not fit its slot.
    #[error("signature component `{component}` does not fit: {source}")]
    Scalar {
        component: &'static str,
        #[source]
        source: ScalarError,
    },
}
