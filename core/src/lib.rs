//! yasb-core
//!
//! Signed bootloader image envelope: key record codec, 256-byte header codec,
//! and the sign/verify pipelines over a pluggable curve provider.
//! No file I/O, no process exits.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod scalar;

pub mod keys;
pub mod headers;
pub mod crypto;

pub mod pipeline;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::crypto::{CurveProvider, Secp256k1Provider, Signature};
    pub use crate::headers::{parse_header, signed_range, ImageHeader, ImageSummary};
    pub use crate::keys::{
        decode_key_record, encode_key_record, format_public_key_for_embedding, KeyRecord,
        PrivateScalar, PublicPoint,
    };
    pub use crate::pipeline::{
        inspect_image, sign_image, verify_image, verify_image_with_policy, VerifiedImage,
        VerifyPolicy,
    };
    pub use crate::scalar::Scalar;
    pub use crate::types::ImageError;
}
