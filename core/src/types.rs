use thiserror::Error;

use crate::{
    crypto::ProviderError,
    headers::HeaderError,
    keys::KeyError,
    scalar::ScalarError,
};

/// Unified error covering scalar, key, header, provider and pipeline failures.
/// - `From<T>` impls enable `?` across modules.
/// - Messages are stable and carry the offending values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    /// Fixed-width field encoding error.
    #[error("scalar error: {0}")]
    Scalar(#[from] ScalarError),

    /// Key record error.
    #[error("key error: {0}")]
    Key(#[from] KeyError),

    /// Header-level error (validation or parse).
    #[error("header error: {0}")]
    Header(#[from] HeaderError),

    /// Curve provider error.
    #[error("curve provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Caller-supplied version does not fit the 32-bit field.
    #[error("invalid version: {have} exceeds {max}", max = u32::MAX)]
    InvalidVersion { have: u64 },

    /// Image is larger than the verifier allows.
    #[error("image too large: {total} bytes > {max} allowed")]
    ImageTooLarge { total: usize, max: usize },

    /// Signature does not verify over the signed range.
    #[error("signature rejected")]
    SignatureRejected,
}
