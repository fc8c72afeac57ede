// ## 📂 File: `src/crypto/types.rs`

use thiserror::Error;

use crate::constants::{SCALAR_LEN, SIGNATURE_LEN};
use crate::scalar::Scalar;

/// ECDSA signature `(r, s)`.
///
/// Wire form is `r ‖ s`, each component a 32-byte big-endian field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Signature {
    pub r: Scalar,
    pub s: Scalar,
}

impl Signature {
    pub fn new(r: Scalar, s: Scalar) -> Self {
        Self { r, s }
    }

    /// Split the 64-byte `r ‖ s` slot.
    pub fn from_bytes(bytes: &[u8; SIGNATURE_LEN]) -> Self {
        let mut r = [0u8; SCALAR_LEN];
        let mut s = [0u8; SCALAR_LEN];
        r.copy_from_slice(&bytes[..SCALAR_LEN]);
        s.copy_from_slice(&bytes[SCALAR_LEN..]);
        Self { r: Scalar::from_be_array(r), s: Scalar::from_be_array(s) }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.r.is_zero() && self.s.is_zero()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Private scalar is zero or not below the curve order.
    #[error("private scalar rejected by curve provider")]
    InvalidPrivateKey,

    /// Public point is not on the curve.
    #[error("public point rejected by curve provider")]
    InvalidPublicKey,

    /// Signing primitive failed.
    #[error("signing failed: {0}")]
    Signing(String),
}
