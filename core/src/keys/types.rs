//! keys/types.rs
//! Private scalar, public point and the key record pairing them.
//!
//! Notes:
//! - `(Qx, Qy) = d · G` is established by the curve provider at generation
//!   time; the codec never re-derives or checks it.
//! - The private scalar is wiped on drop and never printed.

use std::fmt;

use thiserror::Error;
use zeroize::Zeroize;

use crate::constants::{PUBLIC_KEY_LEN, SCALAR_LEN};
use crate::scalar::{Scalar, ScalarError};

/// Private signing scalar `d`.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateScalar(Scalar);

impl PrivateScalar {
    #[inline]
    pub fn new(d: Scalar) -> Self {
        Self(d)
    }

    #[inline]
    pub fn expose(&self) -> &Scalar {
        &self.0
    }
}

impl Drop for PrivateScalar {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl fmt::Debug for PrivateScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateScalar(<redacted>)")
    }
}

/// Public verification point `(Qx, Qy)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicPoint {
    pub x: Scalar,
    pub y: Scalar,
}

impl PublicPoint {
    pub fn new(x: Scalar, y: Scalar) -> Self {
        Self { x, y }
    }

    /// `Qx ‖ Qy`, each 32 bytes big-endian. This is the layout the boot
    /// verifier stores as its provisioned key.
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LEN] {
        let mut out = [0u8; PUBLIC_KEY_LEN];
        out[..SCALAR_LEN].copy_from_slice(self.x.as_bytes());
        out[SCALAR_LEN..].copy_from_slice(self.y.as_bytes());
        out
    }
}

/// Keypair as stored in the key file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRecord {
    pub private: PrivateScalar,
    pub public: PublicPoint,
}

impl KeyRecord {
    pub fn new(private: PrivateScalar, public: PublicPoint) -> Self {
        Self { private, public }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// Key file shorter than one record.
    #[error("key record truncated: {have} < {need} bytes")]
    Truncated { have: usize, need: usize },

    /// A component does not fit its 32-byte field.
    #[error("key field `{field}` does not fit: {source}")]
    Scalar {
        field: &'static str,
        #[source]
        source: ScalarError,
    },
}
