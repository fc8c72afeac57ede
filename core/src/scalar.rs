//! scalar.rs
//! Fixed-width big-endian 256-bit scalars.
//!
//! Design notes:
//! - A natural big-endian encoding drops leading zero bytes. Protocol fields
//!   are fixed width, so values are right-aligned in a zeroed slot.
//! - `write_fixed_be` is the only place that places scalar bytes into a slot;
//!   keys, coordinates and signature components all go through it.
//! - Oversized values fail; they are never truncated or wrapped.

use std::fmt;

use thiserror::Error;
use zeroize::Zeroize;

use crate::constants::SCALAR_LEN;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScalarError {
    /// Value needs more significant bytes than the field holds.
    #[error("value needs {significant} significant bytes, field holds {width}")]
    Encoding { significant: usize, width: usize },
}

/// Strip leading zero bytes (natural big-endian form). Zero becomes empty.
#[inline]
pub fn trim_leading_zeros(bytes: &[u8]) -> &[u8] {
    let first = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[first..]
}

/// Write `natural` into `slot` as a fixed-width big-endian integer.
///
/// Every byte of `slot` is written: leading bytes are forced to zero and the
/// significant bytes of `natural` are right-aligned.
pub fn write_fixed_be(slot: &mut [u8], natural: &[u8]) -> Result<(), ScalarError> {
    let significant = trim_leading_zeros(natural);
    if significant.len() > slot.len() {
        return Err(ScalarError::Encoding {
            significant: significant.len(),
            width: slot.len(),
        });
    }

    let pad = slot.len() - significant.len();
    slot[..pad].fill(0);
    slot[pad..].copy_from_slice(significant);
    Ok(())
}

/// Unsigned 256-bit integer held as 32 big-endian bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Scalar([u8; SCALAR_LEN]);

impl Scalar {
    pub const ZERO: Scalar = Scalar([0u8; SCALAR_LEN]);

    /// Build from any big-endian encoding with at most 32 significant bytes.
    pub fn from_be_slice(bytes: &[u8]) -> Result<Self, ScalarError> {
        let mut out = [0u8; SCALAR_LEN];
        write_fixed_be(&mut out, bytes)?;
        Ok(Self(out))
    }

    #[inline]
    pub const fn from_be_array(bytes: [u8; SCALAR_LEN]) -> Self {
        Self(bytes)
    }

    pub fn from_u128(v: u128) -> Self {
        let mut out = [0u8; SCALAR_LEN];
        out[SCALAR_LEN - 16..].copy_from_slice(&v.to_be_bytes());
        Self(out)
    }

    #[inline]
    pub fn to_be_bytes(&self) -> [u8; SCALAR_LEN] {
        self.0
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; SCALAR_LEN] {
        &self.0
    }

    /// Natural big-endian encoding (no leading zeros; empty for zero).
    #[inline]
    pub fn significant_bytes(&self) -> &[u8] {
        trim_leading_zeros(&self.0)
    }

    pub fn bit_len(&self) -> usize {
        match self.significant_bytes() {
            [] => 0,
            [first, rest @ ..] => rest.len() * 8 + (8 - first.leading_zeros() as usize),
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// Write into a fixed-width protocol slot.
    #[inline]
    pub fn write_to(&self, slot: &mut [u8]) -> Result<(), ScalarError> {
        write_fixed_be(slot, &self.0)
    }
}

impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar(0x{})", hex::encode(self.0))
    }
}
