//! crypto/fake.rs
//! Deterministic provider for exercising the pipelines without curve math.
//!
//! `sign` always returns the configured `(r, s)` and records the message it
//! was handed. `verify` accepts only that exact signature over that exact
//! message, so a changed byte in the signed range is still a rejection.
//!
//! Only built for tests and with the `test-utils` feature.

use std::sync::Mutex;

use crate::crypto::provider::CurveProvider;
use crate::crypto::types::{ProviderError, Signature};
use crate::keys::{PrivateScalar, PublicPoint};
use crate::scalar::Scalar;

#[derive(Debug)]
pub struct FixedSignatureProvider {
    signature: Signature,
    keypair: (Scalar, PublicPoint),
    last_message: Mutex<Option<Vec<u8>>>,
}

impl FixedSignatureProvider {
    pub fn new(r: Scalar, s: Scalar) -> Self {
        Self {
            signature: Signature::new(r, s),
            keypair: (
                Scalar::from_u128(1),
                PublicPoint::new(Scalar::from_u128(0x1111), Scalar::from_u128(0x2222)),
            ),
            last_message: Mutex::new(None),
        }
    }

    /// Fixed `(r, s)` with only a few significant bytes each, handy for
    /// checking left-padding in the embedded slots.
    pub fn short_scalars() -> Self {
        Self::new(Scalar::from_u128(0x0102_0304), Scalar::from_u128(0x0a0b_0c0d_0e0f))
    }

    pub fn signature(&self) -> Signature {
        self.signature
    }

    /// The message passed to the most recent `sign` call.
    pub fn last_message(&self) -> Option<Vec<u8>> {
        self.last_message.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl CurveProvider for FixedSignatureProvider {
    fn generate_keypair(&self) -> Result<(PrivateScalar, PublicPoint), ProviderError> {
        let (d, public) = self.keypair;
        Ok((PrivateScalar::new(d), public))
    }

    fn sign(&self, private: &PrivateScalar, message: &[u8]) -> Result<Signature, ProviderError> {
        if private.expose().is_zero() {
            return Err(ProviderError::InvalidPrivateKey);
        }
        *self.last_message.lock().unwrap_or_else(|e| e.into_inner()) = Some(message.to_vec());
        Ok(self.signature)
    }

    fn verify(&self, _public: &PublicPoint, message: &[u8], signature: &Signature) -> bool {
        let guard = self.last_message.lock().unwrap_or_else(|e| e.into_inner());
        *signature == self.signature && guard.as_deref() == Some(message)
    }

    fn algorithm(&self) -> &str {
        "fixed-test"
    }
}
