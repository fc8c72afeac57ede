//! crypto/provider.rs
//! Curve primitive capability consumed by the pipelines.
//!
//! Contract:
//! - `generate_keypair` returns `(d, d · G)`.
//! - `sign` returns `(r, s)`, each fitting in 32 bytes. It may use a random
//!   nonce, so two calls over the same message can differ.
//! - `verify` answers yes/no; malformed keys or signatures are a "no".
//!
//! Message hashing is the provider's business. The pipelines hand over the
//! raw signed range.

use crate::crypto::types::{ProviderError, Signature};
use crate::keys::{PrivateScalar, PublicPoint};

pub trait CurveProvider {
    fn generate_keypair(&self) -> Result<(PrivateScalar, PublicPoint), ProviderError>;

    fn sign(&self, private: &PrivateScalar, message: &[u8]) -> Result<Signature, ProviderError>;

    fn verify(&self, public: &PublicPoint, message: &[u8], signature: &Signature) -> bool;

    /// Short name for logs.
    fn algorithm(&self) -> &str;
}
