//! crypto/secp256k1.rs
//! ECDSA over secp256k1 with SHA-256 message hashing.
//!
//! Industry notes:
//! - Same curve and hash as the on-device verifier, which hashes the signed
//!   range with SHA-256 and checks `(r, s)` against a provisioned `Qx ‖ Qy`.
//! - Signing uses RFC 6979 nonces and emits low-S signatures.

use k256::ecdsa::signature::{Signer, Verifier};
use k256::ecdsa::{Signature as EcdsaSignature, SigningKey, VerifyingKey};
use k256::{EncodedPoint, FieldBytes};
use log::debug;
use rand::rngs::OsRng;
use zeroize::Zeroizing;

use crate::constants::SCALAR_LEN;
use crate::crypto::provider::CurveProvider;
use crate::crypto::types::{ProviderError, Signature};
use crate::keys::{PrivateScalar, PublicPoint};
use crate::scalar::Scalar;

#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1Provider;

impl Secp256k1Provider {
    pub fn new() -> Self {
        Self
    }

    fn signing_key(private: &PrivateScalar) -> Result<SigningKey, ProviderError> {
        SigningKey::from_slice(private.expose().as_bytes()).map_err(|_| ProviderError::InvalidPrivateKey)
    }

    fn verifying_key(public: &PublicPoint) -> Result<VerifyingKey, ProviderError> {
        let x = FieldBytes::from(*public.x.as_bytes());
        let y = FieldBytes::from(*public.y.as_bytes());
        let point = EncodedPoint::from_affine_coordinates(&x, &y, false);
        VerifyingKey::from_encoded_point(&point).map_err(|_| ProviderError::InvalidPublicKey)
    }

    /// Public point for an existing private scalar.
    pub fn derive_public(&self, private: &PrivateScalar) -> Result<PublicPoint, ProviderError> {
        let sk = Self::signing_key(private)?;
        public_point_of(sk.verifying_key())
    }
}

fn public_point_of(vk: &VerifyingKey) -> Result<PublicPoint, ProviderError> {
    let point = vk.to_encoded_point(false);
    let (x, y) = match (point.x(), point.y()) {
        (Some(x), Some(y)) => (x, y),
        _ => return Err(ProviderError::InvalidPublicKey),
    };
    let x = Scalar::from_be_slice(x).map_err(|_| ProviderError::InvalidPublicKey)?;
    let y = Scalar::from_be_slice(y).map_err(|_| ProviderError::InvalidPublicKey)?;
    Ok(PublicPoint::new(x, y))
}

impl CurveProvider for Secp256k1Provider {
    fn generate_keypair(&self) -> Result<(PrivateScalar, PublicPoint), ProviderError> {
        let sk = SigningKey::random(&mut OsRng);
        let secret: Zeroizing<[u8; SCALAR_LEN]> = Zeroizing::new(sk.to_bytes().into());
        let d = Scalar::from_be_slice(secret.as_slice()).map_err(|_| ProviderError::InvalidPrivateKey)?;
        let public = public_point_of(sk.verifying_key())?;
        debug!("secp256k1: generated keypair");
        Ok((PrivateScalar::new(d), public))
    }

    fn sign(&self, private: &PrivateScalar, message: &[u8]) -> Result<Signature, ProviderError> {
        let sk = Self::signing_key(private)?;
        let sig: EcdsaSignature = sk
            .try_sign(message)
            .map_err(|e| ProviderError::Signing(e.to_string()))?;

        let (r, s) = sig.split_bytes();
        let r = Scalar::from_be_slice(&r).map_err(|e| ProviderError::Signing(e.to_string()))?;
        let s = Scalar::from_be_slice(&s).map_err(|e| ProviderError::Signing(e.to_string()))?;
        Ok(Signature::new(r, s))
    }

    fn verify(&self, public: &PublicPoint, message: &[u8], signature: &Signature) -> bool {
        let vk = match Self::verifying_key(public) {
            Ok(vk) => vk,
            Err(e) => {
                debug!("secp256k1: {}", e);
                return false;
            }
        };

        let r = FieldBytes::from(*signature.r.as_bytes());
        let s = FieldBytes::from(*signature.s.as_bytes());
        let sig = match EcdsaSignature::from_scalars(r, s) {
            Ok(sig) => sig,
            Err(_) => {
                debug!("secp256k1: signature scalars out of range");
                return false;
            }
        };

        vk.verify(message, &sig).is_ok()
    }

    fn algorithm(&self) -> &str {
        "ecdsa-secp256k1-sha256"
    }
}
