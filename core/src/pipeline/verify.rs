//! pipeline/verify.rs
//! Host-side counterpart of the boot-time check.
//!
//! Order mirrors the device: magic and length first, optional size limit,
//! then the signature over the recomputed signed range. Any failure rejects.

use log::{debug, warn};

use crate::crypto::digest::{sha256, DIGEST_LEN};
use crate::crypto::provider::CurveProvider;
use crate::headers::{parse_header, payload, signed_range, ImageHeader};
use crate::keys::PublicPoint;
use crate::types::ImageError;

/// Verification knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VerifyPolicy {
    /// Largest accepted image (header + payload), e.g. the application flash
    /// region. `None` disables the check.
    pub max_image_size: Option<usize>,
}

impl VerifyPolicy {
    pub fn with_max_image_size(max: usize) -> Self {
        Self { max_image_size: Some(max) }
    }
}

/// An image that passed verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedImage<'a> {
    pub header: ImageHeader,
    pub payload: &'a [u8],
    /// SHA-256 of the signed range.
    pub digest: [u8; DIGEST_LEN],
}

impl VerifiedImage<'_> {
    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest)
    }
}

/// Verify `buf` and report why it was rejected.
pub fn verify_image_with_policy<'a, P>(
    buf: &'a [u8],
    public: &PublicPoint,
    provider: &P,
    policy: &VerifyPolicy,
) -> Result<VerifiedImage<'a>, ImageError>
where
    P: CurveProvider + ?Sized,
{
    let header = parse_header(buf)?;

    if let Some(max) = policy.max_image_size {
        let total = header.total_len();
        if total > max {
            return Err(ImageError::ImageTooLarge { total, max });
        }
    }

    let range = signed_range(buf)?;
    if !provider.verify(public, range, &header.signature) {
        return Err(ImageError::SignatureRejected);
    }

    debug!("verify: version={} payload={} bytes ok", header.version, header.payload_len());
    Ok(VerifiedImage {
        header,
        payload: payload(buf),
        digest: sha256(range),
    })
}

/// Fail-closed yes/no check with no size policy.
pub fn verify_image<P>(buf: &[u8], public: &PublicPoint, provider: &P) -> bool
where
    P: CurveProvider + ?Sized,
{
    match verify_image_with_policy(buf, public, provider, &VerifyPolicy::default()) {
        Ok(_) => true,
        Err(e) => {
            warn!("image rejected: {}", e);
            false
        }
    }
}
