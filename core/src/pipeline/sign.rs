//! pipeline/sign.rs
//! Build and sign an image from a raw payload.

use log::{debug, info};

use crate::crypto::provider::CurveProvider;
use crate::headers::{build_unsigned_header, embed_signature, signed_range};
use crate::keys::KeyRecord;
use crate::types::ImageError;

/// Produce `header ‖ payload` with the signature embedded.
///
/// Steps:
/// 1. reject versions wider than 32 bits
/// 2. build the unsigned header for `payload.len()`
/// 3. append the payload
/// 4. sign bytes `68..end` (length field onward)
/// 5. embed `(r, s)` into the placeholder
///
/// The payload is never inspected. Output length is always
/// `256 + payload.len()`.
pub fn sign_image<P>(
    payload: &[u8],
    key: &KeyRecord,
    version: u64,
    provider: &P,
) -> Result<Vec<u8>, ImageError>
where
    P: CurveProvider + ?Sized,
{
    let version = u32::try_from(version).map_err(|_| ImageError::InvalidVersion { have: version })?;

    let header = build_unsigned_header(version, payload.len())?;

    let mut candidate = Vec::with_capacity(header.len() + payload.len());
    candidate.extend_from_slice(&header);
    candidate.extend_from_slice(payload);

    let signature = {
        let range = signed_range(&candidate)?;
        debug!("sign: {} bytes in signed range", range.len());
        provider.sign(&key.private, range)?
    };

    embed_signature(&mut candidate, &signature.r, &signature.s)?;

    info!(
        "signed image: version={} payload={} bytes total={} bytes ({})",
        version,
        payload.len(),
        candidate.len(),
        provider.algorithm()
    );
    Ok(candidate)
}
