//! pipeline/inspect.rs
//! Read-only header report. No signature check.

use crate::crypto::digest::sha256;
use crate::headers::{parse_header, signed_range, ImageSummary};
use crate::types::ImageError;

pub fn inspect_image(buf: &[u8]) -> Result<ImageSummary, ImageError> {
    let header = parse_header(buf)?;
    let digest = sha256(signed_range(buf)?);
    Ok(header.summary(&digest))
}
