// ## 📂 File: `src/headers/encode.rs`
//! src/headers/encode.rs
//!
//! Header encoding utilities.
//!
//! Design notes:
//! - Serializes `ImageHeader` into a fixed 256-byte buffer, big-endian.
//! - Field order must match the layout in `constants.rs` exactly; the boot
//!   verifier reads it as a packed struct.
//! - Signature components go through `write_fixed_be`, never a natural-length
//!   copy, so a short `r` or `s` is right-aligned in its slot.

use byteorder::{BigEndian, ByteOrder};
use log::debug;

use crate::constants::{
    offsets, HEADER_SIZE, LENGTH_FIELD_BASE, MIN_LENGTH_VALUE, PADDING_SIZE, PADDING_VALUE,
    SCALAR_LEN, VERSION_FIELD_LEN,
};
use crate::headers::types::{HeaderError, ImageHeader};
use crate::scalar::Scalar;

/// Length-field value: version field + padding + payload.
///
/// # Errors
/// - `HeaderError::Overflow` if the sum does not fit in 32 bits.
pub fn compute_length_field(payload_len: usize, padding_size: usize) -> Result<u32, HeaderError> {
    let overhead = VERSION_FIELD_LEN + padding_size;
    let overflow = || HeaderError::Overflow { payload_len, overhead };

    let total = VERSION_FIELD_LEN
        .checked_add(payload_len)
        .and_then(|v| v.checked_add(padding_size))
        .ok_or_else(overflow)?;

    u32::try_from(total).map_err(|_| overflow())
}

/// Serialize an `ImageHeader` into its 256-byte wire form.
pub fn encode_header(h: &ImageHeader) -> [u8; HEADER_SIZE] {
    let mut out = [0u8; HEADER_SIZE];
    let mut i = 0usize;

    fn put_u32(out: &mut [u8], i: &mut usize, v: u32) {
        BigEndian::write_u32(&mut out[*i..*i + 4], v);
        *i += 4;
    }
    fn put_bytes(out: &mut [u8], i: &mut usize, b: &[u8]) {
        out[*i..*i + b.len()].copy_from_slice(b);
        *i += b.len();
    }

    put_bytes(&mut out, &mut i, &h.magic);                    // 0..4     magic
    put_bytes(&mut out, &mut i, h.signature.r.as_bytes());    // 4..36    r
    put_bytes(&mut out, &mut i, h.signature.s.as_bytes());    // 36..68   s
    put_u32(&mut out, &mut i, h.length);                      // 68..72   length
    put_u32(&mut out, &mut i, h.version);                     // 72..76   version
    put_bytes(&mut out, &mut i, &[PADDING_VALUE; PADDING_SIZE]); // 76..256 padding

    debug_assert_eq!(i, HEADER_SIZE, "encoding wrote incorrect length");
    out
}

/// Header for `payload_len` bytes of payload with a zeroed signature slot.
pub fn build_unsigned_header(version: u32, payload_len: usize) -> Result<[u8; HEADER_SIZE], HeaderError> {
    let length = compute_length_field(payload_len, PADDING_SIZE)?;
    debug!(
        "header: version={} payload_len={} length=0x{:08x} total={}",
        version,
        payload_len,
        length,
        LENGTH_FIELD_BASE + length as usize
    );
    debug_assert_eq!(length as usize, MIN_LENGTH_VALUE + payload_len);
    Ok(encode_header(&ImageHeader::unsigned(version, length)))
}

/// Overwrite the signature slot of `buf` with `r ‖ s`.
///
/// Both 32-byte fields are fully rewritten: leading bytes become zero and the
/// value sits right-aligned.
///
/// # Errors
/// - `HeaderError::Truncated` if `buf` cannot hold magic + signature.
pub fn embed_signature(buf: &mut [u8], r: &Scalar, s: &Scalar) -> Result<(), HeaderError> {
    if buf.len() < offsets::SIGNED_RANGE_START {
        return Err(HeaderError::Truncated { have: buf.len(), need: offsets::SIGNED_RANGE_START });
    }

    r.write_to(&mut buf[offsets::SIG_R..offsets::SIG_R + SCALAR_LEN])
        .map_err(|source| HeaderError::Scalar { component: "r", source })?;
    s.write_to(&mut buf[offsets::SIG_S..offsets::SIG_S + SCALAR_LEN])
        .map_err(|source| HeaderError::Scalar { component: "s", source })?;
    Ok(())
}
