// ## 📂 File: `src/headers/decode.rs`
//! src/headers/decode.rs
//!
//! Header decoding utilities.
//!
//! Design notes:
//! - Magic is checked first, before anything else is trusted.
//! - The length field must account for every byte after it; a buffer that is
//!   short or carries trailing bytes is rejected.
//! - Parsing does not check the signature. See `pipeline::verify`.

use byteorder::{BigEndian, ByteOrder};

use crate::constants::{
    offsets, HEADER_SIZE, LENGTH_FIELD_BASE, MAGIC_LEN, MAGIC_YASB, SIGNATURE_LEN,
};
use crate::crypto::types::Signature;
use crate::headers::types::{HeaderError, ImageHeader};

/// The bytes covered by the signature: offset 68 (length field) to the end.
///
/// # Errors
/// - `HeaderError::Truncated` if `buf` ends before the length field.
#[inline]
pub fn signed_range(buf: &[u8]) -> Result<&[u8], HeaderError> {
    if buf.len() < offsets::SIGNED_RANGE_START {
        return Err(HeaderError::Truncated { have: buf.len(), need: offsets::SIGNED_RANGE_START });
    }
    Ok(&buf[offsets::SIGNED_RANGE_START..])
}

/// Parse and validate the header of a complete signed image.
///
/// # Errors
/// - `BadMagic` when the first four bytes are not "YASB".
/// - `Truncated` when the buffer cannot hold a full header.
/// - `LengthMismatch` when `buf.len() != 72 + length`.
/// - `PaddingNonZero` when a padding byte is set.
pub fn parse_header(buf: &[u8]) -> Result<ImageHeader, HeaderError> {
    if buf.len() < MAGIC_LEN {
        return Err(HeaderError::Truncated { have: buf.len(), need: HEADER_SIZE });
    }

    let mut magic = [0u8; MAGIC_LEN];
    magic.copy_from_slice(&buf[offsets::MAGIC..offsets::MAGIC + MAGIC_LEN]);
    if magic != MAGIC_YASB {
        return Err(HeaderError::BadMagic { have: magic, need: MAGIC_YASB });
    }

    if buf.len() < HEADER_SIZE {
        return Err(HeaderError::Truncated { have: buf.len(), need: HEADER_SIZE });
    }

    let mut sig = [0u8; SIGNATURE_LEN];
    sig.copy_from_slice(&buf[offsets::SIG_R..offsets::SIG_R + SIGNATURE_LEN]);       // 4..68
    let signature = Signature::from_bytes(&sig);
    let length  = BigEndian::read_u32(&buf[offsets::LENGTH..offsets::LENGTH + 4]);   // 68..72
    let version = BigEndian::read_u32(&buf[offsets::VERSION..offsets::VERSION + 4]); // 72..76

    let expected = LENGTH_FIELD_BASE as u64 + length as u64;
    if buf.len() as u64 != expected {
        return Err(HeaderError::LengthMismatch {
            length,
            expected: expected as usize,
            actual: buf.len(),
        });
    }

    if let Some(pos) = buf[offsets::PADDING..HEADER_SIZE].iter().position(|&b| b != 0) {
        let offset = offsets::PADDING + pos;
        return Err(HeaderError::PaddingNonZero { offset, value: buf[offset] });
    }

    Ok(ImageHeader {
        magic,
        signature,
        length,
        version,
    })
}

/// Payload slice of an image whose header already parsed.
#[inline]
pub fn payload(buf: &[u8]) -> &[u8] {
    &buf[offsets::PAYLOAD.min(buf.len())..]
}
