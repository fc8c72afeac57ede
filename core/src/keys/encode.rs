//! keys/encode.rs
//!
//! Key record encoding.
//!
//! Design notes:
//! - Three fixed 32-byte big-endian fields, in order `d`, `Qx`, `Qy`.
//! - Short values are left-zero-padded inside their field; a value with
//!   more than 32 significant bytes is rejected.
//! - The encoded record carries `d`, so it comes back in `Zeroizing` and is
//!   wiped when the caller drops it.

use zeroize::Zeroizing;

use crate::constants::{KEY_RECORD_LEN, SCALAR_LEN};
use crate::keys::types::{KeyError, KeyRecord};
use crate::scalar::write_fixed_be;

/// Serialize a `KeyRecord` into its 96-byte file form.
pub fn encode_key_record(record: &KeyRecord) -> Zeroizing<[u8; KEY_RECORD_LEN]> {
    let mut out = Zeroizing::new([0u8; KEY_RECORD_LEN]);
    out[0..SCALAR_LEN].copy_from_slice(record.private.expose().as_bytes());
    out[SCALAR_LEN..2 * SCALAR_LEN].copy_from_slice(record.public.x.as_bytes());
    out[2 * SCALAR_LEN..KEY_RECORD_LEN].copy_from_slice(record.public.y.as_bytes());
    out
}

/// Serialize raw big-endian integers (any natural length) into a key record.
///
/// # Errors
/// - `KeyError::Scalar` naming the field that exceeds 256 bits.
pub fn encode_key_parts(
    d: &[u8],
    qx: &[u8],
    qy: &[u8],
) -> Result<Zeroizing<[u8; KEY_RECORD_LEN]>, KeyError> {
    let mut out = Zeroizing::new([0u8; KEY_RECORD_LEN]);
    let mut i = 0usize;

    fn put_scalar(out: &mut [u8], i: &mut usize, field: &'static str, v: &[u8]) -> Result<(), KeyError> {
        write_fixed_be(&mut out[*i..*i + SCALAR_LEN], v)
            .map_err(|source| KeyError::Scalar { field, source })?;
        *i += SCALAR_LEN;
        Ok(())
    }

    put_scalar(&mut out[..], &mut i, "d", d)?;   // 0..32
    put_scalar(&mut out[..], &mut i, "qx", qx)?; // 32..64
    put_scalar(&mut out[..], &mut i, "qy", qy)?; // 64..96

    debug_assert_eq!(i, KEY_RECORD_LEN, "key encoding wrote incorrect length");
    Ok(out)
}
