//! keys/decode.rs
//!
//! Key record decoding. Fields are read at fixed offsets 0, 32 and 64.

use log::debug;

use crate::constants::{KEY_RECORD_LEN, SCALAR_LEN};
use crate::keys::types::{KeyError, KeyRecord, PrivateScalar, PublicPoint};
use crate::scalar::Scalar;

/// Deserialize a key record.
///
/// # Errors
/// - `KeyError::Truncated` if fewer than 96 bytes are available.
///
/// Bytes past the first record are ignored.
pub fn decode_key_record(buf: &[u8]) -> Result<KeyRecord, KeyError> {
    if buf.len() < KEY_RECORD_LEN {
        return Err(KeyError::Truncated { have: buf.len(), need: KEY_RECORD_LEN });
    }
    if buf.len() > KEY_RECORD_LEN {
        debug!("key record: ignoring {} trailing bytes", buf.len() - KEY_RECORD_LEN);
    }

    let mut i = 0usize;
    #[inline] fn get_scalar(buf: &[u8], i: &mut usize) -> Scalar {
        let mut dst = [0u8; SCALAR_LEN]; dst.copy_from_slice(&buf[*i..*i + SCALAR_LEN]); *i += SCALAR_LEN;
        Scalar::from_be_array(dst)
    }

    let d  = get_scalar(buf, &mut i); // 0..32
    let qx = get_scalar(buf, &mut i); // 32..64
    let qy = get_scalar(buf, &mut i); // 64..96

    Ok(KeyRecord::new(PrivateScalar::new(d), PublicPoint::new(qx, qy)))
}

/// Read only the public half of a key record.
pub fn decode_public_point(buf: &[u8]) -> Result<PublicPoint, KeyError> {
    decode_key_record(buf).map(|record| record.public)
}
