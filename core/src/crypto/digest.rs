//! crypto/digest.rs
//! SHA-256 of the signed range: the exact value the boot verifier hashes
//! before checking `(r, s)`. Used for operator-facing reports.

use sha2::{Digest as _, Sha256};

pub const DIGEST_LEN: usize = 32;

#[inline]
pub fn sha256(data: &[u8]) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}
