
// # 🧪 SHA-256 over the signed range

use yasb_core::crypto::{sha256, DIGEST_LEN};

// ## 1️⃣ Known vectors

#[test]
fn sha256_empty() {
    assert_eq!(
        hex::encode(sha256(b"")),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn sha256_abc() {
    assert_eq!(
        hex::encode(sha256(b"abc")),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

// ## 2️⃣ Sensitivity

#[test]
fn one_bit_changes_digest() {
    let a = vec![0u8; 1024];
    let mut b = a.clone();
    b[1023] = 1;
    assert_eq!(sha256(&a).len(), DIGEST_LEN);
    assert_ne!(sha256(&a), sha256(&b));
}
