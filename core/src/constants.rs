//! Protocol constants for the signed image envelope.
//!
//! Layout (all multi-byte integers big-endian):
//!
//! ```text
//! 0    4    magic "YASB"
//! 4    32   signature r
//! 36   32   signature s
//! 68   4    length (version + padding + payload)
//! 72   4    version
//! 76   180  padding (zero)
//! 256  N    payload
//! ```

/// Magic number for the image envelope.
/// "YASB" = 0x59 0x41 0x53 0x42
pub const MAGIC_YASB: [u8; 4] = *b"YASB";

/// Curve bit length; every scalar field is sized from it.
pub const ECC_BIT_LEN: usize = 256;

/// One scalar (private key, coordinate, r or s) in bytes.
pub const SCALAR_LEN: usize = ECC_BIT_LEN / 8;

/// Public point `Qx ‖ Qy`.
pub const PUBLIC_KEY_LEN: usize = 2 * SCALAR_LEN;

/// Key file record `d ‖ Qx ‖ Qy`.
pub const KEY_RECORD_LEN: usize = SCALAR_LEN + PUBLIC_KEY_LEN;

/// Signature `r ‖ s`.
pub const SIGNATURE_LEN: usize = 2 * SCALAR_LEN;

pub const MAGIC_LEN: usize = 4;
pub const LENGTH_FIELD_LEN: usize = 4;
pub const VERSION_FIELD_LEN: usize = 4;

/// Total header size. Fixed by the boot verifier; never negotiated.
pub const HEADER_SIZE: usize = 0x100;

/// Zero filler so the header is exactly `HEADER_SIZE` bytes.
pub const PADDING_SIZE: usize =
    HEADER_SIZE - MAGIC_LEN - SIGNATURE_LEN - LENGTH_FIELD_LEN - VERSION_FIELD_LEN;

pub const PADDING_VALUE: u8 = 0;

/// Field offsets inside the header.
pub mod offsets {
    use super::*;

    pub const MAGIC: usize = 0;
    pub const SIG_R: usize = MAGIC + MAGIC_LEN;
    pub const SIG_S: usize = SIG_R + SCALAR_LEN;
    pub const LENGTH: usize = SIG_R + SIGNATURE_LEN;
    pub const VERSION: usize = LENGTH + LENGTH_FIELD_LEN;
    pub const PADDING: usize = VERSION + VERSION_FIELD_LEN;
    pub const PAYLOAD: usize = HEADER_SIZE;

    /// The signature covers everything from the length field to the end.
    pub const SIGNED_RANGE_START: usize = LENGTH;
}

/// Bytes that precede the region counted by the length field.
pub const LENGTH_FIELD_BASE: usize = MAGIC_LEN + SIGNATURE_LEN + LENGTH_FIELD_LEN;

/// Length-field value for an empty payload.
pub const MIN_LENGTH_VALUE: usize = VERSION_FIELD_LEN + PADDING_SIZE;

/// Public-key tokens per line when rendered for firmware source.
pub const EMBED_TOKENS_PER_LINE: usize = 16;

const _: () = assert!(PADDING_SIZE == 180);
const _: () = assert!(offsets::PADDING + PADDING_SIZE == HEADER_SIZE);
const _: () = assert!(offsets::SIGNED_RANGE_START == 68);
