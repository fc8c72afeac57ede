//! keys/format.rs
//! Public-key renderings for firmware source and other consumers.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::constants::EMBED_TOKENS_PER_LINE;
use crate::keys::types::PublicPoint;

/// Line layout for the embedded key block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmbedStyle {
    /// Plain initializer rows, e.g. inside `{ ... }`.
    #[default]
    Plain,
    /// Every line but the last ends in ` \` so the block can live in a
    /// `#define`.
    CMacro,
}

/// The 64 byte literals of `Qx ‖ Qy`, e.g. `"0x5a"`.
pub fn embedding_tokens(public: &PublicPoint) -> Vec<String> {
    public.to_bytes().iter().map(|b| format!("0x{:02x}", b)).collect()
}

/// Render `Qx ‖ Qy` as comma-separated byte literals, 16 per line.
pub fn format_public_key_for_embedding(public: &PublicPoint) -> String {
    format_public_key_with_style(public, EmbedStyle::Plain)
}

pub fn format_public_key_with_style(public: &PublicPoint, style: EmbedStyle) -> String {
    let tokens = embedding_tokens(public);
    let lines: Vec<String> = tokens
        .chunks(EMBED_TOKENS_PER_LINE)
        .map(|row| {
            let mut line = row.join(", ");
            line.push(',');
            line
        })
        .collect();

    let sep = match style {
        EmbedStyle::Plain => "\n",
        EmbedStyle::CMacro => " \\\n",
    };
    lines.join(sep)
}

/// Lower-case hex of `Qx ‖ Qy` (128 characters).
pub fn public_key_hex(public: &PublicPoint) -> String {
    hex::encode(public.to_bytes())
}

/// Standard base64 of `Qx ‖ Qy`.
pub fn public_key_base64(public: &PublicPoint) -> String {
    STANDARD.encode(public.to_bytes())
}
