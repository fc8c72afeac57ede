//! Subcommand bodies. Each takes paths and a provider and returns what
//! `main` prints, so they can be driven from tests.

use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use yasb_core::crypto::CurveProvider;
use yasb_core::keys::{
    encode_key_record, format_public_key_with_style, public_key_base64, public_key_hex, EmbedStyle,
    KeyRecord,
};
use yasb_core::pipeline::{inspect_image, sign_image, verify_image_with_policy, VerifyPolicy};

use crate::files::{read_all, read_key_file, set_owner_only, write_atomic};
use crate::KeyFormat;

pub fn keygen<P: CurveProvider>(provider: &P, output: &Path, force: bool) -> Result<()> {
    let (private, public) = provider.generate_keypair().context("generating keypair")?;
    let record = KeyRecord::new(private, public);

    let bytes = encode_key_record(&record);
    write_atomic(output, bytes.as_slice(), force)?;
    set_owner_only(output)?;

    info!("wrote key file {}", output.display());
    Ok(())
}

pub fn print_key(key: &Path, format: KeyFormat) -> Result<String> {
    let record = read_key_file(key)?;
    let text = match format {
        KeyFormat::C => format_public_key_with_style(&record.public, EmbedStyle::Plain),
        KeyFormat::CMacro => format_public_key_with_style(&record.public, EmbedStyle::CMacro),
        KeyFormat::Hex => public_key_hex(&record.public),
        KeyFormat::Base64 => public_key_base64(&record.public),
    };
    Ok(text)
}

/// Returns the signed image length.
pub fn sign<P: CurveProvider>(
    provider: &P,
    input: &Path,
    key: &Path,
    version: u64,
    output: &Path,
) -> Result<usize> {
    let payload = read_all(input)?;
    let record = read_key_file(key)?;
    info!("payload length: {}", payload.len());

    let image = sign_image(&payload, &record, version, provider)
        .with_context(|| format!("signing {}", input.display()))?;

    write_atomic(output, &image, true)?;
    info!("new image size: {} -> {}", image.len(), output.display());
    Ok(image.len())
}

pub fn verify<P: CurveProvider>(
    provider: &P,
    input: &Path,
    key: &Path,
    max_image_size: Option<usize>,
) -> Result<String> {
    let image = read_all(input)?;
    let record = read_key_file(key)?;
    let policy = VerifyPolicy { max_image_size };

    let verified = verify_image_with_policy(&image, &record.public, provider, &policy)
        .with_context(|| format!("verifying {}", input.display()))?;

    Ok(format!(
        "OK: version {} payload {} bytes sha256 {}",
        verified.header.version,
        verified.payload.len(),
        verified.digest_hex()
    ))
}

pub fn inspect(input: &Path, json: bool) -> Result<String> {
    let image = read_all(input)?;
    let summary = inspect_image(&image).with_context(|| format!("inspecting {}", input.display()))?;

    if json {
        return Ok(serde_json::to_string_pretty(&summary)?);
    }
    Ok(format!(
        "magic:        {}\n\
         version:      {}\n\
         length:       0x{:08x}\n\
         payload:      {} bytes\n\
         total:        {} bytes\n\
         signature r:  {}\n\
         signature s:  {}\n\
         signed sha256: {}",
        summary.magic,
        summary.version,
        summary.length,
        summary.payload_len,
        summary.total_len,
        summary.signature_r,
        summary.signature_s,
        summary.signed_range_sha256,
    ))
}
