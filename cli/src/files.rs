//! File helpers: whole-file reads and atomic writes.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use tempfile::NamedTempFile;
use yasb_core::keys::{decode_key_record, KeyRecord};
use zeroize::Zeroizing;

pub fn read_all(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("reading {}", path.display()))
}

pub fn read_key_file(path: &Path) -> Result<KeyRecord> {
    let bytes = Zeroizing::new(read_all(path)?);
    decode_key_record(&bytes[..]).with_context(|| format!("decoding key file {}", path.display()))
}

/// Write bytes via tempfile -> sync -> persist(rename) for atomicity.
///
/// Without `overwrite` the final rename refuses to replace an existing file,
/// so a file that appears while the temp file is written is left alone.
pub fn write_atomic(path: &Path, data: &[u8], overwrite: bool) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).with_context(|| format!("creating temp file in {}", dir.display()))?;
    tmp.write_all(data)?;
    tmp.as_file().sync_all()?;

    let persisted = if overwrite { tmp.persist(path) } else { tmp.persist_noclobber(path) };
    match persisted {
        Ok(_) => Ok(()),
        Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => {
            bail!("{} already exists (use --force to overwrite)", path.display())
        }
        Err(e) => Err(anyhow::Error::new(e.error).context(format!("persisting to {}", path.display()))),
    }
}

#[cfg(unix)]
pub fn set_owner_only(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600)).with_context(|| format!("chmod {}", path.display()))?;
    Ok(())
}

#[cfg(not(unix))]
pub fn set_owner_only(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_atomic_keeps_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("k.bin");
        fs::write(&path, b"first").unwrap();

        let err = write_atomic(&path, b"second", false).unwrap_err();
        assert!(format!("{:#}", err).contains("already exists"));
        assert_eq!(fs::read(&path).unwrap(), b"first");
        // the rejected temp file is cleaned up
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_atomic_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("image.bin");
        write_atomic(&path, b"first", false).unwrap();
        write_atomic(&path, b"second", true).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"second");
    }

    #[test]
    fn test_read_key_file_rejects_short_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("k.bin");
        fs::write(&path, [0u8; 95]).unwrap();
        let err = read_key_file(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("key record truncated"));
    }
}
