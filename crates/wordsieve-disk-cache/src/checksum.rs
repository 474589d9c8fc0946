//! # File Checksums
//!
//! Resources are pinned by a (possibly truncated) lowercase hex SHA-256 digest.

use std::{fs::File, io, path::Path};

use sha2::{Digest, Sha256};

/// Compute the lowercase hex SHA-256 digest of a file.
pub fn sha256_hex<P: AsRef<Path>>(path: P) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(format!("{:x}", hasher.finalize()))
}

/// Check a hex digest against an expected prefix.
///
/// An empty `expected` never matches.
pub fn digest_matches(
    digest: &str,
    expected: &str,
) -> bool {
    !expected.is_empty() && digest.starts_with(&expected.to_ascii_lowercase())
}

/// Verify that the file at `path` matches the `expected` digest prefix.
pub fn verify_file<P: AsRef<Path>>(
    path: P,
    expected: &str,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let digest = sha256_hex(path)?;
    if !digest_matches(&digest, expected) {
        anyhow::bail!(
            "checksum mismatch for {}: expected {expected}, found {digest}",
            path.display()
        );
    }
    Ok(())
}
