//! Checksum sidecar generation.
//!
//! Every finalized deliverable gets a `<filename>.sha512` sidecar in the
//! same directory, holding the hex digest and the filename. Recomputing over
//! an existing sidecar overwrites it; re-runs are harmless.

use crate::error::Result;
use serde::Serialize;
use sha2::{Digest, Sha512};
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

/// Sidecar suffixes the output-set filter must exclude.
pub const CHECKSUM_SUFFIXES: &[&str] = &["sha512", "sha256", "sha384"];

/// Suffix of the sidecars this pipeline writes.
pub const CHECKSUM_SUFFIX: &str = "sha512";

/// One checksummed deliverable.
#[derive(Clone, Debug, Serialize)]
pub struct ChecksumRecord {
    /// Deliverable filename (no directory).
    pub file: String,
    /// Size in bytes.
    pub size: u64,
    /// Hex-encoded SHA-512 digest.
    pub sha512: String,
}

/// Writes one checksum sidecar per deliverable.
///
/// Returns the records in input order, for the build manifest.
pub async fn write_checksums(files: &[PathBuf]) -> Result<Vec<ChecksumRecord>> {
    let mut records = Vec::with_capacity(files.len());
    for path in files {
        records.push(write_checksum(path).await?);
    }
    Ok(records)
}

/// Computes the digest for one file and writes its sidecar.
pub async fn write_checksum(path: &Path) -> Result<ChecksumRecord> {
    let digest = file_sha512(path).await?;
    let size = tokio::fs::metadata(path).await?.len();
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let sidecar = sidecar_path(path);
    let contents = format!("{digest}  {file_name}\n");
    tokio::fs::write(&sidecar, contents).await?;
    log::info!("Wrote {}", sidecar.display());

    Ok(ChecksumRecord {
        file: file_name,
        size,
        sha512: digest,
    })
}

/// Sidecar path for a deliverable: `<path>.sha512`.
pub fn sidecar_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(CHECKSUM_SUFFIX);
    PathBuf::from(name)
}

/// Streaming SHA-512 of a file, 8 KB chunks.
async fn file_sha512(path: &Path) -> Result<String> {
    let mut file = tokio::fs::File::open(path).await?;
    let mut hasher = Sha512::new();
    let mut buffer = vec![0u8; 8192];

    loop {
        let n = file.read(&mut buffer).await?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}
