//! Build manifest output.
//!
//! Writes a machine-readable summary of the run next to the deliverables.
//! Named `manifest.json` deliberately: it does not carry the product-name
//! prefix, so the deliverable filter (and therefore checksumming) never
//! picks it up.

use crate::error::Result;
use crate::packager::checksum::ChecksumRecord;
use crate::packager::params::PackagingParams;
use crate::packager::settings::{Arch, Platform, Settings};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// Filename of the build manifest within the output directory.
pub const MANIFEST_NAME: &str = "manifest.json";

/// Machine-readable summary of one pipeline run.
#[derive(Debug, Serialize)]
pub struct BuildManifest {
    /// Product name.
    pub product: String,
    /// Raw version as configured.
    pub version: String,
    /// Effective version handed to the packaging tool.
    pub app_version: String,
    /// Target platform, when recognized.
    pub platform: Option<Platform>,
    /// Target architecture.
    pub arch: Arch,
    /// Requested package kind token.
    pub package: String,
    /// UTC timestamp of the run.
    pub created: DateTime<Utc>,
    /// One entry per deliverable.
    pub artifacts: Vec<ChecksumRecord>,
}

/// Serializes the manifest into the output directory.
///
/// Returns the manifest path. Overwrites any manifest from a previous run.
pub async fn write_manifest(
    settings: &Settings,
    params: &PackagingParams,
    artifacts: Vec<ChecksumRecord>,
) -> Result<PathBuf> {
    let manifest = BuildManifest {
        product: settings.product_name().to_string(),
        version: settings.version().to_string(),
        app_version: params.app_version.clone(),
        platform: settings.platform(),
        arch: settings.arch(),
        package: settings.request().token().to_string(),
        created: Utc::now(),
        artifacts,
    };

    let path = settings.output_dir().join(MANIFEST_NAME);
    let body = serde_json::to_string_pretty(&manifest)?;
    tokio::fs::write(&path, body).await?;
    Ok(path)
}
