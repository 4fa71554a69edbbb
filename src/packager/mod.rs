//! Packaging pipeline stages and orchestration.
//!
//! The pipeline is a fixed sequence of filesystem transformations:
//! parameter assembly -> jpackage invocation -> output name correction ->
//! platform finalization -> checksum sidecars -> build manifest. Execution
//! is sequential and one-shot; on failure the whole pipeline is simply
//! re-run (every stage tolerates its own prior output).

pub mod associations;
pub mod checksum;
pub mod finalize;
pub mod invoker;
pub mod manifest;
pub mod naming;
pub mod params;
pub mod settings;
pub mod version;

pub use checksum::ChecksumRecord;
pub use params::PackagingParams;
pub use settings::{Arch, PackageRequest, Platform, Settings};

use crate::error::Result;
use std::path::PathBuf;

/// Outcome of a completed pipeline run.
#[derive(Debug)]
pub struct PipelineReport {
    /// Frozen parameters the invoker consumed.
    pub params: PackagingParams,
    /// Checksummed deliverables, one record each.
    pub artifacts: Vec<ChecksumRecord>,
    /// Path of the build manifest.
    pub manifest_path: PathBuf,
}

/// Runs the whole pipeline for the given settings.
pub async fn run_pipeline(settings: &Settings) -> Result<PipelineReport> {
    tokio::fs::create_dir_all(settings.output_dir()).await?;

    let params = PackagingParams::build(settings);
    invoker::run_jpackage(settings, &params).await?;
    naming::correct_names(
        settings.output_dir(),
        settings.product_name(),
        settings.version(),
        settings.arch(),
    )
    .await?;
    let outputs = finalize::finalize(settings, &params).await?;
    let artifacts = checksum::write_checksums(&outputs).await?;
    let manifest_path = manifest::write_manifest(settings, &params, artifacts.clone()).await?;

    Ok(PipelineReport {
        params,
        artifacts,
        manifest_path,
    })
}
