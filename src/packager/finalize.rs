//! Post-package finalization.
//!
//! Two independent platform branches run after name correction, each
//! short-circuiting when its preconditions are absent:
//!
//! - macOS: build the installer `.pkg` out-of-process from the corrected app
//!   bundle, re-correct its name, and delete the bundle. The second jpackage
//!   pass is required because bundle metadata may have been updated after
//!   the image-only first pass.
//! - Windows: zip the application image directory next to itself, so the
//!   portable image ships alongside the installer.
//!
//! The stage then narrows the output-file set to the final deliverables:
//! direct children of the output directory carrying the product-name prefix,
//! excluding checksum sidecars.

use crate::error::{PackageError, Result};
use crate::packager::checksum::CHECKSUM_SUFFIXES;
use crate::packager::invoker;
use crate::packager::naming::{canonical_name, correct_names};
use crate::packager::params::PackagingParams;
use crate::packager::settings::{Platform, Settings};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Runs the platform finalizers and returns the deliverable set.
pub async fn finalize(settings: &Settings, params: &PackagingParams) -> Result<Vec<PathBuf>> {
    match settings.platform() {
        Some(Platform::MacOs) => finalize_macos(settings, params).await?,
        Some(Platform::Windows) => finalize_windows(settings).await?,
        _ => {}
    }
    collect_outputs(settings).await
}

/// macOS branch: second jpackage pass over the corrected app bundle.
async fn finalize_macos(settings: &Settings, params: &PackagingParams) -> Result<()> {
    let app_name = canonical_name(
        settings.product_name(),
        settings.version(),
        settings.arch(),
        "app",
    );
    let app_path = settings.output_dir().join(&app_name);
    if !app_path.exists() || !settings.request().wants_installer_package() {
        return Ok(());
    }

    log::info!("Creating pkg from {}", app_path.display());
    let tool = invoker::locate_tool(settings)?;
    let status = tokio::process::Command::new(&tool)
        .current_dir(settings.output_dir())
        .arg("-n")
        .arg(settings.product_name())
        .arg("--app-image")
        .arg(&app_path)
        .arg("--type")
        .arg("pkg")
        .arg("--app-version")
        .arg(&params.app_version)
        .status()
        .await
        .map_err(|e| PackageError::ToolLaunch {
            command: invoker::JPACKAGE.to_string(),
            source: e,
        })?;
    if !status.success() {
        return Err(PackageError::ToolFailed {
            command: invoker::JPACKAGE.to_string(),
            status,
        });
    }

    // The direct pkg output uses the raw version-based name; correct it.
    correct_names(
        settings.output_dir(),
        settings.product_name(),
        settings.version(),
        settings.arch(),
    )
    .await?;

    let pkg_path = settings.output_dir().join(canonical_name(
        settings.product_name(),
        settings.version(),
        settings.arch(),
        "pkg",
    ));
    if !pkg_path.is_file() {
        return Err(PackageError::MissingArtifact { path: pkg_path });
    }

    // The bundle has served its purpose and only takes up space now.
    log::info!("Deleting {}", app_path.display());
    tokio::fs::remove_dir_all(&app_path).await?;
    Ok(())
}

/// Windows branch: archive the image directory for portable installs.
///
/// The msi built by jpackage does not redistribute the raw unpacked image,
/// so consumers who want it get a sibling zip.
async fn finalize_windows(settings: &Settings) -> Result<()> {
    use crate::packager::settings::PackageRequest;

    let image_dir = settings
        .output_dir()
        .join(format!("{}-{}", settings.product_name(), settings.version()));
    if !image_dir.is_dir() || !matches!(settings.request(), PackageRequest::Installer) {
        return Ok(());
    }

    // Append rather than set_extension: the version dots are not an extension.
    let mut zip_name = image_dir.clone().into_os_string();
    zip_name.push(".zip");
    let archive = PathBuf::from(zip_name);

    log::info!("Zipping {}", image_dir.display());
    tokio::task::spawn_blocking(move || zip_directory(&image_dir, &archive))
        .await
        .map_err(|e| PackageError::Anyhow(anyhow::anyhow!("zip task panicked: {e}")))??;
    Ok(())
}

/// Zips a directory tree, entries relative to the directory itself.
///
/// Entries are written in sorted order so re-archiving an unchanged tree is
/// byte-for-byte reproducible apart from timestamps.
fn zip_directory(dir: &Path, archive: &Path) -> Result<()> {
    let file = File::create(archive)?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    let mut entries: Vec<_> = walkdir::WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .collect();
    entries.sort_by_key(|e| e.path().to_path_buf());

    for entry in entries {
        let Ok(rel_path) = entry.path().strip_prefix(dir) else {
            continue;
        };
        writer.start_file(rel_path.to_string_lossy().replace('\\', "/"), options)?;
        let mut source = File::open(entry.path())?;
        io::copy(&mut source, &mut writer)?;
    }

    writer.finish()?;
    Ok(())
}

/// Collects the deliverable files for checksumming.
///
/// Direct children of the output directory only, product-name prefix
/// required, checksum sidecars excluded so a sidecar is never checksummed.
async fn collect_outputs(settings: &Settings) -> Result<Vec<PathBuf>> {
    let mut outputs = Vec::new();
    let dir = settings.output_dir();
    if !dir.is_dir() {
        return Ok(outputs);
    }

    let mut entries = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.starts_with(settings.product_name()) {
            continue;
        }
        if CHECKSUM_SUFFIXES
            .iter()
            .any(|suffix| name.ends_with(&format!(".{suffix}")))
        {
            continue;
        }
        outputs.push(path);
    }

    outputs.sort();
    Ok(outputs)
}
