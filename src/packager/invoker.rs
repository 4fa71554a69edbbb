//! jpackage invocation.
//!
//! The application image is always built first; unless the parameters skip
//! installers, one additional run follows per requested installer kind.
//! Installers are built from source in their own passes while the image
//! directory stays in the output directory for the finalizer. jpackage's own
//! validation is not reinterpreted here: any non-zero exit propagates
//! unmodified as a build failure.

use crate::error::{PackageError, Result};
use crate::packager::params::PackagingParams;
use crate::packager::settings::Settings;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::process::Command;

/// Name of the packaging executable searched on PATH.
pub const JPACKAGE: &str = "jpackage";

/// Locates the jpackage executable.
///
/// An explicit override from the settings wins; otherwise the PATH is
/// searched.
pub fn locate_tool(settings: &Settings) -> Result<PathBuf> {
    if let Some(path) = settings.jpackage_path() {
        return Ok(path.to_path_buf());
    }
    which::which(JPACKAGE).map_err(|_| PackageError::ToolNotFound {
        tool: JPACKAGE.to_string(),
    })
}

/// Runs the jpackage passes for this build.
///
/// Extra launchers are materialized to temporary properties files that live
/// until every invocation has finished; jpackage's `--add-launcher` flag
/// only accepts a file path.
pub async fn run_jpackage(settings: &Settings, params: &PackagingParams) -> Result<()> {
    let tool = locate_tool(settings)?;
    let launcher_files = write_launcher_files(params)?;

    // Image pass. Always runs, so the unpacked image lands in the output
    // directory even when installers are requested (the Windows finalizer
    // zips it from there).
    log::info!("Calling jpackage for the application image");
    let mut command = base_command(&tool, settings, params, &launcher_files);
    command
        .arg("--type")
        .arg("app-image")
        .arg("--name")
        .arg(&params.image_name);
    run_command(command).await?;

    if params.skip_installer {
        return Ok(());
    }

    // Installer passes, one per requested kind.
    for kind in params.installer_types.iter().flatten() {
        log::info!("Calling jpackage for \"{kind}\"");
        let mut command = base_command(&tool, settings, params, &launcher_files);
        command
            .arg("--type")
            .arg(kind)
            .arg("--name")
            .arg(installer_basename(&params.installer_name, kind));
        command.args(&params.installer_options);
        run_command(command).await?;
    }

    Ok(())
}

/// Arguments shared by the image and installer passes.
fn base_command(
    tool: &Path,
    settings: &Settings,
    params: &PackagingParams,
    launcher_files: &[NamedTempFile],
) -> Command {
    let mut command = Command::new(tool);
    command
        .arg("--input")
        .arg(settings.input_dir())
        .arg("--main-jar")
        .arg(settings.main_jar())
        .arg("--app-version")
        .arg(&params.app_version)
        .arg("--dest")
        .arg(&params.output_dir);

    if let Some(resource_dir) = &params.resource_dir {
        command.arg("--resource-dir").arg(resource_dir);
    }
    for jvm_arg in &params.jvm_args {
        command.arg("--java-options").arg(jvm_arg);
    }
    command.args(&params.image_options);
    for (launcher, file) in params.extra_launchers.iter().zip(launcher_files) {
        command
            .arg("--add-launcher")
            .arg(format!("{}={}", launcher.name, file.path().display()));
    }

    command
}

/// Spawns one jpackage pass and waits for it.
async fn run_command(mut command: Command) -> Result<()> {
    let status = command
        .status()
        .await
        .map_err(|e| PackageError::ToolLaunch {
            command: JPACKAGE.to_string(),
            source: e,
        })?;
    if !status.success() {
        return Err(PackageError::ToolFailed {
            command: JPACKAGE.to_string(),
            status,
        });
    }
    Ok(())
}

/// Materializes the in-memory launcher configurations to temp files.
fn write_launcher_files(params: &PackagingParams) -> Result<Vec<NamedTempFile>> {
    let mut files = Vec::with_capacity(params.extra_launchers.len());
    for launcher in &params.extra_launchers {
        let mut file = tempfile::Builder::new()
            .prefix("launcher-")
            .suffix(".properties")
            .tempfile()?;
        file.write_all(launcher.properties.as_bytes())?;
        file.flush()?;
        files.push(file);
    }
    Ok(files)
}

/// Strips a trailing `.<kind>` from an installer name.
///
/// The installer name may be pre-rendered with its extension (macOS);
/// jpackage appends the extension itself.
fn installer_basename(name: &str, kind: &str) -> String {
    name.strip_suffix(&format!(".{kind}"))
        .unwrap_or(name)
        .to_string()
}
