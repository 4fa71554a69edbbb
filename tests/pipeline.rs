//! Stage-level tests over temporary directories.
//!
//! Naming, finalization and checksums are pure filesystem work and run in
//! sandboxes; the jpackage invocations run against a stub executable that
//! records its argv and fakes the image output.

use distpack::packager::settings::{Arch, PackageRequest, Platform, Settings};
use distpack::packager::{associations, checksum, finalize, naming, params::PackagingParams};
use std::fs;
use std::path::{Path, PathBuf};

fn settings_in(
    dir: &Path,
    version: &str,
    request: PackageRequest,
    platform: Option<Platform>,
    arch: Arch,
) -> Settings {
    Settings::new(
        "Product".to_string(),
        version.to_string(),
        "product.jar".to_string(),
        dir.join("libs"),
        dir.join("jpackage"),
        dir.join("dist"),
        request,
        platform,
        arch,
        None,
        Vec::new(),
    )
}

/// Writes a fake jpackage that logs every argv line and, for app-image
/// passes, creates the image directory the real tool would produce.
#[cfg(unix)]
fn write_stub_jpackage(dir: &Path, log: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("jpackage-stub");
    let script = format!(
        r#"#!/bin/sh
printf '%s\n' "$*" >> "{log}"
dest=""; name=""; kind=""
while [ $# -gt 0 ]; do
  case "$1" in
    --dest) dest="$2"; shift ;;
    --name) name="$2"; shift ;;
    --type) kind="$2"; shift ;;
  esac
  shift
done
if [ "$kind" = "app-image" ] && [ -n "$dest" ]; then
  mkdir -p "$dest/$name/bin"
  printf 'launcher' > "$dest/$name/bin/launcher"
fi
"#,
        log = log.display()
    );
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[cfg(unix)]
fn settings_with_stub(
    dir: &Path,
    version: &str,
    request: PackageRequest,
    platform: Option<Platform>,
    arch: Arch,
    stub: PathBuf,
) -> Settings {
    Settings::new(
        "Product".to_string(),
        version.to_string(),
        "product.jar".to_string(),
        dir.join("libs"),
        dir.join("jpackage"),
        dir.join("dist"),
        request,
        platform,
        arch,
        Some(stub),
        Vec::new(),
    )
}

#[cfg(unix)]
#[tokio::test]
async fn windows_installer_flow_builds_image_then_msi_and_zips_it() {
    let tmp = tempfile::tempdir().unwrap();
    let log = tmp.path().join("calls.log");
    let stub = write_stub_jpackage(tmp.path(), &log);
    let settings = settings_with_stub(
        tmp.path(),
        "1.2.3",
        PackageRequest::Installer,
        Some(Platform::Windows),
        Arch::X64,
        stub,
    );

    let report = distpack::packager::run_pipeline(&settings).await.unwrap();

    let calls = fs::read_to_string(&log).unwrap();
    let lines: Vec<&str> = calls.lines().collect();
    assert_eq!(lines.len(), 2, "expected image pass then msi pass: {calls}");
    assert!(lines[0].contains("--type app-image"));
    assert!(lines[0].contains("--name Product-1.2.3"));
    assert!(lines[1].contains("--type msi"));
    assert!(lines[1].contains("--win-menu"));

    // Both passes share the argv wiring.
    for line in &lines {
        assert!(line.contains("--app-version 1.2.3"));
        assert!(line.contains("--java-options -XX:MaxRAMPercentage=50"));
        assert!(line.contains("--add-launcher Product-1.2.3 (console)="));
        assert!(line.contains(".properties"));
    }

    // The image built by the first pass is zipped for portable installs.
    let zip_path = settings.output_dir().join("Product-1.2.3.zip");
    assert!(zip_path.is_file());
    assert!(report.artifacts.iter().any(|a| a.file == "Product-1.2.3.zip"));
}

#[cfg(unix)]
#[tokio::test]
async fn macos_installer_request_runs_a_single_image_pass() {
    use distpack::packager::invoker;

    let tmp = tempfile::tempdir().unwrap();
    let log = tmp.path().join("calls.log");
    let stub = write_stub_jpackage(tmp.path(), &log);
    let settings = settings_with_stub(
        tmp.path(),
        "2.0.0-rc1",
        PackageRequest::Installer,
        Some(Platform::MacOs),
        Arch::Arm64,
        stub,
    );
    fs::create_dir_all(settings.output_dir()).unwrap();

    let params = PackagingParams::build(&settings);
    assert!(params.skip_installer);
    invoker::run_jpackage(&settings, &params).await.unwrap();

    let calls = fs::read_to_string(&log).unwrap();
    let lines: Vec<&str> = calls.lines().collect();
    assert_eq!(lines.len(), 1, "skip-installer must suppress installer passes");
    assert!(lines[0].contains("--type app-image"));
    assert!(lines[0].contains("--name Product-2.0.0-rc1-arm64"));
    assert!(lines[0].contains("--app-version 2.0.0"));
}

#[cfg(unix)]
#[tokio::test]
async fn linux_all_request_runs_one_pass_per_installer_kind() {
    use distpack::packager::invoker;

    let tmp = tempfile::tempdir().unwrap();
    let log = tmp.path().join("calls.log");
    let stub = write_stub_jpackage(tmp.path(), &log);
    let settings = settings_with_stub(
        tmp.path(),
        "1.0.0",
        PackageRequest::All,
        Some(Platform::Linux),
        Arch::X64,
        stub,
    );
    fs::create_dir_all(settings.output_dir()).unwrap();

    let params = PackagingParams::build(&settings);
    invoker::run_jpackage(&settings, &params).await.unwrap();

    let calls = fs::read_to_string(&log).unwrap();
    let lines: Vec<&str> = calls.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("--type app-image"));
    assert!(lines[1].contains("--type deb"));
    assert!(lines[2].contains("--type rpm"));
}

#[tokio::test]
async fn corrector_renames_bundle_with_arm64_suffix() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("Product-1.2.3.app"), b"bundle").unwrap();

    let renames = naming::correct_names(tmp.path(), "Product", "1.2.3", Arch::Arm64)
        .await
        .unwrap();

    assert_eq!(renames.len(), 1);
    assert!(tmp.path().join("Product-1.2.3-arm64.app").exists());
    assert!(!tmp.path().join("Product-1.2.3.app").exists());
}

#[tokio::test]
async fn corrector_renames_bundle_with_x64_suffix() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("Product-1.2.3.app"), b"bundle").unwrap();

    naming::correct_names(tmp.path(), "Product", "1.2.3", Arch::X64)
        .await
        .unwrap();

    assert!(tmp.path().join("Product-1.2.3-x64.app").exists());
}

#[tokio::test]
async fn corrector_leaves_installer_extensions_unqualified() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("Product-1.2.3.msi"), b"installer").unwrap();

    let renames = naming::correct_names(tmp.path(), "Product", "1.2.3", Arch::Arm64)
        .await
        .unwrap();

    assert!(renames.is_empty());
    assert!(tmp.path().join("Product-1.2.3.msi").exists());
}

#[tokio::test]
async fn corrector_is_idempotent() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("Product-1.2.3.app"), b"bundle").unwrap();
    fs::write(tmp.path().join("Product-0.9.msi"), b"installer").unwrap();

    let first = naming::correct_names(tmp.path(), "Product", "1.2.3", Arch::X64)
        .await
        .unwrap();
    let second = naming::correct_names(tmp.path(), "Product", "1.2.3", Arch::X64)
        .await
        .unwrap();

    assert!(!first.is_empty());
    assert!(second.is_empty());
}

#[tokio::test]
async fn windows_installer_request_zips_the_image_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let settings = settings_in(
        tmp.path(),
        "1.2.3",
        PackageRequest::Installer,
        Some(Platform::Windows),
        Arch::X64,
    );

    let image_dir = settings.output_dir().join("Product-1.2.3");
    fs::create_dir_all(image_dir.join("bin")).unwrap();
    fs::write(image_dir.join("bin/Product.exe"), b"launcher").unwrap();
    fs::write(image_dir.join("release"), b"notes").unwrap();

    let params = PackagingParams::build(&settings);
    let outputs = finalize::finalize(&settings, &params).await.unwrap();

    let zip_path = settings.output_dir().join("Product-1.2.3.zip");
    assert!(zip_path.is_file());
    assert_eq!(outputs, vec![zip_path.clone()]);

    // Entries are relative to the image directory.
    let archive = zip::ZipArchive::new(fs::File::open(&zip_path).unwrap()).unwrap();
    let names: Vec<&str> = archive.file_names().collect();
    assert!(names.contains(&"bin/Product.exe"));
    assert!(names.contains(&"release"));
}

#[tokio::test]
async fn windows_image_request_does_not_zip() {
    let tmp = tempfile::tempdir().unwrap();
    let settings = settings_in(
        tmp.path(),
        "1.2.3",
        PackageRequest::Image,
        Some(Platform::Windows),
        Arch::X64,
    );

    let image_dir = settings.output_dir().join("Product-1.2.3");
    fs::create_dir_all(&image_dir).unwrap();
    fs::write(image_dir.join("release"), b"notes").unwrap();

    let params = PackagingParams::build(&settings);
    let outputs = finalize::finalize(&settings, &params).await.unwrap();

    assert!(!settings.output_dir().join("Product-1.2.3.zip").exists());
    assert!(outputs.is_empty());
}

#[tokio::test]
async fn output_set_excludes_sidecars_foreign_files_and_directories() {
    let tmp = tempfile::tempdir().unwrap();
    let settings = settings_in(tmp.path(), "1.2.3", PackageRequest::Image, None, Arch::X64);

    let dist = settings.output_dir();
    fs::create_dir_all(dist.join("Product-1.2.3")).unwrap();
    fs::write(dist.join("Product-1.2.3.msi"), b"installer").unwrap();
    fs::write(dist.join("Product-1.2.3.msi.sha512"), b"old sidecar").unwrap();
    fs::write(dist.join("Product-1.2.3.dmg.sha256"), b"old sidecar").unwrap();
    fs::write(dist.join("manifest.json"), b"{}").unwrap();
    fs::write(dist.join("notes.txt"), b"unrelated").unwrap();

    let params = PackagingParams::build(&settings);
    let outputs = finalize::finalize(&settings, &params).await.unwrap();

    assert_eq!(outputs, vec![dist.join("Product-1.2.3.msi")]);
}

#[tokio::test]
async fn checksum_sidecar_is_deterministic_across_runs() {
    let tmp = tempfile::tempdir().unwrap();
    let artifact = tmp.path().join("Product-1.2.3.msi");
    fs::write(&artifact, b"fixed contents").unwrap();

    let first = checksum::write_checksum(&artifact).await.unwrap();
    let sidecar = tmp.path().join("Product-1.2.3.msi.sha512");
    let first_body = fs::read_to_string(&sidecar).unwrap();

    let second = checksum::write_checksum(&artifact).await.unwrap();
    let second_body = fs::read_to_string(&sidecar).unwrap();

    assert_eq!(first.sha512, second.sha512);
    assert_eq!(first_body, second_body);
    assert_eq!(first_body, format!("{}  Product-1.2.3.msi\n", first.sha512));
    // SHA-512 hex digest length.
    assert_eq!(first.sha512.len(), 128);
}

#[test]
fn association_count_matches_properties_files() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("associations");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("tiff.properties"), b"extension=tiff").unwrap();
    fs::write(dir.join("svs.properties"), b"extension=svs").unwrap();
    fs::write(dir.join("README.md"), b"not an association").unwrap();

    let found = associations::scan(&dir);
    assert_eq!(found.len(), 2);

    let absent: Vec<PathBuf> = associations::scan(&tmp.path().join("missing"));
    assert!(absent.is_empty());
}

#[test]
fn macos_association_files_land_on_installer_options() {
    let tmp = tempfile::tempdir().unwrap();
    let assoc_dir = tmp.path().join("jpackage/associations");
    fs::create_dir_all(&assoc_dir).unwrap();
    fs::write(assoc_dir.join("tiff.properties"), b"extension=tiff").unwrap();

    let settings = settings_in(
        tmp.path(),
        "1.2.3",
        PackageRequest::Image,
        Some(Platform::MacOs),
        Arch::Arm64,
    );
    let params = PackagingParams::build(&settings);

    let count = params
        .installer_options
        .iter()
        .filter(|o| *o == "--file-associations")
        .count();
    assert_eq!(count, 1);
}

#[test]
fn missing_icon_is_not_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    let settings = settings_in(
        tmp.path(),
        "1.2.3",
        PackageRequest::Image,
        Some(Platform::Linux),
        Arch::X64,
    );
    let params = PackagingParams::build(&settings);
    assert!(!params.image_options.contains(&"--icon".to_string()));
}

#[test]
fn present_icon_is_added_to_image_options() {
    let tmp = tempfile::tempdir().unwrap();
    let resource_dir = tmp.path().join("jpackage/linux");
    fs::create_dir_all(&resource_dir).unwrap();
    fs::write(resource_dir.join("Product.png"), b"png").unwrap();

    let settings = settings_in(
        tmp.path(),
        "1.2.3",
        PackageRequest::Image,
        Some(Platform::Linux),
        Arch::X64,
    );
    let params = PackagingParams::build(&settings);

    let idx = params
        .image_options
        .iter()
        .position(|o| o == "--icon")
        .expect("icon option present");
    assert!(params.image_options[idx + 1].ends_with("Product.png"));
    assert_eq!(params.resource_dir, Some(resource_dir));
}
