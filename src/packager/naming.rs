//! Output name correction.
//!
//! jpackage is not consistent about the names it gives bundles and
//! installers (notably on macOS, where a substituted version leaks into the
//! filename). This module computes the canonical
//! `<Product>-<version>[-arch].<ext>` name for every recognized artifact and
//! renames anything that deviates. Re-running over an already-correct set of
//! files performs no renames.

use crate::error::Result;
use crate::packager::settings::Arch;
use std::path::{Path, PathBuf};

/// Artifact extensions subject to name correction.
pub const ARTIFACT_EXTENSIONS: &[&str] = &["app", "dmg", "pkg", "exe", "msi", "deb", "rpm"];

/// Extensions whose artifacts get an architecture qualifier.
///
/// Only the bundle and the installer package need to distinguish x64 from
/// ARM builds side by side; disk images and installers for other platforms
/// keep the plain name.
const ARCH_QUALIFIED_EXTENSIONS: &[&str] = &["app", "pkg"];

/// Canonical base name, arch-qualified when `ext` calls for it.
///
/// An existing `-arm64`/`-x64` qualifier is never doubled up.
pub fn canonical_base(product: &str, version: &str, arch: Arch, ext: &str) -> String {
    let mut base = format!("{product}-{version}");
    if ARCH_QUALIFIED_EXTENSIONS.contains(&ext)
        && !base.contains("-arm64")
        && !base.contains("-x64")
    {
        base.push_str(arch.suffix());
    }
    base
}

/// Canonical filename including the extension.
pub fn canonical_name(product: &str, version: &str, arch: Arch, ext: &str) -> String {
    format!("{}.{ext}", canonical_base(product, version, arch, ext))
}

/// Renames every recognized artifact in `dir` to its canonical name.
///
/// Scans direct children only; artifacts are renamed in place (same parent
/// directory). Returns the renames that were performed, `(from, to)`.
pub async fn correct_names(
    dir: &Path,
    product: &str,
    version: &str,
    arch: Arch,
) -> Result<Vec<(PathBuf, PathBuf)>> {
    let mut renames = Vec::new();
    if !dir.is_dir() {
        return Ok(renames);
    }

    let mut entries = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        for ext in ARTIFACT_EXTENSIONS {
            if !file_name.ends_with(&format!(".{ext}")) {
                continue;
            }
            let correct = canonical_name(product, version, arch, ext);
            if file_name != correct {
                let target = dir.join(&correct);
                log::info!("Renaming {} -> {}", file_name, correct);
                tokio::fs::rename(&path, &target).await?;
                renames.push((path.clone(), target));
            }
            break;
        }
    }

    Ok(renames)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_and_package_get_arch_qualifier() {
        assert_eq!(
            canonical_name("Product", "1.2.3", Arch::Arm64, "app"),
            "Product-1.2.3-arm64.app"
        );
        assert_eq!(
            canonical_name("Product", "1.2.3", Arch::X64, "pkg"),
            "Product-1.2.3-x64.pkg"
        );
    }

    #[test]
    fn installers_keep_plain_name() {
        assert_eq!(
            canonical_name("Product", "1.2.3", Arch::Arm64, "msi"),
            "Product-1.2.3.msi"
        );
        assert_eq!(
            canonical_name("Product", "1.2.3", Arch::X64, "dmg"),
            "Product-1.2.3.dmg"
        );
    }

    #[test]
    fn existing_qualifier_is_not_doubled() {
        assert_eq!(
            canonical_name("Product", "1.2.3-x64", Arch::Arm64, "app"),
            "Product-1.2.3-x64.app"
        );
    }
}
