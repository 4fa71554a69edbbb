//! macOS-specific parameter configuration.

use super::ParamsDraft;
use crate::packager::associations;
use crate::packager::naming::{canonical_base, canonical_name};
use crate::packager::settings::Settings;
use crate::packager::version::{MACOS_FALLBACK_VERSION, strip_version_suffix};

/// Applies the macOS customizations to the draft parameters.
///
/// The package identifier carries the version so multiple versions can be
/// installed side by side. The image and installer names go through the
/// canonical naming rule up front, because jpackage writes an invalid launcher
/// `.cfg` when the image name differs from what it later derives from the
/// version.
pub(super) fn configure(draft: &mut ParamsDraft, settings: &Settings) {
    draft.installer_options.push("--mac-package-name".to_string());
    draft
        .installer_options
        .push(settings.product_name().to_string());
    draft
        .installer_options
        .push("--mac-package-identifier".to_string());
    draft.installer_options.push(format!(
        "{}-{}",
        settings.product_name(),
        settings.version()
    ));

    // File associations are only wired up on macOS.
    for path in associations::scan(&settings.associations_dir()) {
        draft
            .installer_options
            .push("--file-associations".to_string());
        draft.installer_options.push(path.display().to_string());
    }

    draft.app_version = strip_version_suffix(&draft.app_version);

    draft.image_name = canonical_base(
        settings.product_name(),
        settings.version(),
        settings.arch(),
        "app",
    );
    draft.installer_name = canonical_name(
        settings.product_name(),
        settings.version(),
        settings.arch(),
        "pkg",
    );

    // jpackage rejects a CFBundleVersion with a major version of 0.
    if draft.app_version.starts_with('0') {
        draft.app_version = MACOS_FALLBACK_VERSION.to_string();
    }
}
