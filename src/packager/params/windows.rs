//! Windows-specific parameter configuration.

use super::{LauncherConfig, ParamsDraft};
use crate::packager::settings::Settings;
use crate::packager::version::strip_version_suffix;

/// Applies the Windows customizations to the draft parameters.
///
/// - msi installers get the standard menu/shortcut/per-user options and a
///   program group named after the product.
/// - The version suffix is stripped (msi versions cannot carry `-SNAPSHOT`).
/// - A second launcher with a console window is registered; it forwards the
///   same JVM arguments and is the easiest way to see stack traces from a
///   misbehaving install.
pub(super) fn configure(draft: &mut ParamsDraft, settings: &Settings) {
    if draft
        .installer_types
        .iter()
        .any(|t| t.as_deref() == Some("msi"))
    {
        for opt in [
            "--win-menu",
            "--win-dir-chooser",
            "--win-shortcut",
            "--win-per-user-install",
            "--win-menu-group",
        ] {
            draft.installer_options.push(opt.to_string());
        }
        draft
            .installer_options
            .push(settings.product_name().to_string());
    }

    draft.app_version = strip_version_suffix(&draft.app_version);

    let console_launcher = LauncherConfig {
        name: format!("{} (console)", draft.image_name),
        properties: format!(
            "win-console=true\njava-options={}\n",
            draft.jvm_args.join(" ")
        ),
    };
    draft.extra_launchers.push(console_launcher);
}
