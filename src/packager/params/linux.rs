//! Linux-specific parameter configuration.

use super::ParamsDraft;
use crate::packager::settings::Settings;

/// Applies the Linux customizations to the draft parameters.
///
/// jpackage on Linux has the same invalid launcher `.cfg` defect as macOS
/// when the image name carries a version, so the image keeps the bare
/// product name.
pub(super) fn configure(draft: &mut ParamsDraft, settings: &Settings) {
    draft.image_name = settings.product_name().to_string();
}
