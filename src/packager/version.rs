//! Version string normalization for the packaging tool.
//!
//! jpackage rejects pre-release decorations, so the effective version used
//! for packaging has any `-SNAPSHOT` / `-rc*` tail removed. On macOS it
//! additionally rejects a major version of 0, for which a fixed sentinel is
//! substituted by the parameter builder.

/// Pre-release markers stripped from version strings.
pub const VERSION_SUFFIX_MARKERS: &[&str] = &["-SNAPSHOT", "-rc"];

/// Sentinel used on macOS when the stripped version still starts with `0`.
pub const MACOS_FALLBACK_VERSION: &str = "1";

/// Strips pre-release suffixes from a version string.
///
/// Each marker is truncated from its first occurrence onward, unless that
/// occurrence is at position 0 (a version that *is* only a suffix is left
/// alone). Idempotent: stripping twice equals stripping once.
pub fn strip_version_suffix(version: &str) -> String {
    let mut result = version.to_string();
    for marker in VERSION_SUFFIX_MARKERS {
        if let Some(idx) = result.find(marker) {
            if idx > 0 {
                result.truncate(idx);
            }
        }
    }
    result
}
