//! Target platform detection and per-platform packaging tokens.

use std::fmt;

/// Operating system the pipeline is packaging for.
///
/// Detected once at process start and threaded explicitly through every
/// stage; it is never re-detected mid-pipeline. All conditional behavior in
/// the parameter builder, name corrector, and finalizer dispatches on this
/// value.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Microsoft Windows
    Windows,
    /// Apple macOS
    MacOs,
    /// Linux distributions
    Linux,
}

impl Platform {
    /// Detects the current platform from the host OS.
    ///
    /// Returns `None` on an OS jpackage has no installer story for; the
    /// parameter builder treats that as a warning, not an error.
    pub fn detect() -> Option<Self> {
        match std::env::consts::OS {
            "windows" => Some(Self::Windows),
            "macos" => Some(Self::MacOs),
            "linux" => Some(Self::Linux),
            _ => None,
        }
    }

    /// Parses a platform token (for the `--platform` override).
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "windows" | "win" => Some(Self::Windows),
            "macos" | "mac" | "osx" => Some(Self::MacOs),
            "linux" => Some(Self::Linux),
            _ => None,
        }
    }

    /// Native installer extension for an `installer` request.
    pub fn installer_extension(self) -> &'static str {
        match self {
            Self::Windows => "msi",
            Self::MacOs => "pkg",
            Self::Linux => "deb",
        }
    }

    /// Every installer kind an `all` request expands to on this platform.
    pub fn default_installer_kinds(self) -> &'static [&'static str] {
        match self {
            Self::Windows => &["msi", "exe"],
            Self::MacOs => &["dmg", "pkg"],
            Self::Linux => &["deb", "rpm"],
        }
    }

    /// Icon file extension expected under the platform resource directory.
    pub fn icon_extension(self) -> &'static str {
        match self {
            Self::Windows => "ico",
            Self::MacOs => "icns",
            Self::Linux => "png",
        }
    }

    /// Name of the per-platform subdirectory under the resources root.
    pub fn resource_dir_name(self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::MacOs => "macos",
            Self::Linux => "linux",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resource_dir_name())
    }
}
