//! CPU architecture detection for artifact naming.

/// Processor architecture of the produced image.
///
/// Only used to qualify bundle and package artifact names so that the x64
/// and ARM builds of the same version can coexist on one machine.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    /// x86_64 / AMD64
    X64,
    /// AArch64 / ARM64 (Apple Silicon, Windows-on-ARM)
    Arm64,
}

impl Arch {
    /// Detects the host architecture.
    ///
    /// Anything that is not 64-bit ARM is treated as x64, matching the
    /// two-way naming scheme of the deliverables.
    pub fn detect() -> Self {
        if std::env::consts::ARCH == "aarch64" {
            Self::Arm64
        } else {
            Self::X64
        }
    }

    /// Parses an architecture token (for the `--arch` override).
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "x64" | "x86_64" | "amd64" => Some(Self::X64),
            "arm64" | "aarch64" => Some(Self::Arm64),
            _ => None,
        }
    }

    /// Filename suffix appended to arch-qualified artifacts.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::X64 => "-x64",
            Self::Arm64 => "-arm64",
        }
    }
}
