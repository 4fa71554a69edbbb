//! Requested package kind parsing.

/// What the invoker has been asked to produce.
///
/// Parsed from a single optional, case-insensitive token. Unrecognized
/// tokens are not rejected here; they pass through verbatim for the
/// packaging tool to validate.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PackageRequest {
    /// Build an application image only (the default; fastest).
    Image,
    /// Build every default installer kind for the platform.
    All,
    /// Build the platform's native installer.
    Installer,
    /// A literal installer kind (e.g. `dmg`, `rpm`) forwarded unchanged.
    Custom(String),
}

impl PackageRequest {
    /// Parses the optional `package` property.
    pub fn parse(token: Option<&str>) -> Self {
        let Some(token) = token else {
            return Self::Image;
        };
        match token.to_lowercase().as_str() {
            "image" | "app-image" => Self::Image,
            "all" => Self::All,
            "installer" => Self::Installer,
            other => Self::Custom(other.to_string()),
        }
    }

    /// The raw token, for logging and the build manifest.
    pub fn token(&self) -> &str {
        match self {
            Self::Image => "image",
            Self::All => "all",
            Self::Installer => "installer",
            Self::Custom(kind) => kind,
        }
    }

    /// Whether the macOS finalizer should build a `.pkg` from the app bundle.
    pub fn wants_installer_package(&self) -> bool {
        matches!(self, Self::Installer) || matches!(self, Self::Custom(kind) if kind == "pkg")
    }
}
