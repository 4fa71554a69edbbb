//! Core Settings struct for a single pipeline run.

use super::{Arch, PackageRequest, Platform};
use std::path::{Path, PathBuf};

/// Immutable configuration for one pipeline invocation.
///
/// Constructed once from the CLI arguments, read by every stage. The
/// platform and architecture are resolved here, at process start, and never
/// re-detected.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Product name; prefix of every deliverable.
    product_name: String,

    /// Raw version string, possibly carrying a pre-release suffix.
    version: String,

    /// Main application jar filename, relative to the input directory.
    main_jar: String,

    /// Directory holding the application jars/modules.
    input_dir: PathBuf,

    /// Root of the packaging resources (`<root>/<platform>`, `<root>/associations`).
    resources_root: PathBuf,

    /// Shared output directory for images, installers and checksums.
    output_dir: PathBuf,

    /// Requested package kind.
    request: PackageRequest,

    /// Detected (or overridden) platform; `None` when unrecognized.
    platform: Option<Platform>,

    /// Detected (or overridden) processor architecture.
    arch: Arch,

    /// Explicit path to the jpackage executable, if any.
    jpackage_path: Option<PathBuf>,

    /// Extra JVM arguments appended after the defaults.
    extra_jvm_args: Vec<String>,
}

impl Settings {
    /// Creates a new settings value (used by the CLI layer).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        product_name: String,
        version: String,
        main_jar: String,
        input_dir: PathBuf,
        resources_root: PathBuf,
        output_dir: PathBuf,
        request: PackageRequest,
        platform: Option<Platform>,
        arch: Arch,
        jpackage_path: Option<PathBuf>,
        extra_jvm_args: Vec<String>,
    ) -> Self {
        Self {
            product_name,
            version,
            main_jar,
            input_dir,
            resources_root,
            output_dir,
            request,
            platform,
            arch,
            jpackage_path,
            extra_jvm_args,
        }
    }

    /// Returns the product name.
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Returns the raw version string, suffix and all.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the main jar filename.
    pub fn main_jar(&self) -> &str {
        &self.main_jar
    }

    /// Returns the jar/module input directory.
    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    /// Returns the packaging resources root.
    pub fn resources_root(&self) -> &Path {
        &self.resources_root
    }

    /// Returns the shared output directory for all deliverables.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Returns the requested package kind.
    pub fn request(&self) -> &PackageRequest {
        &self.request
    }

    /// Returns the target platform, if recognized.
    pub fn platform(&self) -> Option<Platform> {
        self.platform
    }

    /// Returns the target architecture.
    pub fn arch(&self) -> Arch {
        self.arch
    }

    /// Returns the explicit jpackage path override, if any.
    pub fn jpackage_path(&self) -> Option<&Path> {
        self.jpackage_path.as_deref()
    }

    /// Returns extra JVM arguments from the command line.
    pub fn extra_jvm_args(&self) -> &[String] {
        &self.extra_jvm_args
    }

    /// Per-platform resource directory (`<root>/<platform>`), if the
    /// platform is known.
    pub fn platform_resource_dir(&self) -> Option<PathBuf> {
        self.platform
            .map(|p| self.resources_root.join(p.resource_dir_name()))
    }

    /// Directory scanned for file-association property files.
    pub fn associations_dir(&self) -> PathBuf {
        self.resources_root.join("associations")
    }
}
