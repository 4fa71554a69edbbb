//! Packaging parameter assembly.
//!
//! Builds the full set of jpackage parameters for one pipeline run: a draft
//! is populated with defaults, the installer-type list is resolved from the
//! requested package kind, exactly one platform-specific transformation is
//! applied, and the result is frozen into an immutable [`PackagingParams`]
//! that the invoker consumes once.

mod linux;
mod macos;
mod windows;

use crate::packager::settings::{PackageRequest, Platform, Settings};
use crate::packager::version::strip_version_suffix;
use std::path::PathBuf;

/// Default JVM arguments applied to every launcher.
///
/// Cap the heap at half the available memory rather than a fixed size.
pub const DEFAULT_JVM_ARGS: &[&str] = &["-XX:MaxRAMPercentage=50"];

/// An additional named launcher registered alongside the main one.
///
/// Held in memory; the invoker materializes the properties text to a
/// temporary file only because jpackage's `--add-launcher` interface takes a
/// file path.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LauncherConfig {
    /// Launcher display name.
    pub name: String,
    /// Key-value properties body handed to jpackage.
    pub properties: String,
}

/// Frozen parameters for the packaging invocations.
///
/// Constructed once per build via [`PackagingParams::build`], read-only
/// afterwards.
#[derive(Clone, Debug)]
pub struct PackagingParams {
    /// JVM arguments for every launcher.
    pub jvm_args: Vec<String>,
    /// Name of the application image.
    pub image_name: String,
    /// Effective version handed to jpackage (suffix-stripped, macOS-safe).
    pub app_version: String,
    /// Extra options for the image pass (icon, extra launchers).
    pub image_options: Vec<String>,
    /// One entry per jpackage run; `None` means image only.
    pub installer_types: Vec<Option<String>>,
    /// When true, no installer is produced by the first pass.
    pub skip_installer: bool,
    /// Name used for installer artifacts.
    pub installer_name: String,
    /// Extra options for installer passes.
    pub installer_options: Vec<String>,
    /// Additional launchers (e.g. the Windows console launcher).
    pub extra_launchers: Vec<LauncherConfig>,
    /// Resource directory forwarded to jpackage, when present.
    pub resource_dir: Option<PathBuf>,
    /// Shared output directory for images and installers.
    pub output_dir: PathBuf,
}

/// Mutable draft used while the parameters are being assembled.
pub(crate) struct ParamsDraft {
    pub jvm_args: Vec<String>,
    pub image_name: String,
    pub app_version: String,
    pub image_options: Vec<String>,
    pub installer_types: Vec<Option<String>>,
    pub skip_installer: bool,
    pub installer_name: String,
    pub installer_options: Vec<String>,
    pub extra_launchers: Vec<LauncherConfig>,
    pub resource_dir: Option<PathBuf>,
    pub output_dir: PathBuf,
}

impl ParamsDraft {
    fn new(settings: &Settings) -> Self {
        let mut jvm_args: Vec<String> =
            DEFAULT_JVM_ARGS.iter().map(|s| (*s).to_string()).collect();
        jvm_args.extend(settings.extra_jvm_args().iter().cloned());

        Self {
            jvm_args,
            image_name: format!("{}-{}", settings.product_name(), settings.version()),
            app_version: strip_version_suffix(settings.version()),
            image_options: Vec::new(),
            installer_types: Vec::new(),
            skip_installer: false,
            installer_name: settings.product_name().to_string(),
            installer_options: Vec::new(),
            extra_launchers: Vec::new(),
            resource_dir: None,
            output_dir: settings.output_dir().to_path_buf(),
        }
    }

    /// Resolves the installer-type list from the requested package kind.
    ///
    /// Image requests, macOS (which cannot build installers directly from
    /// source), and an unrecognized platform all collapse to a single
    /// image-only pass.
    fn init_installer_types(&mut self, settings: &Settings) {
        let platform = settings.platform();
        match settings.request() {
            PackageRequest::Image => {
                self.skip_installer = true;
                self.installer_types.push(None);
            }
            _ if platform == Some(Platform::MacOs) => {
                // Installers on macOS are built by the finalizer from the
                // corrected app bundle.
                self.skip_installer = true;
                self.installer_types.push(None);
            }
            PackageRequest::All => match platform {
                Some(platform) => {
                    self.skip_installer = false;
                    for kind in platform.default_installer_kinds() {
                        self.installer_types.push(Some((*kind).to_string()));
                    }
                }
                None => {
                    // No installer kinds to resolve for an unknown OS.
                    self.skip_installer = true;
                    self.installer_types.push(None);
                }
            },
            PackageRequest::Installer => match platform {
                Some(platform) => {
                    self.skip_installer = false;
                    self.installer_types
                        .push(Some(platform.installer_extension().to_string()));
                }
                None => {
                    self.skip_installer = true;
                    self.installer_types.push(None);
                }
            },
            PackageRequest::Custom(kind) => {
                // Forwarded verbatim; jpackage does its own validation.
                self.installer_types.push(Some(kind.clone()));
            }
        }
    }

    /// Adds the platform icon to the image options when one exists.
    fn add_icon(&mut self, settings: &Settings) {
        let Some(platform) = settings.platform() else {
            return;
        };
        let Some(resource_dir) = settings.platform_resource_dir() else {
            return;
        };
        let icon = resource_dir.join(format!(
            "{}.{}",
            settings.product_name(),
            platform.icon_extension()
        ));
        if icon.is_file() {
            self.image_options.push("--icon".to_string());
            self.image_options.push(icon.display().to_string());
        } else {
            log::warn!("No icon file found at {}", icon.display());
        }
        if resource_dir.is_dir() {
            self.resource_dir = Some(resource_dir);
        }
    }

    fn freeze(self) -> PackagingParams {
        PackagingParams {
            jvm_args: self.jvm_args,
            image_name: self.image_name,
            app_version: self.app_version,
            image_options: self.image_options,
            installer_types: self.installer_types,
            skip_installer: self.skip_installer,
            installer_name: self.installer_name,
            installer_options: self.installer_options,
            extra_launchers: self.extra_launchers,
            resource_dir: self.resource_dir,
            output_dir: self.output_dir,
        }
    }
}

impl PackagingParams {
    /// Builds the frozen parameter set for this run.
    ///
    /// An unknown platform is a warning, never an error: the defaults stand
    /// and the build continues uncustomized.
    pub fn build(settings: &Settings) -> Self {
        let mut draft = ParamsDraft::new(settings);
        draft.init_installer_types(settings);
        draft.add_icon(settings);

        match settings.platform() {
            Some(Platform::Windows) => windows::configure(&mut draft, settings),
            Some(Platform::MacOs) => macos::configure(&mut draft, settings),
            Some(Platform::Linux) => linux::configure(&mut draft, settings),
            None => {
                log::warn!(
                    "Unknown platform {} - may be unable to generate a package",
                    std::env::consts::OS
                );
            }
        }

        draft.freeze()
    }
}
