//! Command line argument parsing and validation.

use crate::error::{PackageError, Result};
use crate::packager::settings::{Arch, PackageRequest, Platform, Settings};
use clap::Parser;
use std::path::PathBuf;

/// jpackage pipeline with normalized artifact names and checksums
#[derive(Parser, Debug)]
#[command(
    name = "distpack",
    version,
    about = "Builds platform-native app images and installers via jpackage",
    long_about = "Drives the JDK jpackage tool to build a platform-native application image
and/or installers, renames the artifacts to a canonical
<Product>-<version>[-arch].<ext> scheme, performs platform follow-up
(macOS pkg second pass, Windows portable-image zip), and writes a SHA-512
sidecar for every deliverable.

Usage:
  distpack --name Atlas --app-version 0.6.0-SNAPSHOT --main-jar atlas.jar --input build/libs
  distpack --name Atlas --app-version 0.6.0 --main-jar atlas.jar --input build/libs --package installer"
)]
pub struct Args {
    /// Product name; prefix of every deliverable
    #[arg(short = 'n', long, value_name = "NAME")]
    pub name: String,

    /// Version string; pre-release suffixes (-SNAPSHOT, -rc*) are stripped
    /// from the packaged version but kept in artifact names
    #[arg(long, value_name = "VERSION")]
    pub app_version: String,

    /// Main application jar, relative to the input directory
    #[arg(long, value_name = "JAR")]
    pub main_jar: String,

    /// Directory holding the application jars/modules
    #[arg(short = 'i', long, value_name = "DIR")]
    pub input: PathBuf,

    /// Package kind: image, app-image, all, installer, or a literal
    /// jpackage type (dmg, pkg, msi, deb, rpm, ...)
    #[arg(short = 'p', long, env = "DISTPACK_PACKAGE", value_name = "KIND")]
    pub package: Option<String>,

    /// Output directory for images, installers and checksums
    #[arg(short = 'd', long, default_value = "build/dist", value_name = "DIR")]
    pub dest: PathBuf,

    /// Packaging resources root (<root>/<platform> for icons and resource
    /// overrides, <root>/associations for file associations)
    #[arg(long, default_value = "jpackage", value_name = "DIR")]
    pub resources: PathBuf,

    /// Override platform detection: windows, macos, linux
    #[arg(long, value_name = "PLATFORM")]
    pub platform: Option<String>,

    /// Override architecture detection: x64, arm64
    #[arg(long, value_name = "ARCH")]
    pub arch: Option<String>,

    /// Explicit path to the jpackage executable
    #[arg(long, value_name = "PATH")]
    pub jpackage: Option<PathBuf>,

    /// Extra JVM argument for the launchers (repeatable)
    #[arg(long = "jvm-arg", value_name = "ARG")]
    pub jvm_args: Vec<String>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(PackageError::InvalidArguments {
                reason: "product name cannot be empty".to_string(),
            });
        }
        if self.app_version.is_empty() {
            return Err(PackageError::InvalidArguments {
                reason: "version cannot be empty".to_string(),
            });
        }
        if let Some(token) = &self.platform {
            if Platform::parse(token).is_none() {
                return Err(PackageError::InvalidArguments {
                    reason: format!("unrecognized platform override: {token}"),
                });
            }
        }
        if let Some(token) = &self.arch {
            if Arch::parse(token).is_none() {
                return Err(PackageError::InvalidArguments {
                    reason: format!("unrecognized arch override: {token}"),
                });
            }
        }
        Ok(())
    }

    /// Resolves the arguments into pipeline settings.
    ///
    /// Platform and architecture are detected here, once; every stage
    /// receives them through the settings value.
    pub fn into_settings(self) -> Settings {
        let platform = match &self.platform {
            Some(token) => Platform::parse(token),
            None => Platform::detect(),
        };
        let arch = self
            .arch
            .as_deref()
            .and_then(Arch::parse)
            .unwrap_or_else(Arch::detect);
        let request = PackageRequest::parse(self.package.as_deref());

        Settings::new(
            self.name,
            self.app_version,
            self.main_jar,
            self.input,
            self.resources,
            self.dest,
            request,
            platform,
            arch,
            self.jpackage,
            self.jvm_args,
        )
    }
}
