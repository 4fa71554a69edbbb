//! Cross-platform packaging pipeline for jpackage-based distributions.
//!
//! This library drives the JDK `jpackage` tool to produce a platform-native
//! application image and/or installers, then normalizes the output:
//! - artifact names are rewritten to `<Product>-<version>[-arch].<ext>`
//! - platform quirks are patched up (macOS pkg second pass, Windows image zip)
//! - every deliverable gets a SHA-512 checksum sidecar and a JSON manifest entry
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod packager;

// Re-export commonly used types
pub use error::{PackageError, Result};
pub use packager::{PipelineReport, Settings, run_pipeline};
