//! Command line interface for the packaging pipeline.

mod args;

pub use args::Args;

use crate::error::Result;
use crate::packager;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    args.validate()?;

    let settings = args.into_settings();
    log::info!(
        "Packaging {} {} for {} ({:?})",
        settings.product_name(),
        settings.version(),
        settings
            .platform()
            .map(|p| p.to_string())
            .unwrap_or_else(|| std::env::consts::OS.to_string()),
        settings.arch(),
    );

    let report = packager::run_pipeline(&settings).await?;

    for artifact in &report.artifacts {
        println!("{}  {} ({} bytes)", artifact.sha512, artifact.file, artifact.size);
    }
    println!("Manifest: {}", report.manifest_path.display());

    Ok(0)
}
