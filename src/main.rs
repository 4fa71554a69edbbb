//! distpack - jpackage pipeline with normalized artifact names and checksums.
//!
//! This binary builds a platform-native application image and/or installers
//! via jpackage, corrects the tool's inconsistent output naming, and writes
//! checksum sidecars for every deliverable.

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match distpack::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
