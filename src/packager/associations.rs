//! File-association discovery.
//!
//! Each `.properties` file under the associations directory describes one
//! file-type association and is handed to jpackage verbatim via
//! `--file-associations`. A missing directory or an empty one simply means
//! no associations.

use std::path::{Path, PathBuf};

/// Returns the association property files under `dir`, sorted by path.
///
/// Only regular files with a `.properties` suffix count. Never fails: an
/// unreadable or absent directory yields an empty list.
pub fn scan(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.ends_with(".properties"))
        })
        .collect();
    files.sort();
    files
}
