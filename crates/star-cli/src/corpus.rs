//! Corpus traversal.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use walkdir::WalkDir;

/// Collect every file under `root` whose extension is in `extensions`.
///
/// Paths are sorted by file name at each level so mining order, and
/// therefore tie-breaking between equally frequent verbs, is stable.
pub fn collect_corpus(root: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        bail!("Corpus directory not found: {}", root.display());
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        match entry {
            Ok(entry) if entry.file_type().is_file() && has_extension(entry.path(), extensions) => {
                paths.push(entry.into_path());
            }
            Ok(_) => {}
            Err(e) => tracing::warn!(error = %e, "Skipping unreadable corpus entry"),
        }
    }

    Ok(paths)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted.eq_ignore_ascii_case(ext)))
}
