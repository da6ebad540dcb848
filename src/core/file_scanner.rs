use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use walkdir::WalkDir;

/// Collect the files under `root` whose file name matches `pattern`.
///
/// Entries are visited sorted by file name, so the same tree always yields the
/// same order. An unreadable directory aborts the scan.
pub fn scan_files(root: &Path, pattern: &Pattern) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        bail!("Source directory not found: {}", root.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("Cannot access path under {}", root.display()))?;
        let path = entry.path();
        let matches = entry
            .file_name()
            .to_str()
            .is_some_and(|name| pattern.matches(name));

        if matches && path.is_file() {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
