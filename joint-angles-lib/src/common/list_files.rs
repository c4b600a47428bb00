use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Lists every file under `root`, recursively.
///
/// Entries of a directory are visited in file name order, the directory's own
/// files before its subdirectories. Symlinks to directories are not followed.
pub fn list_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut result = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let mut entries = fs::read_dir(&dir)
            .with_context(|| format!("failed to read directory {}", dir.display()))?
            .collect::<std::io::Result<Vec<_>>>()
            .with_context(|| format!("failed to read directory {}", dir.display()))?;
        entries.sort_by_key(|entry| entry.file_name());

        let mut subdirs = Vec::new();
        for entry in entries {
            let path = entry.path();
            let file_type = entry
                .file_type()
                .with_context(|| format!("failed to stat {}", path.display()))?;
            if file_type.is_dir() {
                subdirs.push(path);
            } else if file_type.is_symlink() && path.is_dir() {
                continue;
            } else {
                result.push(path);
            }
        }

        // stack: push in reverse so the first subdirectory is walked first
        pending.extend(subdirs.into_iter().rev());
    }

    Ok(result)
}
