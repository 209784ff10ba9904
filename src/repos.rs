use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Immediate child directories of `base_dir`, in the order the filesystem
/// returns them. Entries that cannot be inspected are skipped.
pub fn list_subdirectories(base_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(base_dir)
        .with_context(|| format!("Failed to read directory: {}", base_dir.display()))?;

    let mut dirs = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        // file_type() does not follow symlinks; is_dir() on the path does
        if let Ok(file_type) = entry.file_type() {
            if file_type.is_dir() || (file_type.is_symlink() && path.is_dir()) {
                dirs.push(path);
            }
        }
    }

    Ok(dirs)
}

pub fn is_git_repository(dir: &Path) -> bool {
    let git_dir = dir.join(".git");
    git_dir.exists() && git_dir.is_dir()
}

/// Folder name used as the key in the result table.
pub fn repo_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| dir.display().to_string())
}
