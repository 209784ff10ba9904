use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

pub mod collect;
pub mod commands;
pub mod filter;
pub mod git;
pub mod render;
pub mod repos;

/// Resolves the directory whose children are scanned. Without an explicit
/// directory this is the folder holding the running executable.
pub fn get_base_dir(provided_dir: Option<PathBuf>) -> Result<PathBuf> {
    match provided_dir {
        Some(dir) => Ok(dir),
        None => {
            let exe = env::current_exe().context("Failed to locate the running executable")?;
            exe.parent().map(|p| p.to_path_buf()).ok_or_else(|| {
                anyhow::anyhow!("Executable has no parent directory: {}", exe.display())
            })
        }
    }
}
