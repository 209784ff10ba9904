use crate::collect::{Mode, Results, collect_all};
use crate::filter::BranchFilter;
use crate::git::BranchSource;
use crate::render::render;
use crate::repos::list_subdirectories;
use anyhow::{Context, Result};
use std::io;
use std::path::PathBuf;
use termcolor::WriteColor;

pub struct Config {
    pub base_dir: PathBuf,
    pub mode: Mode,
    pub filter: BranchFilter,
}

/// Scans the children of `config.base_dir` and returns what was found.
pub fn scan<S: BranchSource>(source: &S, config: &Config) -> Result<Results> {
    let dirs = list_subdirectories(&config.base_dir)?;
    log::debug!(
        "Found {} directories in {}",
        dirs.len(),
        config.base_dir.display()
    );
    Ok(collect_all(source, &dirs, config.mode, &config.filter))
}

pub fn execute<S: BranchSource>(
    source: &S,
    config: &Config,
    out: &mut impl WriteColor,
) -> Result<()> {
    let results = scan(source, config)?;

    match render(out, &results, config.mode, &config.filter) {
        // Reader went away (e.g. piped into `head`); nothing left to report
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            log::debug!("Output closed early: {}", e);
            Ok(())
        }
        result => result.context("Failed to write output"),
    }
}
