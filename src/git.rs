use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Where branch information comes from. Every call names the repository
/// explicitly; nothing depends on the process working directory.
pub trait BranchSource {
    /// Raw short name of the checked-out branch (`HEAD` when detached).
    fn current_branch(&self, repo: &Path) -> Result<String>;

    /// Raw short names of all local branches, one per entry.
    fn local_branches(&self, repo: &Path) -> Result<Vec<String>>;
}

/// Shells out to the `git` binary on `PATH`.
#[derive(Debug, Clone, Default)]
pub struct GitCli;

impl GitCli {
    fn run(&self, repo: &Path, args: &[&str]) -> Result<String> {
        log::debug!("$ git -C {} {}", repo.display(), args.join(" "));

        let output = Command::new("git")
            .arg("-C")
            .arg(repo)
            .args(args)
            .output()
            .context("Failed to execute git")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow::anyhow!(
                "git {} failed: {}",
                args.join(" "),
                stderr.trim()
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

impl BranchSource for GitCli {
    fn current_branch(&self, repo: &Path) -> Result<String> {
        self.run(repo, &["rev-parse", "--abbrev-ref", "HEAD"])
    }

    fn local_branches(&self, repo: &Path) -> Result<Vec<String>> {
        let stdout = self.run(repo, &["branch", "--format=%(refname:short)"])?;
        Ok(parse_branch_lines(&stdout))
    }
}

fn parse_branch_lines(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.to_string())
        .collect()
}
