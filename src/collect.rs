use crate::filter::BranchFilter;
use crate::git::BranchSource;
use crate::repos::{is_git_repository, repo_name};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Current,
    All,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub name: String,
    pub current: bool,
}

impl Branch {
    pub fn new(name: impl Into<String>) -> Self {
        Branch {
            name: name.into(),
            current: false,
        }
    }

    pub fn current(name: impl Into<String>) -> Self {
        Branch {
            name: name.into(),
            current: true,
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.current {
            write!(f, "{} (current)", self.name)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchResult {
    /// Ordered branches; empty means git reported nothing.
    Branches(Vec<Branch>),
    /// The filter excluded every branch. Never stored in [`Results`].
    NotFound,
    /// git could not be queried. The message is for diagnostics only.
    Error(String),
}

/// Repository folder name to its branches, iterated in name order.
pub type Results = BTreeMap<String, BranchResult>;

/// Probes and collects every directory in `dirs`. Directories without a
/// `.git` folder are skipped, as are repositories the filter excludes.
pub fn collect_all<S: BranchSource>(
    source: &S,
    dirs: &[PathBuf],
    mode: Mode,
    filter: &BranchFilter,
) -> Results {
    let mut results = Results::new();

    for dir in dirs {
        if !is_git_repository(dir) {
            log::debug!("Skipping {}: not a git repository", dir.display());
            continue;
        }

        match collect_repository(source, dir, mode, filter) {
            BranchResult::NotFound => {}
            result => {
                results.insert(repo_name(dir), result);
            }
        }
    }

    results
}

pub fn collect_repository<S: BranchSource>(
    source: &S,
    repo: &Path,
    mode: Mode,
    filter: &BranchFilter,
) -> BranchResult {
    match mode {
        Mode::Current => collect_current(source, repo, filter),
        Mode::All => collect_branches(source, repo, filter),
    }
}

fn collect_current<S: BranchSource>(
    source: &S,
    repo: &Path,
    filter: &BranchFilter,
) -> BranchResult {
    let name = match source.current_branch(repo) {
        Ok(name) => name,
        Err(e) => {
            log::warn!("Failed to get current branch in {}: {:#}", repo.display(), e);
            return BranchResult::Error(format!("{e:#}"));
        }
    };

    let name = name.trim();
    if filter.is_active() && !filter.matches(name) {
        return BranchResult::NotFound;
    }
    if name.is_empty() {
        return BranchResult::Branches(Vec::new());
    }

    BranchResult::Branches(vec![Branch::new(name)])
}

fn collect_branches<S: BranchSource>(
    source: &S,
    repo: &Path,
    filter: &BranchFilter,
) -> BranchResult {
    let listed = match source.local_branches(repo) {
        Ok(listed) => listed,
        Err(e) => {
            log::warn!("Failed to list branches in {}: {:#}", repo.display(), e);
            return BranchResult::Error(format!("{e:#}"));
        }
    };

    let names: Vec<String> = listed
        .iter()
        .map(|name| name.trim().to_string())
        .filter(|name| filter.matches(name))
        .collect();

    let current = match source.current_branch(repo) {
        Ok(current) => current,
        Err(e) => {
            log::warn!("Failed to get current branch in {}: {:#}", repo.display(), e);
            if filter.is_active() || names.is_empty() {
                return BranchResult::NotFound;
            }
            // Keep git's listing order, nothing is marked current
            return BranchResult::Branches(names.into_iter().map(Branch::new).collect());
        }
    };

    if names.is_empty() {
        return BranchResult::NotFound;
    }

    BranchResult::Branches(order_branches(names, current.trim()))
}

/// Current branch first (if present), then the rest sorted.
fn order_branches(mut names: Vec<String>, current: &str) -> Vec<Branch> {
    let has_current = names.iter().any(|name| name == current);
    if has_current {
        names.retain(|name| name != current);
    }
    names.sort();

    let mut branches = Vec::with_capacity(names.len() + 1);
    if has_current {
        branches.push(Branch::current(current));
    }
    branches.extend(names.into_iter().map(Branch::new));
    branches
}
