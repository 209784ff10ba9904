use anyhow::Result;
use clap::Parser;
use git_branches::collect::Mode;
use git_branches::commands::branches::{self, Config};
use git_branches::filter::BranchFilter;
use git_branches::get_base_dir;
use git_branches::git::GitCli;
use std::io::IsTerminal;
use std::path::PathBuf;
use termcolor::{ColorChoice, StandardStream};

#[derive(Parser)]
#[command(name = "git-branches")]
#[command(about = "Show the branches of every git repository in a folder")]
#[command(version)]
#[command(after_help = "Examples:
  git branches
  git branches --all
  git branches --branch-search feat
  git branches -a -b fix -d ~/repositories")]
struct Cli {
    /// List every local branch instead of only the current one
    #[arg(short, long)]
    all: bool,

    /// Only show branches containing this text (case-insensitive)
    #[arg(short, long, default_value = "")]
    branch_search: String,

    /// Folder whose subdirectories are scanned (defaults to the executable's folder)
    #[arg(short, long)]
    dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    let config = Config {
        base_dir: get_base_dir(cli.dir)?,
        mode: if cli.all { Mode::All } else { Mode::Current },
        filter: BranchFilter::new(&cli.branch_search),
    };

    let color = if std::io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color);

    branches::execute(&GitCli, &config, &mut stdout)
}
