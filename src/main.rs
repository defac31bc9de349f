use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use winpkg::commands::config::Config;

/// winpkg - interactive package shell
///
/// Keeps a catalog of package descriptors and the set of installed packages,
/// and hands installs to the matching external tool (msiexec, pip, nuget, git).
///
/// Descriptors (`*.infoi`) in `<root>/catalog` seed the catalog at start.
/// Set RUST_LOG=debug for detailed logs.
#[derive(Parser, Debug)]
#[command(author, version = env!("WINPKG_VERSION"), about)]
struct Cli {
    /// State directory (defaults to ~/.winpkg; also via WINPKG_ROOT)
    #[arg(long = "root", short = 'r', env = "WINPKG_ROOT", value_name = "PATH")]
    root: Option<PathBuf>,

    /// Extra descriptor file to add to the catalog at start (repeatable)
    #[arg(long = "catalog", short = 'c', value_name = "FILE")]
    catalog: Vec<PathBuf>,

    /// Do not offer to create a package when the catalog is empty
    #[arg(long = "no-prompt")]
    no_prompt: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = winpkg::runtime::RealRuntime;

    let config = Config::new(&runtime, cli.root, cli.catalog, !cli.no_prompt)?;
    winpkg::commands::shell(&runtime, &config)
}
