use anyhow::Result;
use log::debug;
use std::io::{self, BufRead, Write};

use crate::{
    application::{Session, StateStore, load_catalog},
    runtime::Runtime,
};

pub mod config;
mod create;
mod shell;

pub use shell::{PROMPT, Shell, ShellCommand};

use config::Config;

/// Run the interactive shell on stdin/stdout.
#[tracing::instrument(skip(runtime, config))]
pub fn shell<R: Runtime>(runtime: &R, config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    shell_with_io(runtime, config, &mut input, &mut output)
}

/// Seed the catalog, load the installed set and run the shell over the
/// given streams.
pub fn shell_with_io<R: Runtime, B: BufRead, W: Write>(
    runtime: &R,
    config: &Config,
    input: &mut B,
    output: &mut W,
) -> Result<()> {
    let catalog = load_catalog(runtime, &config.catalog_dir, &config.seed_files)?;
    let store = StateStore::new(runtime, config.state_path.clone());
    let session = Session::persistent(runtime, catalog, store)?;
    debug!(
        "Session ready: {} catalog entries, {} installed",
        session.catalog().len(),
        session.installed().len()
    );

    let mut shell = Shell::new(session, config.descriptor_path.clone());
    if config.prompt_on_empty {
        shell.offer_create(input, output)?;
    }
    shell.run(input, output)
}
