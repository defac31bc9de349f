//! The interactive command loop.

use anyhow::{Context, Result, anyhow, bail};
use log::debug;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use crate::application::{Session, UpdateOutcome};
use crate::installer::InstallMode;
use crate::runtime::{Runtime, confirm_with_io};

use super::create::prompt_package;

pub const PROMPT: &str = "winpkg> ";

const HELP: &str = "\
Commands:
  install <name> [version] [-python|-nuget|-github]  Install a package
  uninstall <name> [-python|-nuget]                   Uninstall a package
  list                                               List installed packages
  search <text>                                      Search the catalog by name
  update <name>                                      Update to the catalog's version
  use <command> [args...]                            Run a command
  publish <file>                                     Add a descriptor file to the catalog
  create                                             Author a new package
  help                                               Show this help
  exit                                               Leave the shell";

/// One parsed shell command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Install {
        name: String,
        version: Option<String>,
        mode: InstallMode,
    },
    Uninstall {
        name: String,
        mode: InstallMode,
    },
    List,
    Search {
        query: String,
    },
    Update {
        name: String,
    },
    Use {
        program: String,
        args: Vec<String>,
    },
    Publish {
        file: PathBuf,
    },
    Create,
    Help,
    Exit,
}

impl FromStr for ShellCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, rest)) = words.split_first() else {
            bail!("Empty command.");
        };

        let required = |message: &str| {
            rest.first()
                .map(|s| s.to_string())
                .ok_or_else(|| anyhow!("{}", message))
        };

        match command {
            "install" => {
                let name = required("Please provide a package name.")?;
                // The third word is a flag when it starts with '-', otherwise a version
                let (version, flag) = match rest.get(1) {
                    Some(word) if word.starts_with('-') => (None, Some(*word)),
                    Some(word) => (
                        Some(word.to_string()),
                        rest.get(2).filter(|w| w.starts_with('-')).copied(),
                    ),
                    None => (None, None),
                };
                Ok(ShellCommand::Install {
                    name,
                    version,
                    mode: flag.map(InstallMode::from_flag).unwrap_or_default(),
                })
            }
            "uninstall" => {
                let name = required("Please provide a package name.")?;
                let mode = rest
                    .get(1)
                    .map(|flag| InstallMode::from_flag(flag))
                    .unwrap_or_default();
                Ok(ShellCommand::Uninstall { name, mode })
            }
            "list" => Ok(ShellCommand::List),
            "search" => Ok(ShellCommand::Search {
                query: required("Please provide a package name to search.")?,
            }),
            "update" => Ok(ShellCommand::Update {
                name: required("Please provide a package name to update.")?,
            }),
            "use" => Ok(ShellCommand::Use {
                program: required("Please provide a command to use.")?,
                args: rest.iter().skip(1).map(|s| s.to_string()).collect(),
            }),
            "publish" => Ok(ShellCommand::Publish {
                file: PathBuf::from(required("Please provide a winpkg.infoi file.")?),
            }),
            "create" => Ok(ShellCommand::Create),
            "help" => Ok(ShellCommand::Help),
            "exit" | "quit" => Ok(ShellCommand::Exit),
            _ => bail!("Unknown command."),
        }
    }
}

/// Reads commands line by line and runs them against a [`Session`].
pub struct Shell<'a, R: Runtime> {
    session: Session<'a, R>,
    descriptor_path: PathBuf,
}

impl<'a, R: Runtime> Shell<'a, R> {
    pub fn new(session: Session<'a, R>, descriptor_path: PathBuf) -> Self {
        Self {
            session,
            descriptor_path,
        }
    }

    pub fn session(&self) -> &Session<'a, R> {
        &self.session
    }

    /// Offer to author a first package when the catalog is empty.
    pub fn offer_create<B: BufRead, W: Write>(&mut self, input: &mut B, output: &mut W) -> Result<()> {
        if !self.session.catalog().is_empty() {
            return Ok(());
        }
        if confirm_with_io(
            "No packages found. Would you like to create a new package?",
            input,
            output,
        )? {
            if let Err(e) = self.create(input, output) {
                writeln!(output, "Error: {:#}", e)?;
            }
        }
        Ok(())
    }

    /// Run until `exit` or end of input.
    ///
    /// Command failures are reported and the loop continues; only a failure
    /// of the input or output stream ends it with an error.
    pub fn run<B: BufRead, W: Write>(&mut self, input: &mut B, output: &mut W) -> Result<()> {
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line).context("Failed to read input")? == 0 {
                writeln!(output)?;
                return Ok(());
            }

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let command = match line.parse::<ShellCommand>() {
                Ok(command) => command,
                Err(e) => {
                    writeln!(output, "{}", e)?;
                    continue;
                }
            };
            debug!("Running {:?}", command);

            if command == ShellCommand::Exit {
                return Ok(());
            }
            if let Err(e) = self.execute(command, input, output) {
                writeln!(output, "Error: {:#}", e)?;
            }
        }
    }

    fn execute<B: BufRead, W: Write>(
        &mut self,
        command: ShellCommand,
        input: &mut B,
        output: &mut W,
    ) -> Result<()> {
        match command {
            ShellCommand::Install {
                name,
                version,
                mode,
            } => {
                let package = self.session.install(&name, version.as_deref(), mode)?;
                writeln!(
                    output,
                    "Package {} version {} installed successfully.",
                    package.name, package.version
                )?;
            }
            ShellCommand::Uninstall { name, mode } => {
                self.session.uninstall(&name, mode)?;
                writeln!(output, "Package {} uninstalled successfully.", name)?;
            }
            ShellCommand::List => {
                let installed = self.session.installed();
                if installed.is_empty() {
                    writeln!(output, "No packages installed.")?;
                } else {
                    writeln!(output, "Installed Packages:")?;
                    for (name, version) in installed.iter() {
                        writeln!(output, "{} {}", name, version)?;
                    }
                }
            }
            ShellCommand::Search { query } => {
                let found = self.session.search(&query);
                if found.is_empty() {
                    writeln!(output, "No packages found for {}", query)?;
                } else {
                    writeln!(output, "Search Results:")?;
                    for package in found {
                        writeln!(output, "{}", package)?;
                    }
                }
            }
            ShellCommand::Update { name } => match self.session.update(&name)? {
                UpdateOutcome::AlreadyCurrent { .. } => {
                    writeln!(output, "Already using the latest version of {}", name)?;
                }
                UpdateOutcome::Updated { from, to } => {
                    writeln!(output, "Package {} updated from {} to {}.", name, from, to)?;
                }
            },
            ShellCommand::Use { program, args } => {
                self.session.use_command(&program, &args)?;
            }
            ShellCommand::Publish { file } => {
                let package = self.session.publish(&file)?;
                writeln!(
                    output,
                    "Published Package: {} version {}",
                    package.name, package.version
                )?;
            }
            ShellCommand::Create => self.create(input, output)?,
            ShellCommand::Help => writeln!(output, "{}", HELP)?,
            ShellCommand::Exit => {}
        }
        Ok(())
    }

    fn create<B: BufRead, W: Write>(&mut self, input: &mut B, output: &mut W) -> Result<()> {
        let Some(package) = prompt_package(input, output)? else {
            writeln!(output)?;
            writeln!(output, "Package creation cancelled.")?;
            return Ok(());
        };

        let saved = self.session.create(package, &self.descriptor_path);
        writeln!(output, "Package created successfully!")?;
        saved?;
        writeln!(
            output,
            "Package information saved to {}.",
            self.descriptor_path.display()
        )?;
        Ok(())
    }
}
