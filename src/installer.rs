//! External installer commands.
//!
//! The registry never installs anything itself; it derives one command line
//! per install or uninstall and hands it to [`Runtime::run`](crate::runtime::Runtime::run).

use log::warn;

use crate::error::PackageError;
use crate::package::Package;

/// Which external tool performs an install or uninstall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InstallMode {
    /// The descriptor's own install command; `msiexec` for removal.
    #[default]
    Default,
    Python,
    Nuget,
    Github,
}

impl InstallMode {
    /// Map a shell flag (`-python`, `-nuget`, `-github`) to a mode.
    ///
    /// Anything else selects the default mode.
    pub fn from_flag(flag: &str) -> Self {
        match flag {
            "-python" => InstallMode::Python,
            "-nuget" => InstallMode::Nuget,
            "-github" => InstallMode::Github,
            "" => InstallMode::Default,
            other => {
                warn!("Unknown install flag {:?}, using the default installer", other);
                InstallMode::Default
            }
        }
    }
}

/// A program and its arguments, ready to be executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl std::fmt::Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut words = Vec::with_capacity(self.args.len() + 1);
        words.push(self.program.as_str());
        words.extend(self.args.iter().map(String::as_str));
        write!(f, "{}", shell_words::join(words))
    }
}

/// Command that installs `package` in `mode`.
pub fn install_invocation(package: &Package, mode: InstallMode) -> Result<Invocation, PackageError> {
    let failed = |reason: String| PackageError::Installation {
        name: package.name.clone(),
        reason,
    };

    match mode {
        InstallMode::Python => Ok(Invocation::new("pip", ["install", package.name.as_str()])),
        InstallMode::Nuget => Ok(Invocation::new("nuget", ["install", package.name.as_str()])),
        InstallMode::Github => {
            if package.installation.is_empty() {
                return Err(failed("no installation URL to clone".to_string()));
            }
            Ok(Invocation::new("git", ["clone", package.installation.as_str()]))
        }
        InstallMode::Default => {
            let mut words = shell_words::split(&package.install)
                .map_err(|e| failed(format!("invalid install command {:?}: {}", package.install, e)))?
                .into_iter();
            let program = words
                .next()
                .ok_or_else(|| failed("no install command".to_string()))?;
            Ok(Invocation::new(program, words))
        }
    }
}

/// Command that removes the package called `name` in `mode`.
pub fn uninstall_invocation(name: &str, mode: InstallMode) -> Invocation {
    match mode {
        InstallMode::Python => Invocation::new("pip", ["uninstall", "-y", name]),
        InstallMode::Nuget => Invocation::new("nuget", ["uninstall", name]),
        InstallMode::Default | InstallMode::Github => {
            Invocation::new("msiexec", ["/x", name, "/quiet"])
        }
    }
}
