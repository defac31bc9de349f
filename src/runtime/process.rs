//! External process execution.

use anyhow::{Context, Result, bail};
use log::debug;
use std::process::Command;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn run_impl(&self, program: &str, args: &[String]) -> Result<()> {
        let output = Command::new(program)
            .args(args)
            .output()
            .with_context(|| format!("Failed to execute {}", program))?;

        if !output.stdout.is_empty() {
            debug!("{} stdout: {}", program, String::from_utf8_lossy(&output.stdout).trim_end());
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            if stderr.is_empty() {
                bail!("{} exited with {}", program, output.status);
            }
            bail!("{} exited with {}: {}", program, output.status, stderr);
        }

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn run_interactive_impl(&self, program: &str, args: &[String]) -> Result<()> {
        let status = Command::new(program)
            .args(args)
            .status()
            .with_context(|| format!("Failed to execute {}", program))?;

        if !status.success() {
            bail!("{} exited with {}", program, status);
        }
        Ok(())
    }
}
