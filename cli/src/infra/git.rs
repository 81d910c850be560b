//! Infrastructure implementation of the `GitClient` port.

use std::path::Path;
use std::process::Output;

use anyhow::Result;

use crate::application::ports::{CommandRunner, GitClient};
use crate::domain::error::RepoError;

/// Runs the git binary through a `CommandRunner`.
pub struct GitCli<C> {
    runner: C,
    program: String,
}

impl<C: CommandRunner> GitCli<C> {
    #[must_use]
    pub fn new(runner: C, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }

    fn check(command: &'static str, path: &Path, output: &Output) -> Result<()> {
        if output.status.success() {
            return Ok(());
        }
        Err(RepoError::Git {
            command,
            path: path.display().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
        .into())
    }
}

impl<C: CommandRunner> GitClient for GitCli<C> {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()> {
        let dest_arg = dest.to_string_lossy();
        let output = self
            .runner
            .run(&self.program, &["clone", "--quiet", url, &dest_arg])?;
        Self::check("clone", dest, &output)
    }

    fn fetch(&self, checkout: &Path) -> Result<()> {
        let checkout_arg = checkout.to_string_lossy();
        let output = self.runner.run(
            &self.program,
            &["-C", &checkout_arg, "fetch", "--quiet", "--prune", "origin"],
        )?;
        Self::check("fetch", checkout, &output)
    }
}
