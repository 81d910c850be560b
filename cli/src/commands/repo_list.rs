//! `doil repo:list`: show registered repositories.

use anyhow::Result;
use std::process::ExitCode;

use crate::application::ports::{RepoManager, Writer};

/// Run `doil repo:list`.
///
/// # Errors
///
/// Returns an error if the registry cannot be read or output fails.
pub fn run(manager: &impl RepoManager, writer: &impl Writer) -> Result<ExitCode> {
    let repos = manager.list_repos()?;

    if repos.is_empty() {
        writer.line("No repositories registered.")?;
        writer.line("Use doil repo:add to add one.")?;
        return Ok(ExitCode::SUCCESS);
    }

    writer.line("Currently registered repositories:")?;
    for repo in &repos {
        let scope = if repo.global { " (global)" } else { "" };
        writer.line(&format!("\t{} - {}{scope}", repo.name, repo.url))?;
    }
    Ok(ExitCode::SUCCESS)
}
