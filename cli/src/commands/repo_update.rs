//! `doil repo:update <name>`: fetch the latest state of a registered repo.

use anyhow::Result;
use clap::Args;
use std::process::ExitCode;

use crate::application::ports::{RepoManager, Writer};
use crate::commands::{REPO_LIST_HINT, required_name, with_progress};

/// Arguments for `repo:update`.
#[derive(Args, Debug, Default)]
pub struct UpdateArgs {
    /// Name of the repository to update
    pub name: Option<String>,
}

/// Run `doil repo:update`.
///
/// Exit code 1 when the repository is not registered.
///
/// # Errors
///
/// Returns a `CommandFault` when the name is missing or invalid, before the
/// manager is consulted, and propagates manager and writer failures.
pub fn run(
    args: &UpdateArgs,
    manager: &impl RepoManager,
    writer: &impl Writer,
) -> Result<ExitCode> {
    let name = required_name(args.name.as_deref())?;
    let repo = manager.get_empty_repo().with_name(name);

    if !manager.repo_exists(&repo)? {
        writer.error(&format!("Repository {name} does not exists!"), REPO_LIST_HINT)?;
        return Ok(ExitCode::FAILURE);
    }

    with_progress(writer, &format!("Update repository {name}"), || {
        manager.update_repo(&repo)
    })?;

    Ok(ExitCode::SUCCESS)
}
