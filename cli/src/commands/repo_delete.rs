//! `doil repo:delete <name>`: remove a repository checkout and registration.

use anyhow::Result;
use clap::Args;
use std::process::ExitCode;

use crate::application::ports::{Prompt, RepoManager, Writer};
use crate::commands::{REPO_LIST_HINT, required_name, with_progress};

/// Arguments for `repo:delete`.
#[derive(Args, Debug, Default)]
pub struct DeleteArgs {
    /// Name of the repository to delete
    pub name: Option<String>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Run `doil repo:delete`.
///
/// # Errors
///
/// Returns a `CommandFault` when the name is missing or invalid, and
/// propagates prompt, manager and writer failures.
pub fn run(
    args: &DeleteArgs,
    manager: &impl RepoManager,
    writer: &impl Writer,
    prompt: &impl Prompt,
) -> Result<ExitCode> {
    let name = required_name(args.name.as_deref())?;
    let repo = manager.get_empty_repo().with_name(name);

    if !manager.repo_exists(&repo)? {
        writer.error(&format!("Repository {name} does not exists!"), REPO_LIST_HINT)?;
        return Ok(ExitCode::FAILURE);
    }

    let question = format!("Delete repository {name} and its checkout?");
    if !args.yes && !prompt.confirm(&question, false)? {
        writer.line("Aborted.")?;
        return Ok(ExitCode::SUCCESS);
    }

    with_progress(writer, &format!("Delete repository {name}"), || {
        manager.delete_repo(&repo)
    })?;

    Ok(ExitCode::SUCCESS)
}
