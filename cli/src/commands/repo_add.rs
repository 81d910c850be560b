//! `doil repo:add <name> <url>`: register and clone a repository.

use anyhow::Result;
use clap::Args;
use std::process::ExitCode;

use crate::application::ports::{RepoManager, Writer};
use crate::commands::{REPO_LIST_HINT, required_name, required_url, with_progress};

/// Arguments for `repo:add`.
#[derive(Args, Debug, Default)]
pub struct AddArgs {
    /// Name of the repository
    pub name: Option<String>,

    /// Git url of the repository
    pub url: Option<String>,

    /// Register the repository for all users
    #[arg(short, long)]
    pub global: bool,
}

/// Run `doil repo:add`.
///
/// # Errors
///
/// Returns a `CommandFault` when name or url are missing or invalid, and
/// propagates clone and registry failures.
pub fn run(args: &AddArgs, manager: &impl RepoManager, writer: &impl Writer) -> Result<ExitCode> {
    let name = required_name(args.name.as_deref())?;
    let url = required_url(args.url.as_deref())?;

    let repo = manager
        .get_empty_repo()
        .with_name(name)
        .with_url(url)
        .with_global(args.global);

    if manager.repo_exists(&repo)? {
        writer.error(&format!("Repository {name} already exists!"), REPO_LIST_HINT)?;
        return Ok(ExitCode::FAILURE);
    }

    with_progress(writer, &format!("Add repository {name}"), || {
        manager.add_repo(&repo)
    })?;

    Ok(ExitCode::SUCCESS)
}
