//! Command implementations

pub mod repo_add;
pub mod repo_delete;
pub mod repo_list;
pub mod repo_update;

use anyhow::Result;

use crate::application::ports::Writer;
use crate::domain::error::CommandFault;
use crate::domain::repo::validate_repo_name;

/// Hint printed after repository-not-found and already-exists errors.
pub const REPO_LIST_HINT: &str = "Use doil repo:list to see current installed repos.";

/// Require the `name` argument and check it is a valid repository name.
///
/// # Errors
///
/// Returns the matching `CommandFault` for a missing, empty or invalid name.
pub fn required_name(name: Option<&str>) -> Result<&str, CommandFault> {
    let name = name.ok_or(CommandFault::MissingArgument("name"))?;
    validate_repo_name(name)?;
    Ok(name)
}

/// Require the `url` argument and check it is not blank.
///
/// # Errors
///
/// Returns [`CommandFault::MissingArgument`] or [`CommandFault::EmptyUrl`].
pub fn required_url(url: Option<&str>) -> Result<&str, CommandFault> {
    let url = url.ok_or(CommandFault::MissingArgument("url"))?;
    if url.trim().is_empty() {
        return Err(CommandFault::EmptyUrl);
    }
    Ok(url)
}

/// Run `op` inside a progress line, closing the line on failure as well.
fn with_progress(
    writer: &impl Writer,
    message: &str,
    op: impl FnOnce() -> Result<()>,
) -> Result<()> {
    writer.begin_output(message)?;
    if let Err(err) = op() {
        writer.fail_output()?;
        return Err(err);
    }
    writer.end_output()
}
