//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, OutputFlags};
use crate::commands::{self, required_name, required_url};
use crate::domain::error::CommandFault;

/// Exit code for invalid input, shared with clap usage errors.
pub const FAULT_EXIT_CODE: u8 = 2;

/// Manage the repositories doil builds instances from
#[derive(Parser)]
#[command(
    name = "doil",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Update a repository
    #[command(name = "repo:update")]
    RepoUpdate(commands::repo_update::UpdateArgs),

    /// List registered repositories
    #[command(name = "repo:list")]
    RepoList,

    /// Add a repository
    #[command(name = "repo:add")]
    RepoAdd(commands::repo_add::AddArgs),

    /// Delete a repository
    #[command(name = "repo:delete")]
    RepoDelete(commands::repo_delete::DeleteArgs),
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns a `CommandFault` for invalid input, or any runtime error.
    pub fn run(self) -> Result<ExitCode> {
        let Cli {
            quiet,
            no_color,
            verbose: _,
            command,
        } = self;
        command.validate()?;
        let app = AppContext::new(&OutputFlags { no_color, quiet })?;
        let manager = app.repo_manager();
        let writer = app.writer();

        match command {
            Command::RepoUpdate(args) => commands::repo_update::run(&args, &manager, &writer),
            Command::RepoList => commands::repo_list::run(&manager, &writer),
            Command::RepoAdd(args) => commands::repo_add::run(&args, &manager, &writer),
            Command::RepoDelete(args) => {
                commands::repo_delete::run(&args, &manager, &writer, &app)
            }
        }
    }
}

impl Command {
    /// Check the arguments that do not need any state, before configuration
    /// is loaded.
    fn validate(&self) -> Result<(), CommandFault> {
        match self {
            Command::RepoUpdate(args) => required_name(args.name.as_deref()).map(drop),
            Command::RepoList => Ok(()),
            Command::RepoAdd(args) => {
                required_name(args.name.as_deref())?;
                required_url(args.url.as_deref()).map(drop)
            }
            Command::RepoDelete(args) => required_name(args.name.as_deref()).map(drop),
        }
    }
}

/// Map a command error to its process exit code.
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    if err.downcast_ref::<CommandFault>().is_some() {
        ExitCode::from(FAULT_EXIT_CODE)
    } else {
        ExitCode::FAILURE
    }
}
