//! Application context: unified state passed to every command handler.
//!
//! `AppContext` owns the output context, the loaded configuration and the
//! resolved doil home, and builds the production repository manager.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::{ConfigStore, Prompt};
use crate::application::services::repo_manager::LocalRepoManager;
use crate::domain::config::DoilConfig;
use crate::infra::command_runner::StdCommandRunner;
use crate::infra::config::{YamlConfigStore, doil_home};
use crate::infra::fs::LocalFs;
use crate::infra::git::GitCli;
use crate::infra::registry::YamlRepoRegistry;
use crate::output::{CommandWriter, OutputContext};

/// Repository manager wired to the real registry file, git and filesystem.
pub type ProductionRepoManager =
    LocalRepoManager<YamlRepoRegistry, GitCli<StdCommandRunner>, LocalFs>;

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Loaded configuration.
    pub config: DoilConfig,
    /// Per-user state directory.
    pub doil_home: PathBuf,
    /// When `true`, never prompt and take the default answer.
    ///
    /// Set when the `CI` or `DOIL_NON_INTERACTIVE` environment variables are present.
    pub non_interactive: bool,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the doil home cannot be resolved or the
    /// configuration file is unreadable or invalid.
    pub fn new(flags: &OutputFlags) -> Result<Self> {
        let non_interactive =
            std::env::var("CI").is_ok() || std::env::var("DOIL_NON_INTERACTIVE").is_ok();
        let doil_home = doil_home()?;
        let config = YamlConfigStore.load().context("cannot load configuration")?;
        tracing::debug!(home = %doil_home.display(), "doil home resolved");

        Ok(Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            config,
            doil_home,
            non_interactive,
        })
    }

    /// Build the production repository manager.
    #[must_use]
    pub fn repo_manager(&self) -> ProductionRepoManager {
        LocalRepoManager::new(
            YamlRepoRegistry::with_path(self.doil_home.join("repositories.yaml")),
            GitCli::new(StdCommandRunner, self.config.git.program.clone()),
            LocalFs,
            self.config.repositories_dir(&self.doil_home),
        )
    }

    /// Writer rendering command output to stdout.
    #[must_use]
    pub fn writer(&self) -> CommandWriter<std::io::Stdout> {
        self.output.stdout_writer()
    }
}

impl Prompt for AppContext {
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        if self.non_interactive {
            return Ok(default);
        }
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .context("reading confirmation")?;
        Ok(confirmed)
    }
}
