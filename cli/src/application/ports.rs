//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};
use std::process::Output;

use anyhow::Result;

use crate::domain::{DoilConfig, Repo};

// ── Repository Manager Port ──────────────────────────────────────────────────

/// Owns existence checks and mutations of managed repositories.
///
/// Command handlers depend only on this trait; `LocalRepoManager` is the
/// production implementation and tests substitute mocks.
pub trait RepoManager {
    /// Placeholder repo that callers fill in (`Repo::with_name`).
    fn get_empty_repo(&self) -> Repo;
    /// Whether a repo with the same name is registered.
    fn repo_exists(&self, repo: &Repo) -> Result<bool>;
    /// Bring the checkout of a registered repo up to date.
    fn update_repo(&self, repo: &Repo) -> Result<()>;
    /// Clone and register a new repo.
    fn add_repo(&self, repo: &Repo) -> Result<()>;
    /// Remove the checkout and registration of a repo.
    fn delete_repo(&self, repo: &Repo) -> Result<()>;
    /// All registered repos, sorted by name.
    fn list_repos(&self) -> Result<Vec<Repo>>;
}

// ── Output Writer Port ───────────────────────────────────────────────────────

/// Renders command output. Handlers never print directly.
pub trait Writer {
    /// Start a progress line, e.g. `Update repository doil ...`.
    fn begin_output(&self, message: &str) -> Result<()>;
    /// Finish the progress line started by `begin_output`.
    fn end_output(&self) -> Result<()>;
    /// Close the progress line started by `begin_output` after a failure.
    fn fail_output(&self) -> Result<()>;
    /// Write a handled error with a follow-up hint.
    fn error(&self, error: &str, hint: &str) -> Result<()>;
    /// Write one line of command result output.
    fn line(&self, text: &str) -> Result<()>;
}

// ── Prompt Port ──────────────────────────────────────────────────────────────

/// Asks the user a yes/no question.
pub trait Prompt {
    /// Returns `default` without asking when running non-interactively.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

// ── Storage Ports ────────────────────────────────────────────────────────────

/// Persists the list of registered repos.
pub trait RepoRegistry {
    /// Load all registered repos; an absent registry is empty.
    fn load(&self) -> Result<Vec<Repo>>;
    /// Replace the registry contents.
    fn save(&self, repos: &[Repo]) -> Result<()>;
}

/// Abstracts configuration loading.
pub trait ConfigStore {
    /// Load configuration, falling back to defaults when no file exists.
    fn load(&self) -> Result<DoilConfig>;
    /// Path of the configuration file.
    fn path(&self) -> Result<PathBuf>;
}

// ── Git Port ─────────────────────────────────────────────────────────────────

/// The git operations the repository manager delegates to.
pub trait GitClient {
    /// Clone `url` into `dest`.
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()>;
    /// Fetch and prune remote refs of the checkout at `checkout`.
    fn fetch(&self, checkout: &Path) -> Result<()>;
}

/// Abstracts process execution so infrastructure can be swapped or mocked.
pub trait CommandRunner {
    /// Run a program to completion and capture its output.
    fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
}

// ── Filesystem Port ──────────────────────────────────────────────────────────

/// Abstracts the checkout-directory operations of the repository manager.
pub trait LocalFs {
    fn exists(&self, path: &Path) -> bool;
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    fn remove_dir_all(&self, path: &Path) -> Result<()>;
}
