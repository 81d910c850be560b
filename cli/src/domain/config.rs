//! Domain types and validators for doil configuration.
//!
//! Pure functions only: no I/O, no filesystem access.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `<doil home>/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DoilConfig {
    /// Where repository checkouts live.
    pub repositories: RepositoriesConfig,
    /// How git is invoked.
    pub git: GitConfig,
}

/// Repository checkout settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RepositoriesConfig {
    /// Checkout directory. Defaults to `<doil home>/repositories`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Git invocation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitConfig {
    /// Git executable, `git` unless overridden.
    #[serde(default = "default_git_program")]
    pub program: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            program: default_git_program(),
        }
    }
}

fn default_git_program() -> String {
    "git".to_string()
}

impl DoilConfig {
    /// Resolve the checkout directory against the doil home directory.
    #[must_use]
    pub fn repositories_dir(&self, doil_home: &Path) -> PathBuf {
        match &self.repositories.path {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => doil_home.join(path),
            None => doil_home.join("repositories"),
        }
    }

    /// Check values that serde cannot reject on its own.
    ///
    /// # Errors
    ///
    /// Returns an error if `git.program` is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.git.program.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "git.program",
                value: self.git.program.clone(),
            });
        }
        Ok(())
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
