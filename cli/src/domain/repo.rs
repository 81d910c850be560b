//! Repository value object and name validation: pure functions, no I/O.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::error::CommandFault;

/// Letters, digits and underscores only. Checked before a name is used as a
/// checkout directory so it can never escape the repositories dir.
pub static REPO_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Safety: this is a compile-time constant pattern and cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Za-z0-9_]+$").expect("valid regex")
});

/// A repository managed by doil, identified by its name.
///
/// Equality compares names only, so a placeholder filled with a name equals
/// the registered entry carrying the url and timestamps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Repo {
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub global: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Repo {
    /// Create a repo with only a name set.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    #[must_use]
    pub fn with_global(mut self, global: bool) -> Self {
        self.global = global;
        self
    }
}

impl PartialEq for Repo {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Repo {}

/// Validate a repository name argument.
///
/// Empty is checked before charset so `""` reports the empty-name fault.
///
/// # Errors
///
/// Returns [`CommandFault::EmptyName`] or [`CommandFault::InvalidCharacters`].
pub fn validate_repo_name(name: &str) -> Result<(), CommandFault> {
    if name.is_empty() {
        return Err(CommandFault::EmptyName);
    }
    if !REPO_NAME_RE.is_match(name) {
        return Err(CommandFault::InvalidCharacters);
    }
    Ok(())
}

/// Returns `true` if `name` is usable as a repository name.
pub fn is_valid_repo_name(name: &str) -> bool {
    validate_repo_name(name).is_ok()
}
