//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, or `std::process`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Input faults ─────────────────────────────────────────────────────────────

/// Invalid command input. Raised before any repository manager call and never
/// handled inside a command; `main` maps it to exit code 2.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandFault {
    #[error("Not enough arguments (missing: \"{0}\").")]
    MissingArgument(&'static str),

    #[error("Name of the repo cannot be empty!")]
    EmptyName,

    #[error("Invalid characters! Only letters, numbers and underscores are allowed!")]
    InvalidCharacters,

    #[error("Url of the repo cannot be empty!")]
    EmptyUrl,
}

// ── Repository errors ────────────────────────────────────────────────────────

/// Errors raised by repository manager implementations.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Repository {0} does not exists!")]
    NotFound(String),

    #[error("Repository {0} already exists!")]
    AlreadyExists(String),

    #[error("Registered repository name {0:?} is invalid")]
    InvalidName(String),

    #[error("git {command} failed in {path}: {stderr}")]
    Git {
        command: &'static str,
        path: String,
        stderr: String,
    },
}

// ── Config errors ────────────────────────────────────────────────────────────

/// Errors related to configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}
