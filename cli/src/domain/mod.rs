//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod repo;

pub use config::DoilConfig;
pub use error::{CommandFault, ConfigError, RepoError};
pub use repo::{Repo, is_valid_repo_name, validate_repo_name};
