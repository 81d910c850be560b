//! Application service: the production repository manager.
//!
//! `LocalRepoManager` keeps the registered repos in a `RepoRegistry` and
//! delegates checkout work to a `GitClient`. Checkouts live in
//! `<repositories dir>/<name>`.

use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;

use crate::application::ports::{GitClient, LocalFs, RepoManager, RepoRegistry};
use crate::domain::error::RepoError;
use crate::domain::repo::{Repo, validate_repo_name};

/// Repository manager backed by a registry file and git checkouts.
pub struct LocalRepoManager<R, G, F> {
    registry: R,
    git: G,
    fs: F,
    repositories_dir: PathBuf,
}

impl<R, G, F> LocalRepoManager<R, G, F>
where
    R: RepoRegistry,
    G: GitClient,
    F: LocalFs,
{
    #[must_use]
    pub fn new(registry: R, git: G, fs: F, repositories_dir: PathBuf) -> Self {
        Self {
            registry,
            git,
            fs,
            repositories_dir,
        }
    }

    /// Checkout path of `repo`. The name is re-validated here because it
    /// becomes a path component.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError::InvalidName`] if the repo name is not a valid
    /// repository name.
    pub fn checkout_path(&self, repo: &Repo) -> Result<PathBuf> {
        validate_repo_name(&repo.name).map_err(|_| RepoError::InvalidName(repo.name.clone()))?;
        Ok(self.repositories_dir.join(&repo.name))
    }

    fn load_sorted(&self) -> Result<Vec<Repo>> {
        let mut repos = self.registry.load()?;
        repos.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(repos)
    }
}

impl<R, G, F> RepoManager for LocalRepoManager<R, G, F>
where
    R: RepoRegistry,
    G: GitClient,
    F: LocalFs,
{
    fn get_empty_repo(&self) -> Repo {
        Repo::default()
    }

    fn repo_exists(&self, repo: &Repo) -> Result<bool> {
        Ok(self.registry.load()?.iter().any(|r| r == repo))
    }

    fn update_repo(&self, repo: &Repo) -> Result<()> {
        let mut repos = self.load_sorted()?;
        let entry = repos
            .iter_mut()
            .find(|r| r.name == repo.name)
            .ok_or_else(|| RepoError::NotFound(repo.name.clone()))?;

        let checkout = self.checkout_path(entry)?;
        if self.fs.exists(&checkout) {
            self.git.fetch(&checkout)?;
        } else {
            // Checkout was removed by hand; restore it from the registered url.
            tracing::debug!(
                repo = %entry.name,
                path = %checkout.display(),
                "checkout missing, cloning"
            );
            self.fs.create_dir_all(&self.repositories_dir)?;
            self.git.clone_repo(&entry.url, &checkout)?;
        }

        entry.updated_at = Some(Utc::now());
        self.registry.save(&repos)?;
        tracing::info!(repo = %repo.name, "repository updated");
        Ok(())
    }

    fn add_repo(&self, repo: &Repo) -> Result<()> {
        let mut repos = self.load_sorted()?;
        if repos.contains(repo) {
            return Err(RepoError::AlreadyExists(repo.name.clone()).into());
        }

        let checkout = self.checkout_path(repo)?;
        self.fs.create_dir_all(&self.repositories_dir)?;
        self.git.clone_repo(&repo.url, &checkout)?;

        let mut entry = repo.clone();
        entry.updated_at = Some(Utc::now());
        repos.push(entry);
        repos.sort_by(|a, b| a.name.cmp(&b.name));
        self.registry.save(&repos)?;
        tracing::info!(repo = %repo.name, url = %repo.url, "repository added");
        Ok(())
    }

    fn delete_repo(&self, repo: &Repo) -> Result<()> {
        let mut repos = self.load_sorted()?;
        let Some(index) = repos.iter().position(|r| r == repo) else {
            return Err(RepoError::NotFound(repo.name.clone()).into());
        };

        let checkout = self.checkout_path(&repos[index])?;
        if self.fs.exists(&checkout) {
            self.fs.remove_dir_all(&checkout)?;
        }

        repos.remove(index);
        self.registry.save(&repos)?;
        tracing::info!(repo = %repo.name, "repository deleted");
        Ok(())
    }

    fn list_repos(&self) -> Result<Vec<Repo>> {
        self.load_sorted()
    }
}
