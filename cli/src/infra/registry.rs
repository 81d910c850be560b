//! Infrastructure implementation of the `RepoRegistry` port.
//!
//! `YamlRepoRegistry` stores the registered repos as a YAML list and writes
//! atomically (temp file + rename) so an interrupted save never leaves a
//! truncated registry behind.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::application::ports::RepoRegistry;
use crate::domain::repo::Repo;

#[derive(Debug, Default, Serialize, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    repositories: Vec<Repo>,
}

/// Registry file manager, `<doil home>/repositories.yaml` by default.
pub struct YamlRepoRegistry {
    path: PathBuf,
}

impl YamlRepoRegistry {
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl RepoRegistry for YamlRepoRegistry {
    fn load(&self) -> Result<Vec<Repo>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading registry {}", self.path.display()))?;
        let file: RegistryFile = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing registry {}", self.path.display()))?;
        Ok(file.repositories)
    }

    fn save(&self, repos: &[Repo]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
        let file = RegistryFile {
            repositories: repos.to_vec(),
        };
        let content = serde_yaml::to_string(&file).context("serializing registry")?;

        let temp_path = self.path.with_extension("yaml.tmp");
        std::fs::write(&temp_path, &content)
            .with_context(|| format!("writing temp file {}", temp_path.display()))?;
        std::fs::rename(&temp_path, &self.path)
            .with_context(|| format!("finalizing registry {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), count = repos.len(), "registry saved");
        Ok(())
    }
}
