//! Infrastructure implementation of the `ConfigStore` port, plus the doil
//! home directory lookup.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::application::ports::ConfigStore;
use crate::domain::config::DoilConfig;

/// Resolve the doil home directory: `DOIL_HOME`, else `~/.doil`.
///
/// # Errors
///
/// Returns an error if `DOIL_HOME` is unset and the home directory cannot be
/// determined.
pub fn doil_home() -> Result<PathBuf> {
    if let Ok(val) = std::env::var("DOIL_HOME") {
        return Ok(PathBuf::from(val));
    }
    let home =
        dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
    Ok(home.join(".doil"))
}

/// Production implementation of `ConfigStore` that uses a YAML file on disk.
pub struct YamlConfigStore;

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<DoilConfig> {
        let path = self.path()?;
        if !path.exists() {
            return Ok(DoilConfig::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let config: DoilConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("cannot parse {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("invalid configuration in {}", path.display()))?;
        Ok(config)
    }

    fn path(&self) -> Result<PathBuf> {
        if let Ok(val) = std::env::var("DOIL_CONFIG") {
            return Ok(PathBuf::from(val));
        }
        Ok(doil_home()?.join("config.yaml"))
    }
}
