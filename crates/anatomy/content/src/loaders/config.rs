//! Anatomy configuration loader.

use std::path::Path;

use anatomy_core::AnatomyConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for workflow configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`AnatomyConfig::default`].
    pub fn load(path: &Path) -> LoadResult<AnatomyConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<AnatomyConfig> {
        let config: AnatomyConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
