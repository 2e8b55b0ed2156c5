use crate::error::CreatorError;
use context::{find_entry, PluginEntry};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Locally configured plugins, injected into the tree builder. Entries
/// contribute their non-`cfg` fields to each node's `pluginConfig`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalPluginsConfig {
    #[serde(default)]
    pub desktop: Vec<PluginEntry>,
}

impl LocalPluginsConfig {
    pub fn entry(&self, name: &str) -> Option<&PluginEntry> {
        find_entry(&self.desktop, name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatorConfig {
    #[serde(default)]
    pub plugins: LocalPluginsConfig,
}

impl CreatorConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, CreatorError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CreatorError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
