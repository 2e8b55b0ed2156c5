use crate::error::CreatorError;
use crate::path;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Registry entry describing a plugin that can be composed into a context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glyph: Option<String>,
    #[serde(default)]
    pub mandatory: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_config: Option<Value>,
    #[serde(default)]
    pub auto_enable_children: Vec<String>,
    #[serde(default)]
    pub children: Vec<String>,
}

/// The plugin registry as delivered by the configuration provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginsConfig {
    #[serde(default)]
    pub plugins: Option<Vec<PluginDescriptor>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PluginsConfig {
    pub fn new(plugins: Vec<PluginDescriptor>) -> Self {
        Self {
            plugins: Some(plugins),
            extra: Map::new(),
        }
    }

    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, CreatorError> {
        let data = std::fs::read(path)?;
        Ok(serde_json::from_slice(&data)?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cfg: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glyph: Option<String>,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub mandatory: bool,
    /// Set while an enabled plugin depends on this one.
    #[serde(default)]
    pub forced_mandatory: bool,
    #[serde(default)]
    pub enabled_dependent_plugins: Vec<String>,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub is_user_plugin: bool,
    #[serde(default)]
    pub plugin_config: PluginConfig,
    #[serde(default)]
    pub auto_enable_children: Vec<String>,
    #[serde(default)]
    pub children: Vec<PluginNode>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PluginNode {
    pub fn new(name: &str, parent: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            parent: parent.map(str::to_string),
            plugin_config: PluginConfig {
                name: name.to_string(),
                ..PluginConfig::default()
            },
            ..Self::default()
        }
    }

    /// Sets the field at the dotted `path` on this node only; the children
    /// are left untouched. On error the node keeps its previous value.
    pub fn set_key(&mut self, path: &str, value: Value) -> Result<(), CreatorError> {
        let children = std::mem::take(&mut self.children);
        let result = path::updated(&*self, path, value);
        match result {
            Ok(mut node) => {
                node.children = children;
                *self = node;
                Ok(())
            }
            Err(err) => {
                self.children = children;
                Err(err)
            }
        }
    }

    pub fn cannot_be_disabled(&self) -> bool {
        self.mandatory || self.forced_mandatory
    }
}
