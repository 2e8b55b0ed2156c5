use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

pub mod template;
pub use template::{load_templates_from_file, Template, TemplateId, TemplateRef};

/// A persisted context: free-form metadata (`id`, `name`, `description`, ...)
/// plus the `data` block holding plugins, user plugins and template references.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ContextData>,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextData {
    #[serde(default)]
    pub plugins: ContextPlugins,
    #[serde(default, rename = "userPlugins")]
    pub user_plugins: Vec<PluginEntry>,
    #[serde(default)]
    pub templates: Vec<TemplateRef>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextPlugins {
    #[serde(default)]
    pub desktop: Vec<PluginEntry>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// A plugin reference as stored in a context or in the local plugin
/// configuration: either a bare name or an object carrying `cfg`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PluginEntry {
    Name(String),
    Configured(ConfiguredPlugin),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfiguredPlugin {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cfg: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PluginEntry {
    pub fn name(&self) -> &str {
        match self {
            PluginEntry::Name(name) => name,
            PluginEntry::Configured(plugin) => &plugin.name,
        }
    }

    pub fn cfg(&self) -> Option<&Value> {
        match self {
            PluginEntry::Name(_) => None,
            PluginEntry::Configured(plugin) => plugin.cfg.as_ref(),
        }
    }

    pub fn active(&self) -> bool {
        match self {
            PluginEntry::Name(_) => false,
            PluginEntry::Configured(plugin) => plugin.active.unwrap_or(false),
        }
    }

    /// Every field of the entry except `cfg`, as a JSON object.
    pub fn fields_without_cfg(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("name".to_string(), Value::String(self.name().to_string()));
        if let PluginEntry::Configured(plugin) = self {
            if let Some(active) = plugin.active {
                fields.insert("active".to_string(), Value::Bool(active));
            }
            for (key, value) in &plugin.extra {
                fields.insert(key.clone(), value.clone());
            }
        }
        fields
    }
}

/// First entry with the given name; later duplicates are ignored.
pub fn find_entry<'a>(entries: &'a [PluginEntry], name: &str) -> Option<&'a PluginEntry> {
    entries.iter().find(|entry| entry.name() == name)
}

#[derive(thiserror::Error, Debug)]
pub enum ContextError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ContextResource {
    pub fn name(&self) -> Option<&str> {
        self.metadata.get("name").and_then(Value::as_str)
    }

    /// Splits the resource into its `data` block (empty when absent) and the
    /// remaining metadata.
    pub fn into_parts(self) -> (ContextData, Map<String, Value>) {
        (self.data.unwrap_or_default(), self.metadata)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ContextError> {
        let data = serde_json::to_vec_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ContextError> {
        let data = fs::read(path)?;
        let resource = serde_json::from_slice(&data)?;
        Ok(resource)
    }
}
