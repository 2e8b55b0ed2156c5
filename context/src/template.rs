use crate::ContextError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::fs;
use std::path::Path;

/// Template identifier as the backend stores it. Ids compare by JSON type and
/// value, so `7` and `"7"` name different templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TemplateId {
    Number(u64),
    Text(String),
    Other(Value),
}

impl Default for TemplateId {
    fn default() -> Self {
        TemplateId::Number(0)
    }
}

impl From<u64> for TemplateId {
    fn from(id: u64) -> Self {
        TemplateId::Number(id)
    }
}

impl From<&str> for TemplateId {
    fn from(id: &str) -> Self {
        TemplateId::Text(id.to_string())
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateId::Number(id) => write!(f, "{id}"),
            TemplateId::Text(id) => write!(f, "{id:?}"),
            TemplateId::Other(id) => write!(f, "{id}"),
        }
    }
}

/// A map preset that can be attached to a context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: TemplateId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Value>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub selected: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Reference to a template stored in a context's `data.templates`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateRef {
    pub id: TemplateId,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TemplateRef {
    pub fn new(id: TemplateId) -> Self {
        Self {
            id,
            extra: Map::new(),
        }
    }
}

impl Template {
    pub fn new(id: TemplateId, name: &str) -> Self {
        Self {
            id,
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    /// `{thumbnail}` when the template has a thumbnail, nothing otherwise.
    pub fn thumbnail_attributes(&self) -> Option<Value> {
        self.thumbnail
            .as_ref()
            .map(|thumbnail| serde_json::json!({ "thumbnail": thumbnail }))
    }
}

pub fn load_templates_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Template>, ContextError> {
    let data = fs::read(path)?;
    let templates = serde_json::from_slice(&data)?;
    Ok(templates)
}
