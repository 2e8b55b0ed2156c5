use crate::plugin::PluginNode;
use context::Template;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Editing state of the context creator. Every field is optional so the
/// cleared state serializes to `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_viewer_loaded: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_reload_confirm: Option<bool>,
    /// Metadata of the context being edited, without its `data` block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<PluginNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_context: Option<NewContext>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_enabled_plugins: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_valid_context_name: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_name_checked: Option<bool>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub filter_text: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parsed_template: Option<ParsedTemplate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_drop_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_template: Option<Template>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_plugin: Option<String>,
    /// Configuration text of the edited plugin, as shown in the editor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_cfg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_status: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parsed_cfg: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cfg_error: Option<Value>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub show_dialog: BTreeMap<String, bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loading: Option<bool>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub load_flags: BTreeMap<String, bool>,
}

/// The context under construction: its templates plus free-form attributes
/// carried over from the resource's `data` or set by `CHANGE_ATTRIBUTE`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewContext {
    #[serde(default)]
    pub templates: Vec<Template>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedTemplate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default)]
    pub data: Value,
}

impl CreatorState {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn plugins(&self) -> &[PluginNode] {
        self.plugins.as_deref().unwrap_or(&[])
    }

    pub fn templates(&self) -> &[Template] {
        self.new_context
            .as_ref()
            .map(|context| context.templates.as_slice())
            .unwrap_or(&[])
    }

    pub fn dialog_visible(&self, dialog_name: &str) -> bool {
        self.show_dialog.get(dialog_name).copied().unwrap_or(false)
    }

    pub fn load_flag(&self, name: &str) -> bool {
        self.load_flags.get(name).copied().unwrap_or(false)
    }
}
