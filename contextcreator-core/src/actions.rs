//! Action messages understood by the context creator.
//!
//! Actions serialize as JSON objects tagged by `type` (for example
//! `{"type": "CONTEXTCREATOR:SET_FILTER_TEXT", "propName": "availablePlugins", "text": "zoom"}`),
//! so logs recorded by the web client can be replayed as-is.

use crate::plugin::PluginsConfig;
use context::{ContextResource, Template, TemplateId};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const DEFAULT_LOADING_NAME: &str = "loading";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum Action {
    #[serde(rename = "CONTEXTCREATOR:SET_CREATION_STEP")]
    SetCreationStep { step_id: Option<String> },
    #[serde(rename = "CONTEXTCREATOR:MAP_VIEWER_LOAD")]
    MapViewerLoad,
    #[serde(rename = "CONTEXTCREATOR:MAP_VIEWER_LOADED")]
    MapViewerLoaded { status: Option<bool> },
    #[serde(rename = "CONTEXTCREATOR:MAP_VIEWER_RELOAD")]
    MapViewerReload,
    #[serde(rename = "CONTEXTCREATOR:SHOW_MAP_VIEWER_RELOAD_CONFIRM")]
    ShowMapViewerReloadConfirm { show: Option<bool> },
    #[serde(rename = "CONTEXTCREATOR:CLEAR_CONTEXT_CREATOR")]
    ClearContextCreator,
    #[serde(rename = "CONTEXTCREATOR:CHANGE_ATTRIBUTE")]
    ChangeAttribute {
        key: String,
        #[serde(default)]
        value: Value,
    },
    #[serde(rename = "CONTEXTCREATOR:SHOW_DIALOG")]
    ShowDialog {
        dialog_name: String,
        #[serde(default, deserialize_with = "null_as_default")]
        show: bool,
    },
    #[serde(rename = "CONTEXTCREATOR:CHANGE_TEMPLATES_KEY")]
    ChangeTemplatesKey {
        #[serde(default, deserialize_with = "null_as_default")]
        ids: Vec<TemplateId>,
        key: String,
        #[serde(default)]
        value: Value,
    },
    #[serde(rename = "CONTEXTCREATOR:SET_SELECTED_TEMPLATES")]
    SetSelectedTemplates {
        #[serde(default, deserialize_with = "null_as_default")]
        ids: Vec<TemplateId>,
    },
    #[serde(rename = "CONTEXTCREATOR:SET_PARSED_TEMPLATE")]
    SetParsedTemplate {
        file_name: Option<String>,
        #[serde(default)]
        data: Value,
    },
    #[serde(rename = "CONTEXTCREATOR:SET_FILE_DROP_STATUS")]
    SetFileDropStatus { status: Option<String> },
    #[serde(rename = "CONTEXTCREATOR:SAVE_TEMPLATE")]
    SaveTemplate {
        #[serde(default)]
        resource: Value,
    },
    #[serde(rename = "CONTEXTCREATOR:LOAD_TEMPLATE")]
    LoadTemplate { id: Option<TemplateId> },
    #[serde(rename = "CONTEXTCREATOR:UPDATE_TEMPLATE")]
    UpdateTemplate { resource: Option<Template> },
    #[serde(rename = "CONTEXTCREATOR:SET_EDITED_TEMPLATE")]
    SetEditedTemplate { id: Option<TemplateId> },
    #[serde(rename = "CONTEXTCREATOR:EDIT_TEMPLATE")]
    EditTemplate { id: Option<TemplateId> },
    #[serde(rename = "CONTEXTCREATOR:SET_FILTER_TEXT")]
    SetFilterText {
        prop_name: String,
        #[serde(default, deserialize_with = "null_as_default")]
        text: String,
    },
    #[serde(rename = "CONTEXTCREATOR:SET_SELECTED_PLUGINS")]
    SetSelectedPlugins {
        #[serde(default, deserialize_with = "null_as_default")]
        ids: Vec<String>,
    },
    #[serde(rename = "CONTEXTCREATOR:SAVE_PLUGIN_CFG")]
    SavePluginCfg,
    #[serde(rename = "CONTEXTCREATOR:EDIT_PLUGIN")]
    EditPlugin { plugin_name: String },
    #[serde(rename = "CONTEXTCREATOR:SET_EDITED_PLUGIN")]
    SetEditedPlugin { plugin_name: Option<String> },
    #[serde(rename = "CONTEXTCREATOR:SET_EDITED_CFG")]
    SetEditedCfg { plugin_name: Option<String> },
    #[serde(rename = "CONTEXTCREATOR:UPDATE_EDITED_CFG")]
    UpdateEditedCfg { cfg: Option<String> },
    #[serde(rename = "CONTEXTCREATOR:SET_PARSED_CFG")]
    SetParsedCfg { parsed_cfg: Option<Value> },
    #[serde(rename = "CONTEXTCREATOR:VALIDATE_EDITED_CFG")]
    ValidateEditedCfg,
    #[serde(rename = "CONTEXTCREATOR:SET_VALIDATION_STATUS")]
    SetValidationStatus { status: Option<bool> },
    #[serde(rename = "CONTEXTCREATOR:SET_CFG_ERROR")]
    SetCfgError { error: Option<Value> },
    #[serde(rename = "CONTEXTCREATOR:CHANGE_PLUGINS_KEY")]
    ChangePluginsKey {
        #[serde(default, deserialize_with = "null_as_default")]
        ids: Vec<String>,
        key: String,
        #[serde(default)]
        value: Value,
    },
    #[serde(rename = "CONTEXTCREATOR:ENABLE_MANDATORY_PLUGINS")]
    EnableMandatoryPlugins,
    /// `is_initial` marks the enabling that follows loading a context; it is
    /// carried for external coordination and does not change the reduction.
    #[serde(rename = "CONTEXTCREATOR:ENABLE_PLUGINS")]
    EnablePlugins {
        #[serde(default, deserialize_with = "null_as_default")]
        plugins: Vec<String>,
        #[serde(default, deserialize_with = "null_as_default")]
        is_initial: bool,
    },
    #[serde(rename = "CONTEXTCREATOR:DISABLE_PLUGINS")]
    DisablePlugins {
        #[serde(default, deserialize_with = "null_as_default")]
        plugins: Vec<String>,
    },
    #[serde(rename = "CONTEXTCREATOR:SET_RESOURCE")]
    SetResource {
        resource: Option<ContextResource>,
        plugins_config: Option<PluginsConfig>,
        #[serde(default, deserialize_with = "null_as_default")]
        all_templates: Vec<Template>,
    },
    #[serde(rename = "CONTEXTCREATOR:LOAD_CONTEXT")]
    LoadContext { id: Option<Value> },
    #[serde(rename = "CONTEXTCREATOR:START_RESOURCE_LOAD")]
    StartResourceLoad,
    #[serde(rename = "CONTEXTCREATOR:LOAD_FINISHED")]
    LoadFinished,
    #[serde(rename = "CONTEXTCREATOR:IS_VALID_CONTEXT_NAME")]
    IsValidContextName { valid: Option<bool> },
    #[serde(rename = "CONTEXTCREATOR:CONTEXT_NAME_CHECKED")]
    ContextNameChecked { checked: Option<bool> },
    #[serde(rename = "CONTEXTCREATOR:CONTEXT_LOAD_ERROR")]
    ContextLoadError { error: Option<Value> },
    #[serde(rename = "CONTEXTCREATOR:LOADING")]
    Loading {
        #[serde(default, deserialize_with = "null_as_default")]
        value: bool,
        #[serde(
            default = "default_loading_name",
            deserialize_with = "null_as_loading_name"
        )]
        name: String,
    },
    #[serde(rename = "CONTEXTCREATOR:CONTEXT_SAVED")]
    ContextSaved { id: Option<Value> },
    #[serde(rename = "CONTEXTCREATOR:SAVE_CONTEXT")]
    SaveContext { dest_location: Option<String> },
    /// Any `type` this crate does not know about.
    #[serde(other)]
    Unknown,
}

fn default_loading_name() -> String {
    DEFAULT_LOADING_NAME.to_string()
}

fn null_as_loading_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_loading_name))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

pub fn set_creation_step(step_id: &str) -> Action {
    Action::SetCreationStep {
        step_id: Some(step_id.to_string()),
    }
}

pub fn map_viewer_load() -> Action {
    Action::MapViewerLoad
}

pub fn map_viewer_loaded(status: bool) -> Action {
    Action::MapViewerLoaded {
        status: Some(status),
    }
}

pub fn map_viewer_reload() -> Action {
    Action::MapViewerReload
}

pub fn show_map_viewer_reload_confirm(show: bool) -> Action {
    Action::ShowMapViewerReloadConfirm { show: Some(show) }
}

pub fn change_attribute(key: &str, value: Value) -> Action {
    Action::ChangeAttribute {
        key: key.to_string(),
        value,
    }
}

pub fn show_dialog(dialog_name: &str, show: bool) -> Action {
    Action::ShowDialog {
        dialog_name: dialog_name.to_string(),
        show,
    }
}

/// Sets `key` to `value` on the templates with the given ids.
pub fn change_templates_key(ids: Vec<TemplateId>, key: &str, value: Value) -> Action {
    Action::ChangeTemplatesKey {
        ids,
        key: key.to_string(),
        value,
    }
}

pub fn set_selected_templates(ids: Vec<TemplateId>) -> Action {
    Action::SetSelectedTemplates { ids }
}

/// Template data read from a dropped file, waiting to be uploaded.
pub fn set_parsed_template(file_name: &str, data: Value) -> Action {
    Action::SetParsedTemplate {
        file_name: Some(file_name.to_string()),
        data,
    }
}

pub fn set_file_drop_status(status: &str) -> Action {
    Action::SetFileDropStatus {
        status: Some(status.to_string()),
    }
}

pub fn save_template(resource: Value) -> Action {
    Action::SaveTemplate { resource }
}

pub fn load_template(id: TemplateId) -> Action {
    Action::LoadTemplate { id: Some(id) }
}

pub fn update_template(resource: Template) -> Action {
    Action::UpdateTemplate {
        resource: Some(resource),
    }
}

pub fn set_edited_template(id: Option<TemplateId>) -> Action {
    Action::SetEditedTemplate { id }
}

pub fn edit_template(id: TemplateId) -> Action {
    Action::EditTemplate { id: Some(id) }
}

/// `prop_name` is one of the filter fields, e.g. `availablePlugins` or
/// `enabledPlugins`.
pub fn set_filter_text(prop_name: &str, text: &str) -> Action {
    Action::SetFilterText {
        prop_name: prop_name.to_string(),
        text: text.to_string(),
    }
}

pub fn set_selected_plugins(ids: &[&str]) -> Action {
    Action::SetSelectedPlugins { ids: names(ids) }
}

pub fn edit_plugin(plugin_name: &str) -> Action {
    Action::EditPlugin {
        plugin_name: plugin_name.to_string(),
    }
}

/// Stores the parsed configuration on the plugin being edited.
pub fn save_plugin_cfg() -> Action {
    Action::SavePluginCfg
}

pub fn set_edited_plugin(plugin_name: Option<&str>) -> Action {
    Action::SetEditedPlugin {
        plugin_name: plugin_name.map(str::to_string),
    }
}

pub fn set_edited_cfg(plugin_name: &str) -> Action {
    Action::SetEditedCfg {
        plugin_name: Some(plugin_name.to_string()),
    }
}

pub fn update_edited_cfg(cfg: &str) -> Action {
    Action::UpdateEditedCfg {
        cfg: Some(cfg.to_string()),
    }
}

pub fn set_parsed_cfg(parsed_cfg: Value) -> Action {
    Action::SetParsedCfg {
        parsed_cfg: Some(parsed_cfg),
    }
}

pub fn validate_edited_cfg() -> Action {
    Action::ValidateEditedCfg
}

pub fn set_validation_status(status: bool) -> Action {
    Action::SetValidationStatus {
        status: Some(status),
    }
}

pub fn set_cfg_error(error: Option<Value>) -> Action {
    Action::SetCfgError { error }
}

/// Sets the (dotted) `key` to `value` on the named plugins.
pub fn change_plugins_key(ids: &[&str], key: &str, value: Value) -> Action {
    Action::ChangePluginsKey {
        ids: names(ids),
        key: key.to_string(),
        value,
    }
}

pub fn enable_mandatory_plugins() -> Action {
    Action::EnableMandatoryPlugins
}

pub fn enable_plugins(plugins: &[&str], is_initial: bool) -> Action {
    Action::EnablePlugins {
        plugins: names(plugins),
        is_initial,
    }
}

pub fn disable_plugins(plugins: &[&str]) -> Action {
    Action::DisablePlugins {
        plugins: names(plugins),
    }
}

pub fn set_resource(
    resource: Option<ContextResource>,
    plugins_config: Option<PluginsConfig>,
    all_templates: Vec<Template>,
) -> Action {
    Action::SetResource {
        resource,
        plugins_config,
        all_templates,
    }
}

pub fn load_context(id: Value) -> Action {
    Action::LoadContext { id: Some(id) }
}

pub fn start_resource_load() -> Action {
    Action::StartResourceLoad
}

pub fn load_finished() -> Action {
    Action::LoadFinished
}

pub fn is_valid_context_name(valid: bool) -> Action {
    Action::IsValidContextName { valid: Some(valid) }
}

pub fn context_name_checked(checked: bool) -> Action {
    Action::ContextNameChecked {
        checked: Some(checked),
    }
}

pub fn context_load_error(error: Value) -> Action {
    Action::ContextLoadError { error: Some(error) }
}

/// `name` defaults to [`DEFAULT_LOADING_NAME`], which only toggles the global
/// flag.
pub fn loading(value: bool, name: Option<&str>) -> Action {
    Action::Loading {
        value,
        name: name.unwrap_or(DEFAULT_LOADING_NAME).to_string(),
    }
}

pub fn clear_context_creator() -> Action {
    Action::ClearContextCreator
}

pub fn context_saved(id: Value) -> Action {
    Action::ContextSaved { id: Some(id) }
}

pub fn save_new_context(dest_location: Option<&str>) -> Action {
    Action::SaveContext {
        dest_location: dest_location.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_web_client_payloads() {
        let action: Action = serde_json::from_value(json!({
            "type": "CONTEXTCREATOR:SET_FILTER_TEXT",
            "propName": "availablePlugins",
            "text": "zoom"
        }))
        .unwrap();
        assert_eq!(action, set_filter_text("availablePlugins", "zoom"));

        let action: Action = serde_json::from_value(json!({
            "type": "CONTEXTCREATOR:LOADING",
            "value": true
        }))
        .unwrap();
        assert_eq!(action, loading(true, None));
    }

    #[test]
    fn unknown_type_maps_to_unknown() {
        let action: Action =
            serde_json::from_value(json!({"type": "MAP:ZOOM_TO_EXTENT", "extent": [0, 0, 1, 1]}))
                .unwrap();
        assert_eq!(action, Action::Unknown);
    }

    #[test]
    fn null_ids_become_empty() {
        let action: Action = serde_json::from_value(json!({
            "type": "CONTEXTCREATOR:CHANGE_PLUGINS_KEY",
            "ids": null,
            "key": "enabled",
            "value": true
        }))
        .unwrap();
        assert_eq!(action, change_plugins_key(&[], "enabled", json!(true)));
    }

    #[test]
    fn null_fields_take_their_defaults() {
        let action: Action = serde_json::from_value(json!({
            "type": "CONTEXTCREATOR:SET_FILTER_TEXT",
            "propName": "availablePlugins",
            "text": null
        }))
        .unwrap();
        assert_eq!(action, set_filter_text("availablePlugins", ""));

        let action: Action = serde_json::from_value(json!({
            "type": "CONTEXTCREATOR:SHOW_DIALOG",
            "dialogName": "uploadTemplate",
            "show": null
        }))
        .unwrap();
        assert_eq!(action, show_dialog("uploadTemplate", false));

        let action: Action = serde_json::from_value(json!({
            "type": "CONTEXTCREATOR:LOADING",
            "value": null,
            "name": null
        }))
        .unwrap();
        assert_eq!(action, loading(false, None));

        let action: Action = serde_json::from_value(json!({
            "type": "CONTEXTCREATOR:ENABLE_PLUGINS",
            "plugins": ["Scale"],
            "isInitial": null
        }))
        .unwrap();
        assert_eq!(action, enable_plugins(&["Scale"], false));
    }

    #[test]
    fn serializes_with_type_tag() {
        let value = serde_json::to_value(show_dialog("uploadTemplate", true)).unwrap();
        assert_eq!(
            value,
            json!({"type": "CONTEXTCREATOR:SHOW_DIALOG", "dialogName": "uploadTemplate", "show": true})
        );
    }
}
