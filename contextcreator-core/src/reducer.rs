use crate::actions::{Action, DEFAULT_LOADING_NAME};
use crate::config::LocalPluginsConfig;
use crate::path;
use crate::plugin::{
    change_plugins, disable_plugins, enable_plugins, find_plugin, make_plugin_tree,
    mandatory_plugin_names, PluginNode, PluginsConfig,
};
use crate::state::{CreatorState, NewContext, ParsedTemplate};
use context::{find_entry, ContextData, ContextResource, PluginEntry, Template};
use log::warn;
use serde_json::Value;

/// Computes the state following `action`. Actions the context creator does
/// not reduce (network requests, unknown types) return `state` untouched.
pub fn reduce(
    mut state: CreatorState,
    action: &Action,
    local_plugins: &LocalPluginsConfig,
) -> CreatorState {
    match action {
        Action::SetCreationStep { step_id } => {
            state.step_id = step_id.clone();
            state
        }
        Action::MapViewerLoaded { status } => {
            state.map_viewer_loaded = *status;
            state
        }
        Action::ShowMapViewerReloadConfirm { show } => {
            state.show_reload_confirm = *show;
            state
        }
        Action::SetResource {
            resource,
            plugins_config,
            all_templates,
        } => set_resource(
            state,
            resource.clone(),
            plugins_config.as_ref(),
            all_templates,
            local_plugins,
        ),
        Action::UpdateTemplate { resource } => match resource {
            Some(resource) => update_template(state, resource.clone()),
            None => state,
        },
        Action::IsValidContextName { valid } => {
            state.is_valid_context_name = *valid;
            state
        }
        Action::ContextNameChecked { checked } => {
            state.context_name_checked = *checked;
            state
        }
        Action::ClearContextCreator => CreatorState::default(),
        Action::SetFilterText { prop_name, text } => {
            state.filter_text.insert(prop_name.clone(), text.clone());
            state
        }
        Action::SetSelectedPlugins { ids } => {
            let plugins = state.plugins.take().unwrap_or_default();
            state.plugins = Some(
                plugins
                    .into_iter()
                    .map(|mut plugin| {
                        plugin.selected = ids.contains(&plugin.name);
                        plugin
                    })
                    .collect(),
            );
            state
        }
        Action::SetSelectedTemplates { ids } => {
            let context = state.new_context.get_or_insert_with(NewContext::default);
            for template in &mut context.templates {
                template.selected = ids.contains(&template.id);
            }
            state
        }
        Action::SetParsedTemplate { file_name, data } => {
            state.parsed_template = Some(ParsedTemplate {
                file_name: file_name.clone(),
                data: data.clone(),
            });
            state
        }
        Action::SetFileDropStatus { status } => {
            state.file_drop_status = status.clone();
            state
        }
        Action::SetEditedTemplate { id } => {
            state.edited_template = id.as_ref().and_then(|id| {
                state
                    .templates()
                    .iter()
                    .find(|template| template.id == *id)
                    .cloned()
            });
            state
        }
        Action::SetEditedPlugin { plugin_name } => {
            state.edited_plugin = plugin_name.clone();
            state
        }
        Action::ChangePluginsKey { ids, key, value } => {
            let plugins = state.plugins.take().unwrap_or_default();
            state.plugins = Some(change_plugins(plugins, ids, key, value));
            state
        }
        Action::ChangeTemplatesKey { ids, key, value } => {
            let context = state.new_context.get_or_insert_with(NewContext::default);
            context.templates = std::mem::take(&mut context.templates)
                .into_iter()
                .map(|template| {
                    if !ids.contains(&template.id) {
                        return template;
                    }
                    match path::with_field(&template, key, value.clone()) {
                        Ok(changed) => changed,
                        Err(err) => {
                            warn!("cannot set '{}' on template {}: {}", key, template.id, err);
                            template
                        }
                    }
                })
                .collect();
            state
        }
        Action::SetEditedCfg { plugin_name } => match plugin_name {
            Some(plugin_name) => {
                let cfg = find_plugin(state.plugins(), plugin_name)
                    .and_then(|plugin| plugin.plugin_config.cfg.clone())
                    .unwrap_or_else(|| Value::Object(Default::default()));
                state.edited_cfg = Some(
                    serde_json::to_string_pretty(&cfg).unwrap_or_else(|_| "{}".to_string()),
                );
                state
            }
            None => state,
        },
        Action::UpdateEditedCfg { cfg } => {
            state.edited_cfg = cfg.clone();
            state
        }
        Action::SetValidationStatus { status } => {
            state.validation_status = *status;
            state
        }
        Action::SetParsedCfg { parsed_cfg } => {
            state.parsed_cfg = parsed_cfg.clone();
            state
        }
        Action::SetCfgError { error } => {
            state.cfg_error = error.clone();
            state
        }
        Action::ChangeAttribute { key, value } => change_attribute(state, key, value),
        Action::ShowDialog { dialog_name, show } => {
            state.show_dialog.insert(dialog_name.clone(), *show);
            state.parsed_template = None;
            state
        }
        Action::Loading { value, name } => {
            state.loading = Some(*value);
            if name != DEFAULT_LOADING_NAME {
                state.load_flags.insert(name.clone(), *value);
            }
            state
        }
        Action::EnablePlugins { plugins, .. } => {
            let tree = state.plugins.take().unwrap_or_default();
            state.plugins = Some(enable_plugins(tree, plugins));
            state
        }
        Action::DisablePlugins { plugins } => {
            let tree = state.plugins.take().unwrap_or_default();
            state.plugins = Some(disable_plugins(tree, plugins));
            state
        }
        Action::EnableMandatoryPlugins => {
            let tree = state.plugins.take().unwrap_or_default();
            let mandatory = mandatory_plugin_names(&tree);
            state.plugins = Some(enable_plugins(tree, &mandatory));
            state
        }
        _ => state,
    }
}

fn set_resource(
    mut state: CreatorState,
    resource: Option<ContextResource>,
    plugins_config: Option<&PluginsConfig>,
    all_templates: &[Template],
    local_plugins: &LocalPluginsConfig,
) -> CreatorState {
    let (data, metadata) = resource.unwrap_or_default().into_parts();
    let ContextData {
        plugins,
        user_plugins,
        templates,
        attributes,
    } = data;

    let descriptors = plugins_config.and_then(|config| config.plugins.as_deref());
    let tree = make_plugin_tree(descriptors, local_plugins);

    let mut plugins_to_enable = Vec::new();
    let tree = apply_context_plugins(
        tree,
        &plugins.desktop,
        &user_plugins,
        &mut plugins_to_enable,
    );

    let templates = all_templates
        .iter()
        .map(|template| Template {
            attributes: template.thumbnail_attributes(),
            enabled: templates.iter().any(|stored| stored.id == template.id),
            selected: false,
            ..template.clone()
        })
        .collect();

    state.resource = Some(metadata);
    state.plugins = Some(tree);
    state.new_context = Some(NewContext {
        templates,
        attributes,
    });
    state.initial_enabled_plugins = Some(plugins_to_enable);
    state
}

/// Copies `cfg` and `active` from the context's plugin lists onto the matching
/// nodes, at every depth, and records the names that have to be enabled.
fn apply_context_plugins(
    plugins: Vec<PluginNode>,
    context_plugins: &[PluginEntry],
    user_plugins: &[PluginEntry],
    plugins_to_enable: &mut Vec<String>,
) -> Vec<PluginNode> {
    plugins
        .into_iter()
        .map(|mut plugin| {
            let user_plugin = find_entry(user_plugins, &plugin.name);
            let target = find_entry(context_plugins, &plugin.name).or(user_plugin);
            if let Some(target) = target {
                plugins_to_enable.push(plugin.name.clone());
                plugin.plugin_config.cfg = target.cfg().cloned();
                plugin.is_user_plugin = user_plugin.is_some();
                plugin.active = target.active();
            }
            plugin.children = apply_context_plugins(
                std::mem::take(&mut plugin.children),
                context_plugins,
                user_plugins,
                plugins_to_enable,
            );
            plugin
        })
        .collect()
}

/// Replaces the template with the same id, keeping its `enabled` and
/// `selected` flags. The updated template moves to the end of the list.
fn update_template(mut state: CreatorState, mut resource: Template) -> CreatorState {
    let context = state.new_context.get_or_insert_with(NewContext::default);
    if let Some(previous) = context
        .templates
        .iter()
        .find(|template| template.id == resource.id)
    {
        resource.enabled = previous.enabled;
        resource.selected = previous.selected;
    }
    context.templates.retain(|template| template.id != resource.id);
    context.templates.push(resource);
    state
}

fn change_attribute(mut state: CreatorState, key: &str, value: &Value) -> CreatorState {
    if key == "name" {
        state
            .resource
            .get_or_insert_with(Default::default)
            .insert("name".to_string(), value.clone());
        return state;
    }
    let context = state.new_context.take().unwrap_or_default();
    state.new_context = Some(match path::updated(&context, key, value.clone()) {
        Ok(changed) => changed,
        Err(err) => {
            warn!("cannot set context attribute '{}': {}", key, err);
            context
        }
    });
    state
}
