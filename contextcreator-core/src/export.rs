use crate::plugin::flatten_plugins;
use crate::state::CreatorState;
use context::{
    ConfiguredPlugin, ContextData, ContextPlugins, ContextResource, PluginEntry, TemplateRef,
};
use serde_json::Map;
use std::collections::HashSet;

/// Rebuilds the persisted form of the context being edited. Enabled plugins
/// are written in tree order, each name once; user plugins go to
/// `userPlugins`, the rest to `plugins.desktop`.
pub fn context_resource_from_state(state: &CreatorState) -> ContextResource {
    let mut desktop = Vec::new();
    let mut user_plugins = Vec::new();
    let mut seen = HashSet::new();

    for plugin in flatten_plugins(state.plugins()) {
        if !plugin.enabled || !seen.insert(plugin.name.as_str()) {
            continue;
        }
        let entry = PluginEntry::Configured(ConfiguredPlugin {
            name: plugin.name.clone(),
            cfg: plugin.plugin_config.cfg.clone(),
            active: plugin.active.then_some(true),
            extra: Map::new(),
        });
        if plugin.is_user_plugin {
            user_plugins.push(entry);
        } else {
            desktop.push(entry);
        }
    }

    let templates = state
        .templates()
        .iter()
        .filter(|template| template.enabled)
        .map(|template| TemplateRef::new(template.id.clone()))
        .collect();

    let attributes = state
        .new_context
        .as_ref()
        .map(|context| context.attributes.clone())
        .unwrap_or_default();

    ContextResource {
        data: Some(ContextData {
            plugins: ContextPlugins {
                desktop,
                other: Map::new(),
            },
            user_plugins,
            templates,
            attributes,
        }),
        metadata: state.resource.clone().unwrap_or_default(),
    }
}
