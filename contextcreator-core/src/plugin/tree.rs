use super::types::{PluginConfig, PluginDescriptor, PluginNode};
use crate::config::LocalPluginsConfig;
use log::warn;
use serde_json::Value;

const DEFAULT_PLUGINS: &[(&str, &str, &[(&str, &str)])] = &[
    (
        "TOC",
        "List of layers",
        &[
            ("TOCItemSettings", "Layer settings"),
            ("FeaturesGrid", "Attribute Table"),
        ],
    ),
    ("MapTemplates", "Map Templates", &[]),
    ("MetadataExplorer", "MetadataExplorer", &[]),
    ("Scale", "Scale", &[]),
    ("ZoomIn", "Zoom In", &[]),
    ("ZoomOut", "Zoom Out", &[]),
];

/// Forest used when no plugin registry is configured.
pub fn default_plugins() -> Vec<PluginNode> {
    DEFAULT_PLUGINS
        .iter()
        .map(|(name, title, children)| {
            let mut node = PluginNode::new(name, None);
            node.title = Some(title.to_string());
            node.children = children
                .iter()
                .map(|(child_name, child_title)| {
                    let mut child = PluginNode::new(child_name, Some(*name));
                    child.title = Some(child_title.to_string());
                    child
                })
                .collect();
            node
        })
        .collect()
}

/// Builds the plugin forest from the registry. Roots are the descriptors no
/// other descriptor lists as a child; children are resolved by name and
/// unknown names are dropped.
pub fn make_plugin_tree(
    descriptors: Option<&[PluginDescriptor]>,
    local_plugins: &LocalPluginsConfig,
) -> Vec<PluginNode> {
    let Some(descriptors) = descriptors else {
        return default_plugins();
    };

    let mut ancestors = Vec::new();
    descriptors
        .iter()
        .filter(|plugin| {
            !descriptors
                .iter()
                .any(|other| other.children.iter().any(|child| *child == plugin.name))
        })
        .map(|root| make_node(None, root, descriptors, local_plugins, &mut ancestors))
        .collect()
}

fn make_node(
    parent: Option<&str>,
    plugin: &PluginDescriptor,
    descriptors: &[PluginDescriptor],
    local_plugins: &LocalPluginsConfig,
    ancestors: &mut Vec<String>,
) -> PluginNode {
    let mut extra = local_plugins
        .entry(&plugin.name)
        .map(|entry| entry.fields_without_cfg())
        .unwrap_or_default();
    extra.shift_remove("name");

    ancestors.push(plugin.name.clone());
    let children = plugin
        .children
        .iter()
        .filter_map(|child_name| descriptors.iter().find(|p| p.name == *child_name))
        .filter(|child| {
            let cyclic = ancestors.contains(&child.name);
            if cyclic {
                warn!(
                    "plugin '{}' lists its ancestor '{}' as a child, skipping",
                    plugin.name, child.name
                );
            }
            !cyclic
        })
        .collect::<Vec<_>>()
        .into_iter()
        .map(|child| {
            make_node(
                Some(plugin.name.as_str()),
                child,
                descriptors,
                local_plugins,
                ancestors,
            )
        })
        .collect();
    ancestors.pop();

    PluginNode {
        name: plugin.name.clone(),
        title: plugin.title.clone(),
        description: plugin.description.clone(),
        glyph: plugin.glyph.clone(),
        parent: parent.map(str::to_string),
        mandatory: plugin.mandatory,
        hidden: plugin.hidden,
        dependencies: plugin.dependencies.clone(),
        plugin_config: PluginConfig {
            name: plugin.name.clone(),
            cfg: plugin.default_config.clone(),
            extra,
        },
        auto_enable_children: plugin.auto_enable_children.clone(),
        children,
        ..PluginNode::default()
    }
}

/// Sets `key` to `value` on every node named in `names`, at any depth.
/// A value that does not fit the node's field leaves that node unchanged.
pub fn change_plugins(
    plugins: Vec<PluginNode>,
    names: &[String],
    key: &str,
    value: &Value,
) -> Vec<PluginNode> {
    plugins
        .into_iter()
        .map(|mut plugin| {
            let children = std::mem::take(&mut plugin.children);
            if names.iter().any(|name| *name == plugin.name) {
                if let Err(err) = plugin.set_key(key, value.clone()) {
                    warn!("cannot set '{}' on plugin '{}': {}", key, plugin.name, err);
                }
            }
            plugin.children = change_plugins(children, names, key, value);
            plugin
        })
        .collect()
}

/// First node named `name` in document order.
pub fn find_plugin<'a>(plugins: &'a [PluginNode], name: &str) -> Option<&'a PluginNode> {
    plugins.iter().find_map(|plugin| {
        if plugin.name == name {
            Some(plugin)
        } else {
            find_plugin(&plugin.children, name)
        }
    })
}

/// All nodes in document order.
pub fn flatten_plugins(plugins: &[PluginNode]) -> Vec<&PluginNode> {
    let mut nodes = Vec::new();
    collect_nodes(plugins, &mut nodes);
    nodes
}

fn collect_nodes<'a>(plugins: &'a [PluginNode], nodes: &mut Vec<&'a PluginNode>) {
    for plugin in plugins {
        nodes.push(plugin);
        collect_nodes(&plugin.children, nodes);
    }
}

/// Applies `update` to every node, parents before children.
pub(crate) fn update_plugins<F>(plugins: &mut [PluginNode], update: &mut F)
where
    F: FnMut(&mut PluginNode),
{
    for plugin in plugins {
        update(plugin);
        update_plugins(&mut plugin.children, update);
    }
}
