//! Dependency-aware enabling and disabling of plugins.

use super::tree::{find_plugin, flatten_plugins, update_plugins};
use super::types::PluginNode;
use log::debug;
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// Enables `names` together with their auto-enabled children and, transitively,
/// their dependencies. Each dependency records the enabled dependent and
/// becomes forced-mandatory. Unknown names are ignored.
pub fn enable_plugins(mut plugins: Vec<PluginNode>, names: &[String]) -> Vec<PluginNode> {
    let to_enable = enable_closure(&plugins, names);
    if to_enable.is_empty() {
        return plugins;
    }
    let dependents = dependents_by_dependency(&plugins, &to_enable);
    debug!("enabling plugins {:?}", to_enable);

    update_plugins(&mut plugins, &mut |plugin: &mut PluginNode| {
        if to_enable.contains(&plugin.name) {
            plugin.enabled = true;
        }
        if let Some(added) = dependents.get(&plugin.name) {
            for dependent in added {
                if !plugin.enabled_dependent_plugins.contains(dependent) {
                    plugin.enabled_dependent_plugins.push(dependent.clone());
                }
            }
            plugin.forced_mandatory = true;
        }
    });
    plugins
}

/// Disables `names` and their descendants. Plugins that are mandatory or
/// forced-mandatory stay enabled. Dependencies of the disabled plugins drop
/// them from their dependents and recompute `forcedMandatory`.
pub fn disable_plugins(mut plugins: Vec<PluginNode>, names: &[String]) -> Vec<PluginNode> {
    let mut to_disable = BTreeSet::new();
    for name in names {
        let Some(plugin) = find_plugin(&plugins, name) else {
            continue;
        };
        if plugin.cannot_be_disabled() {
            debug!("plugin '{}' cannot be disabled", plugin.name);
            continue;
        }
        to_disable.insert(plugin.name.clone());
        for descendant in flatten_plugins(&plugin.children) {
            if !descendant.cannot_be_disabled() {
                to_disable.insert(descendant.name.clone());
            }
        }
    }
    if to_disable.is_empty() {
        return plugins;
    }
    let dependents = dependents_by_dependency(&plugins, &to_disable);
    debug!("disabling plugins {:?}", to_disable);

    update_plugins(&mut plugins, &mut |plugin: &mut PluginNode| {
        if to_disable.contains(&plugin.name) {
            plugin.enabled = false;
        }
        if let Some(removed) = dependents.get(&plugin.name) {
            plugin
                .enabled_dependent_plugins
                .retain(|dependent| !removed.contains(dependent));
            plugin.forced_mandatory = !plugin.enabled_dependent_plugins.is_empty();
        }
    });
    plugins
}

pub fn mandatory_plugin_names(plugins: &[PluginNode]) -> Vec<String> {
    let mut names = Vec::new();
    for plugin in flatten_plugins(plugins) {
        if plugin.mandatory && !names.contains(&plugin.name) {
            names.push(plugin.name.clone());
        }
    }
    names
}

fn enable_closure(plugins: &[PluginNode], names: &[String]) -> BTreeSet<String> {
    let mut closure = BTreeSet::new();
    let mut queue: VecDeque<String> = names.iter().cloned().collect();
    while let Some(name) = queue.pop_front() {
        if closure.contains(&name) {
            continue;
        }
        let Some(plugin) = find_plugin(plugins, &name) else {
            continue;
        };
        closure.insert(name);
        queue.extend(plugin.auto_enable_children.iter().cloned());
        queue.extend(plugin.dependencies.iter().cloned());
    }
    closure
}

/// Maps each dependency name to the plugins in `changed` that declare it.
fn dependents_by_dependency(
    plugins: &[PluginNode],
    changed: &BTreeSet<String>,
) -> BTreeMap<String, Vec<String>> {
    let mut dependents: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for name in changed {
        let Some(plugin) = find_plugin(plugins, name) else {
            continue;
        };
        for dependency in &plugin.dependencies {
            let entry = dependents.entry(dependency.clone()).or_default();
            if !entry.contains(name) {
                entry.push(name.clone());
            }
        }
    }
    dependents
}
