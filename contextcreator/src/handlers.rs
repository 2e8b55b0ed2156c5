use crate::commands::ReplayArgs;
use crate::output::{print_info, print_plugin_tree};
use context::{load_templates_from_file, ContextResource};
use contextcreator_core::plugin::{make_plugin_tree, PluginsConfig};
use contextcreator_core::{
    actions, context_resource_from_state, Action, CreatorConfig, CreatorError, CreatorState, Store,
};
use log::{info, warn};
use serde::Serialize;
use std::path::Path;

pub fn handle_tree(config: &CreatorConfig, registry: Option<&Path>) -> Result<(), CreatorError> {
    let registry = registry.map(PluginsConfig::load_from_file).transpose()?;
    let descriptors = registry.as_ref().and_then(|r| r.plugins.as_deref());
    let plugins = make_plugin_tree(descriptors, &config.plugins);
    print_plugin_tree(&plugins);
    Ok(())
}

pub fn handle_replay(config: &CreatorConfig, args: &ReplayArgs) -> Result<(), CreatorError> {
    let state = replay(config, args)?;
    emit(&state, args.out.as_deref())
}

pub fn handle_export(config: &CreatorConfig, args: &ReplayArgs) -> Result<(), CreatorError> {
    let state = replay(config, args)?;
    let resource = context_resource_from_state(&state);
    if let Some(out) = args.out.as_deref() {
        resource.save_to_file(out)?;
        print_info(&format!("Context written to {}", out.display()));
        return Ok(());
    }
    emit(&resource, None)
}

fn replay(config: &CreatorConfig, args: &ReplayArgs) -> Result<CreatorState, CreatorError> {
    let mut store = Store::new(config.plugins.clone());

    if args.resource.is_some() || args.registry.is_some() || args.templates.is_some() {
        let resource = args
            .resource
            .as_deref()
            .map(ContextResource::load_from_file)
            .transpose()?;
        let registry = args
            .registry
            .as_deref()
            .map(PluginsConfig::load_from_file)
            .transpose()?;
        let templates = args
            .templates
            .as_deref()
            .map(load_templates_from_file)
            .transpose()?
            .unwrap_or_default();
        info!(
            "loading context {}",
            resource
                .as_ref()
                .and_then(ContextResource::name)
                .unwrap_or("(new)")
        );
        store.dispatch(actions::set_resource(resource, registry, templates));
    }

    if let Some(path) = args.actions.as_deref() {
        let logged = load_actions(path)?;
        let unknown = logged
            .iter()
            .filter(|action| **action == Action::Unknown)
            .count();
        if unknown > 0 {
            warn!("{unknown} actions in {} have an unknown type", path.display());
        }
        store.dispatch_all(logged);
    }

    info!("{} actions reduced", store.dispatched());
    Ok(store.into_state())
}

fn load_actions(path: &Path) -> Result<Vec<Action>, CreatorError> {
    let data = std::fs::read(path)?;
    Ok(serde_json::from_slice(&data)?)
}

fn emit<T: Serialize>(value: &T, out: Option<&Path>) -> Result<(), CreatorError> {
    let text = serde_json::to_string_pretty(value)?;
    match out {
        Some(path) => {
            std::fs::write(path, text)?;
            print_info(&format!("State written to {}", path.display()));
        }
        None => println!("{text}"),
    }
    Ok(())
}
