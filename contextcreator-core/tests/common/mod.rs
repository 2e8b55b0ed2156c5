#![allow(dead_code)]

use context::{ContextResource, Template, TemplateId};
use contextcreator_core::plugin::{PluginDescriptor, PluginsConfig};
use serde_json::json;

pub fn registry() -> Vec<PluginDescriptor> {
    serde_json::from_value(json!([
        {"name": "Map", "mandatory": true, "defaultConfig": {"mapOptions": {}}},
        {
            "name": "TOC",
            "title": "Layers",
            "glyph": "1-layer",
            "children": ["TOCItemSettings", "FeaturesGrid", "Missing"],
            "autoEnableChildren": ["TOCItemSettings"]
        },
        {"name": "TOCItemSettings"},
        {"name": "FeaturesGrid", "dependencies": ["QueryPanel"]},
        {"name": "QueryPanel"},
        {"name": "Scale", "defaultConfig": {"style": "line"}},
        {"name": "Tutorial", "hidden": true}
    ]))
    .expect("parse registry")
}

pub fn plugins_config() -> PluginsConfig {
    PluginsConfig::new(registry())
}

pub fn templates() -> Vec<Template> {
    serde_json::from_value(json!([
        {"id": 1, "name": "Basemap", "thumbnail": "basemap.png"},
        {"id": 2, "name": "Coastline"},
        {"id": 3, "name": "Rivers"}
    ]))
    .expect("parse templates")
}

pub fn resource() -> ContextResource {
    serde_json::from_value(json!({
        "id": 42,
        "name": "coastal",
        "description": "Coastal monitoring",
        "data": {
            "plugins": {"desktop": [{"name": "Scale", "cfg": {"x": 1}, "active": true}, "FeaturesGrid"]},
            "userPlugins": [{"name": "Tutorial", "active": true}],
            "templates": [{"id": 2}],
            "mapConfig": {"version": 2}
        }
    }))
    .expect("parse resource")
}

pub fn template_ids(ids: &[u64]) -> Vec<TemplateId> {
    ids.iter().copied().map(TemplateId::Number).collect()
}
