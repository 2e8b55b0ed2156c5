use context::{
    find_entry, ContextData, ContextResource, PluginEntry, Template, TemplateId, TemplateRef,
};
use serde_json::json;

#[test]
fn save_and_load_context_resource() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("context.json");

    let resource: ContextResource = serde_json::from_value(json!({
        "id": 12,
        "name": "coastal",
        "data": {
            "plugins": {"desktop": ["Scale", {"name": "TOC", "cfg": {"activateMetedataTool": false}}]},
            "userPlugins": [{"name": "Tutorial", "active": true}],
            "templates": [{"id": 3}],
            "mapConfig": {"version": 2}
        }
    }))
    .expect("parse resource");

    resource.save_to_file(&path).expect("save resource");
    let loaded = ContextResource::load_from_file(&path).expect("load resource");

    assert_eq!(loaded, resource);
    assert_eq!(loaded.name(), Some("coastal"));
    let data = loaded.data.expect("data block");
    assert_eq!(data.plugins.desktop.len(), 2);
    assert_eq!(data.user_plugins[0].name(), "Tutorial");
    assert!(data.user_plugins[0].active());
    assert_eq!(data.templates, vec![TemplateRef::new(TemplateId::Number(3))]);
    assert_eq!(data.attributes.get("mapConfig"), Some(&json!({"version": 2})));
}

#[test]
fn missing_data_block_splits_into_empty_data() {
    let resource: ContextResource =
        serde_json::from_value(json!({"id": 1, "name": "bare"})).expect("parse resource");
    let (data, metadata) = resource.into_parts();
    assert_eq!(data, ContextData::default());
    assert_eq!(metadata.get("name"), Some(&json!("bare")));
    assert!(!metadata.contains_key("data"));
}

#[test]
fn plugin_entries_accept_names_and_objects() {
    let entries: Vec<PluginEntry> = serde_json::from_value(json!([
        "ZoomIn",
        {"name": "Scale", "cfg": {"x": 1}, "override": {"y": 2}},
        {"name": "Scale", "cfg": {"x": 2}}
    ]))
    .expect("parse entries");

    assert_eq!(entries[0], PluginEntry::Name("ZoomIn".to_string()));
    assert_eq!(entries[0].cfg(), None);
    assert!(!entries[0].active());

    let scale = find_entry(&entries, "Scale").expect("scale entry");
    assert_eq!(scale.cfg(), Some(&json!({"x": 1})));
    let fields = scale.fields_without_cfg();
    assert_eq!(fields.get("name"), Some(&json!("Scale")));
    assert_eq!(fields.get("override"), Some(&json!({"y": 2})));
    assert!(!fields.contains_key("cfg"));

    assert!(find_entry(&entries, "Missing").is_none());
}

#[test]
fn template_thumbnail_attributes() {
    let mut template = Template::new(TemplateId::Number(7), "Basemap");
    assert_eq!(template.thumbnail_attributes(), None);
    template.thumbnail = Some("thumb.png".to_string());
    assert_eq!(
        template.thumbnail_attributes(),
        Some(json!({"thumbnail": "thumb.png"}))
    );
}

#[test]
fn template_keeps_unknown_metadata() {
    let template: Template = serde_json::from_value(json!({
        "id": 4,
        "name": "Preset",
        "category": {"name": "TEMPLATE"}
    }))
    .expect("parse template");
    assert!(!template.enabled);
    assert!(!template.selected);
    assert_eq!(template.extra.get("category"), Some(&json!({"name": "TEMPLATE"})));

    let value = serde_json::to_value(&template).expect("serialize template");
    assert_eq!(value["category"]["name"], "TEMPLATE");
    assert_eq!(value["enabled"], false);
}

#[test]
fn template_ids_keep_their_json_type() {
    let templates: Vec<Template> = serde_json::from_value(json!([
        {"id": 7, "name": "Numbered"},
        {"id": "7", "name": "Named"},
        {"id": -1, "name": "Legacy"}
    ]))
    .expect("parse templates");
    assert_eq!(templates[0].id, TemplateId::Number(7));
    assert_eq!(templates[1].id, TemplateId::from("7"));
    assert_eq!(templates[2].id, TemplateId::Other(json!(-1)));
    assert_ne!(templates[0].id, templates[1].id);

    let value = serde_json::to_value(&templates[1]).expect("serialize template");
    assert_eq!(value["id"], json!("7"));
}
