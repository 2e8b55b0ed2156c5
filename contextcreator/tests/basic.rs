use context::{ContextResource, PluginEntry, TemplateId};
use serde_json::{json, Value};
use std::path::Path;
use std::process::Command;

const EXE: &str = env!("CARGO_BIN_EXE_contextcreator");

fn write_json(dir: &Path, name: &str, value: &Value) -> String {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_vec_pretty(value).expect("encode fixture"))
        .expect("write fixture");
    path.to_string_lossy().into_owned()
}

fn registry() -> Value {
    json!({
        "plugins": [
            {"name": "Map", "mandatory": true},
            {"name": "TOC", "children": ["FeaturesGrid"]},
            {"name": "FeaturesGrid", "dependencies": ["QueryPanel"]},
            {"name": "QueryPanel"},
            {"name": "Scale", "defaultConfig": {"style": "line"}}
        ]
    })
}

#[test]
fn tree_prints_the_default_forest_without_registry() {
    let output = Command::new(EXE).arg("tree").output().expect("run tree");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[ContextCreator][INFO] Plugin tree:"));
    assert!(stdout.contains("\t[ ] TOCItemSettings"));
    assert!(stdout.contains("[ ] ZoomOut"));
}

#[test]
fn tree_applies_local_config_from_toml() {
    let dir = tempfile::tempdir().expect("tempdir");
    let registry = write_json(dir.path(), "registry.json", &registry());
    let config = dir.path().join("creator.toml");
    std::fs::write(
        &config,
        "[plugins]\ndesktop = [\"Map\", { name = \"Scale\", cfg = { ignored = true } }]\n",
    )
    .expect("write config");

    let output = Command::new(EXE)
        .args(["--config", &config.to_string_lossy(), "tree", "--registry", &registry])
        .output()
        .expect("run tree");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[ ] Map (Map) mandatory"));
    assert!(stdout.contains("\t[ ] FeaturesGrid"));
}

#[test]
fn replay_reduces_an_action_log() {
    let dir = tempfile::tempdir().expect("tempdir");
    let registry = write_json(dir.path(), "registry.json", &registry());
    let actions = write_json(
        dir.path(),
        "actions.json",
        &json!([
            {"type": "CONTEXTCREATOR:ENABLE_PLUGINS", "plugins": ["FeaturesGrid"]},
            {"type": "CONTEXTCREATOR:SET_FILTER_TEXT", "propName": "availablePlugins", "text": "grid"},
            {"type": "CONTEXTCREATOR:CHANGE_ATTRIBUTE", "key": "name", "value": "harbour"},
            {"type": "MAP:ZOOM_IN"}
        ]),
    );

    let output = Command::new(EXE)
        .args(["replay", "--registry", &registry, "--actions", &actions])
        .output()
        .expect("run replay");
    assert!(output.status.success());
    let state: Value = serde_json::from_slice(&output.stdout).expect("state json");
    assert_eq!(state["filterText"]["availablePlugins"], json!("grid"));
    assert_eq!(state["resource"]["name"], json!("harbour"));

    let toc = &state["plugins"][1];
    assert_eq!(toc["name"], json!("TOC"));
    assert_eq!(toc["children"][0]["enabled"], json!(true));
    let query = &state["plugins"][2];
    assert_eq!(query["name"], json!("QueryPanel"));
    assert_eq!(query["forcedMandatory"], json!(true));
    assert_eq!(state["plugins"][0]["enabled"], json!(true));
}

#[test]
fn export_writes_a_loadable_context() {
    let dir = tempfile::tempdir().expect("tempdir");
    let registry = write_json(dir.path(), "registry.json", &registry());
    let resource = write_json(
        dir.path(),
        "context.json",
        &json!({
            "id": 7,
            "name": "harbour",
            "data": {
                "plugins": {"desktop": [{"name": "Scale", "cfg": {"style": "bar"}}]},
                "userPlugins": [],
                "templates": [{"id": 2}]
            }
        }),
    );
    let templates = write_json(
        dir.path(),
        "templates.json",
        &json!([{"id": 1, "name": "Base"}, {"id": 2, "name": "Coast"}]),
    );
    let actions = write_json(
        dir.path(),
        "actions.json",
        &json!([{"type": "CONTEXTCREATOR:DISABLE_PLUGINS", "plugins": ["Scale"]}]),
    );
    let out = dir.path().join("exported.json");

    let status = Command::new(EXE)
        .args([
            "export",
            "--registry",
            &registry,
            "--resource",
            &resource,
            "--templates",
            &templates,
            "--actions",
            &actions,
            "--out",
            &out.to_string_lossy(),
        ])
        .status()
        .expect("run export");
    assert!(status.success());

    let exported = ContextResource::load_from_file(&out).expect("load export");
    assert_eq!(exported.name(), Some("harbour"));
    let data = exported.data.expect("data block");
    let desktop: Vec<&str> = data.plugins.desktop.iter().map(PluginEntry::name).collect();
    assert_eq!(desktop, vec!["Map"]);
    assert_eq!(data.templates.len(), 1);
    assert_eq!(data.templates[0].id, TemplateId::Number(2));
}

#[test]
fn missing_input_file_reports_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope.json");
    let output = Command::new(EXE)
        .args(["replay", "--actions", &missing.to_string_lossy()])
        .output()
        .expect("run replay");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[ContextCreator][ERROR]:"));
}
