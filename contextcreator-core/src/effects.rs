//! Follow-up actions that depend only on the dispatched action and the state
//! it produced. Anything involving the network stays outside this crate.

use crate::actions::{self, Action};
use crate::state::CreatorState;
use log::debug;
use serde_json::{json, Value};

pub const PLUGIN_CONFIG_DIALOG: &str = "pluginConfig";
pub const UPLOAD_TEMPLATE_DIALOG: &str = "uploadTemplate";

pub fn follow_ups(action: &Action, state: &CreatorState) -> Vec<Action> {
    match action {
        Action::EditPlugin { plugin_name } => vec![
            actions::set_edited_plugin(Some(plugin_name.as_str())),
            actions::set_edited_cfg(plugin_name),
            actions::set_cfg_error(None),
            actions::show_dialog(PLUGIN_CONFIG_DIALOG, true),
        ],
        Action::ValidateEditedCfg => {
            let text = state.edited_cfg.as_deref().unwrap_or_default();
            match serde_json::from_str::<Value>(text) {
                Ok(parsed) => vec![
                    actions::set_parsed_cfg(parsed),
                    actions::set_cfg_error(None),
                    actions::set_validation_status(true),
                ],
                Err(err) => vec![
                    actions::set_cfg_error(Some(json!({
                        "message": err.to_string(),
                        "line": err.line(),
                        "column": err.column(),
                    }))),
                    actions::set_validation_status(false),
                ],
            }
        }
        Action::SavePluginCfg => save_plugin_cfg(state),
        Action::EditTemplate { id } => vec![
            actions::set_edited_template(id.clone()),
            actions::show_dialog(UPLOAD_TEMPLATE_DIALOG, true),
        ],
        Action::SetResource { .. } => {
            let initial = state.initial_enabled_plugins.clone().unwrap_or_default();
            vec![
                actions::enable_mandatory_plugins(),
                Action::EnablePlugins {
                    plugins: initial,
                    is_initial: true,
                },
            ]
        }
        _ => Vec::new(),
    }
}

fn save_plugin_cfg(state: &CreatorState) -> Vec<Action> {
    let (Some(true), Some(plugin_name), Some(parsed_cfg)) = (
        state.validation_status,
        state.edited_plugin.as_deref(),
        state.parsed_cfg.as_ref(),
    ) else {
        debug!("no validated configuration to save");
        return Vec::new();
    };
    vec![
        actions::change_plugins_key(&[plugin_name], "pluginConfig.cfg", parsed_cfg.clone()),
        actions::set_edited_plugin(None),
        actions::show_dialog(PLUGIN_CONFIG_DIALOG, false),
    ]
}
