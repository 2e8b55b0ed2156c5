pub mod enablement;
pub mod tree;
pub mod types;

pub use enablement::{disable_plugins, enable_plugins, mandatory_plugin_names};
pub use tree::{
    change_plugins, default_plugins, find_plugin, flatten_plugins, make_plugin_tree,
};
pub use types::{PluginConfig, PluginDescriptor, PluginNode, PluginsConfig};
