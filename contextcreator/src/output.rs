use contextcreator_core::plugin::PluginNode;

pub fn print_info(message: &str) {
    println!("[ContextCreator][INFO] {message}");
}

pub fn print_error(message: &str) {
    eprintln!("[ContextCreator][ERROR]: {message}");
}

pub fn print_plugin_tree(plugins: &[PluginNode]) {
    if plugins.is_empty() {
        print_info("No plugins");
        return;
    }
    print_info("Plugin tree:");
    print_nodes(plugins, 0);
}

fn print_nodes(plugins: &[PluginNode], depth: usize) {
    for plugin in plugins {
        let indent = "\t".repeat(depth);
        let state = if plugin.enabled { "x" } else { " " };
        let mut flags = Vec::new();
        if plugin.mandatory {
            flags.push("mandatory");
        }
        if plugin.forced_mandatory {
            flags.push("required");
        }
        if plugin.is_user_plugin {
            flags.push("user");
        }
        if plugin.hidden {
            flags.push("hidden");
        }
        let title = plugin.title.as_deref().unwrap_or(&plugin.name);
        if flags.is_empty() {
            println!("{indent}[{state}] {} ({title})", plugin.name);
        } else {
            println!(
                "{indent}[{state}] {} ({title}) {}",
                plugin.name,
                flags.join(",")
            );
        }
        print_nodes(&plugin.children, depth + 1);
    }
}
