mod commands;
mod handlers;
mod output;

use clap::Parser;
use commands::{Cli, Commands};
use contextcreator_core::CreatorConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match cli.config.as_deref() {
        Some(path) => CreatorConfig::load_from_file(path)?,
        None => CreatorConfig::default(),
    };

    let result = match &cli.command {
        Commands::Tree { registry } => handlers::handle_tree(&config, registry.as_deref()),
        Commands::Replay(args) => handlers::handle_replay(&config, args),
        Commands::Export(args) => handlers::handle_export(&config, args),
    };

    if let Err(err) = result {
        output::print_error(&err.to_string());
        std::process::exit(1);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
