pub mod actions;
pub mod config;
pub mod effects;
pub mod error;
pub mod export;
pub mod path;
pub mod plugin;
pub mod reducer;
pub mod state;
pub mod store;

pub use actions::Action;
pub use config::{CreatorConfig, LocalPluginsConfig};
pub use error::CreatorError;
pub use export::context_resource_from_state;
pub use reducer::reduce;
pub use state::{CreatorState, NewContext, ParsedTemplate};
pub use store::Store;
