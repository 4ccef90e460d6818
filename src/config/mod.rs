mod loader;
mod types;

pub use loader::{load_config, validate_config};
pub use types::Config;
