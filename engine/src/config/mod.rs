mod config_content_provider;
mod config_manager;
mod game_config;
mod validate;

pub use config_content_provider::{ConfigContentProvider, FileContentConfigProvider};
pub use config_manager::ConfigManager;
pub use game_config::{GameConfig, MAX_COMPUTER_DELAY_MS, get_config_manager};
pub use validate::Validate;
