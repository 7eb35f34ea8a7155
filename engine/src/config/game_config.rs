use serde::{Deserialize, Serialize};

use super::{ConfigManager, FileContentConfigProvider, Validate};
use crate::tictactoe::{Difficulty, Mark};

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";
const CONFIG_NAME: &str = "game";

pub const MAX_COMPUTER_DELAY_MS: u64 = 10_000;

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

/// Config next to the executable, or at `path` when given.
pub fn get_config_manager(
    path: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, GameConfig> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(CONFIG_NAME, path),
        None => ConfigManager::from_yaml_file(CONFIG_NAME, &get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    pub human_mark: Mark,
    /// Pause before the computer's visible move.
    pub computer_delay_ms: u64,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub use_log_prefix: bool,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.computer_delay_ms > MAX_COMPUTER_DELAY_MS {
            return Err(format!(
                "computer_delay_ms must not exceed {} (got {})",
                MAX_COMPUTER_DELAY_MS, self.computer_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            human_mark: Mark::X,
            computer_delay_ms: 500,
            seed: None,
            use_log_prefix: false,
        }
    }
}
