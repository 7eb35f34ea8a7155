use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use super::{ConfigContentProvider, FileContentConfigProvider, Validate};

/// YAML-backed config with a cache. The first successful load is kept and
/// every save goes through validation first.
pub struct ConfigManager<TProvider, TConfig>
where
    TProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    name: &'static str,
    provider: TProvider,
    cached: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(name: &'static str, file_path: &str) -> Self {
        Self::new(name, FileContentConfigProvider::new(file_path.to_string()))
    }
}

impl<TProvider, TConfig> ConfigManager<TProvider, TConfig>
where
    TProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn new(name: &'static str, provider: TProvider) -> Self {
        Self {
            name,
            provider,
            cached: Mutex::new(None),
        }
    }

    fn checked(&self, config: &TConfig) -> Result<(), String> {
        config.validate().map_err(|e| {
            format!("Invalid {} config in {}: {}", self.name, self.provider.location(), e)
        })
    }

    fn parse(&self, content: &str) -> Result<TConfig, String> {
        let config: TConfig = serde_yaml_ng::from_str(content).map_err(|e| {
            format!("Failed to parse {} config from {}: {}", self.name, self.provider.location(), e)
        })?;
        self.checked(&config)?;
        Ok(config)
    }

    /// Missing content yields `TConfig::default()`, which is not cached.
    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut cached = self
            .cached
            .lock()
            .map_err(|_| format!("{} config lock poisoned", self.name))?;

        if let Some(config) = cached.as_ref() {
            return Ok(config.clone());
        }

        match self.provider.get_config_content()? {
            Some(content) => {
                let config = self.parse(&content)?;
                *cached = Some(config.clone());
                Ok(config)
            }
            None => Ok(TConfig::default()),
        }
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        self.checked(config)?;

        let content = serde_yaml_ng::to_string(config)
            .map_err(|e| format!("Failed to serialize {} config: {}", self.name, e))?;
        self.provider.set_config_content(&content)?;

        let mut cached = self
            .cached
            .lock()
            .map_err(|_| format!("{} config lock poisoned", self.name))?;
        *cached = Some(config.clone());
        Ok(())
    }

    /// Loads the stored config, applies `change` and saves the result.
    pub fn update_config<F>(&self, change: F) -> Result<TConfig, String>
    where
        F: FnOnce(&mut TConfig),
    {
        let mut config = self.get_config()?;
        change(&mut config);
        self.set_config(&config)?;
        Ok(config)
    }
}
