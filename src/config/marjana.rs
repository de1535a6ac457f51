//! Main MarjanaConfig and loading.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use super::agent::AgentSection;
use super::simulation::SimulationSection;
use crate::error::ConfigError;
use crate::grid::GridConfig;

/// Default configuration path, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "configs/config.yaml";

/// Full configuration loaded from YAML
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MarjanaConfig {
    /// World generation
    #[serde(default)]
    pub grid: GridConfig,

    /// Agent selection
    #[serde(default)]
    pub agent: AgentSection,

    /// Run loop limits
    #[serde(default)]
    pub simulation: SimulationSection,
}

impl MarjanaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        debug!("[Config] Loaded {}", path.display());
        Self::from_yaml(&contents)
    }

    /// Load from the default config path, falling back to defaults
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            debug!("[Config] {} not found, using defaults", DEFAULT_CONFIG_PATH);
            Ok(Self::default())
        }
    }

    /// Parse and validate a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid.validate()?;
        Ok(())
    }
}
