use std::path::Path;

use serde::Deserialize;

use castway_provider::Sink;

use crate::error::ConfigError;

#[derive(Debug, Deserialize)]
pub struct CastwayConfig {
    pub instance: InstanceConfig,
    #[serde(default)]
    pub discovery: DiscoveryConfig,
}

#[derive(Debug, Deserialize)]
pub struct InstanceConfig {
    /// Which build variant hosts this instance.
    pub origin: String,
    /// Ordered preference list; earlier entries take precedence.
    #[serde(default = "default_variants")]
    pub variants: Vec<String>,
}

fn default_variants() -> Vec<String> {
    vec!["dev".into(), "public".into()]
}

#[derive(Debug, Deserialize)]
pub struct DiscoveryConfig {
    #[serde(default = "default_rescan_secs")]
    pub rescan_interval_secs: u64,
    /// Receivers with known addresses, announced by the static backend.
    #[serde(default)]
    pub sinks: Vec<StaticSinkConfig>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            rescan_interval_secs: default_rescan_secs(),
            sinks: Vec::new(),
        }
    }
}

fn default_rescan_secs() -> u64 {
    30
}

#[derive(Debug, Deserialize)]
pub struct StaticSinkConfig {
    pub id: String,
    pub name: String,
}

impl From<&StaticSinkConfig> for Sink {
    fn from(config: &StaticSinkConfig) -> Self {
        Sink::new(&config.id, &config.name)
    }
}

impl CastwayConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}
