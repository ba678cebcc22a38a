use folio_store::Latency;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_CONFIG_NAME: &str = "folio.config.json";

/// Folio configuration file format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Address the API binds to
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Simulated store latency in milliseconds, none when null.
    /// With `latencyMaxMs` set this is the lower bound of a random delay.
    #[serde(default)]
    pub latency_ms: Option<u64>,

    #[serde(default)]
    pub latency_max_ms: Option<u64>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3030
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn latency(&self) -> Option<Latency> {
        let ms = Duration::from_millis;
        match (self.latency_ms, self.latency_max_ms) {
            (None, None) => None,
            (Some(fixed), None) => Some(Latency::fixed(ms(fixed))),
            (min, Some(max)) => Some(Latency::new(ms(min.unwrap_or(0)), ms(max))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            latency_ms: None,
            latency_max_ms: None,
        }
    }
}
