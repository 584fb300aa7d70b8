use config::builder::{ConfigBuilder, DefaultState};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// POST-style params: empty values dropped, `type` added.
    Create,
    /// PUT-style params: every field, empty values kept.
    Update,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub pretty: bool,
    pub mode: OutputMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
}

impl Config {
    fn with_defaults() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
        config::Config::builder()
            .set_default("input.path", "checks.json")?
            .set_default("output.pretty", true)?
            .set_default("output.mode", "create")
    }

    pub fn from_env() -> Result<Self, config::ConfigError> {
        let mut cfg = Self::with_defaults()?;

        if let Ok(path) = env::var("CHECKS_FILE") {
            cfg = cfg.set_override("input.path", path)?;
        }

        if let Ok(pretty) = env::var("CHECKS_PRETTY") {
            cfg = cfg.set_override("output.pretty", parse_pretty(&pretty))?;
        }

        if let Ok(mode) = env::var("CHECKS_MODE") {
            cfg = cfg.set_override("output.mode", mode.to_lowercase())?;
        }

        cfg.build()?.try_deserialize()
    }
}

/// Anything other than `true`/`false` falls back to pretty output.
fn parse_pretty(value: &str) -> bool {
    value.parse::<bool>().unwrap_or_else(|_| {
        warn!("Invalid CHECKS_PRETTY value {:?}, defaulting to true", value);
        true
    })
}
