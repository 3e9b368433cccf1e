use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::platform;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub agent: AgentConfig,
    #[serde(default)]
    pub polling: PollingConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where the agent lives and how to ask it to stop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Directory the agent writes its state files into
    /// (live.json, mood.json, internal_monologue.json) and reads inbox.json from.
    #[serde(default = "default_state_dir")]
    pub state_dir: PathBuf,
    /// Shell command run on exit to ask the agent to terminate.
    /// Empty = don't manage the agent's lifecycle.
    #[serde(default)]
    pub shutdown_command: String,
    /// Grace delay after the shutdown command before the shell exits.
    #[serde(default = "default_shutdown_grace_ms")]
    pub shutdown_grace_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollingConfig {
    /// Cadence for live.json — fast, it drives the orb animation.
    #[serde(default = "default_live_interval_ms")]
    pub live_interval_ms: u64,
    /// Cadence for the secondary panels (mood, monologue).
    #[serde(default = "default_panel_interval_ms")]
    pub panel_interval_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Max characters of a thought before the ellipsis.
    #[serde(default = "default_thought_max_chars")]
    pub thought_max_chars: usize,
    /// Energy at or below this renders the energy meter in the alert color.
    #[serde(default = "default_energy_alert_threshold")]
    pub energy_alert_threshold: f64,
    /// Momentum below this renders the momentum meter in the alert color.
    #[serde(default = "default_momentum_alert_threshold")]
    pub momentum_alert_threshold: f64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            state_dir: default_state_dir(),
            shutdown_command: String::new(),
            shutdown_grace_ms: default_shutdown_grace_ms(),
        }
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            live_interval_ms: default_live_interval_ms(),
            panel_interval_ms: default_panel_interval_ms(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            thought_max_chars: default_thought_max_chars(),
            energy_alert_threshold: default_energy_alert_threshold(),
            momentum_alert_threshold: default_momentum_alert_threshold(),
        }
    }
}

fn default_state_dir() -> PathBuf {
    platform::data_dir().join("agent")
}

fn default_shutdown_grace_ms() -> u64 {
    500
}

fn default_live_interval_ms() -> u64 {
    100
}

fn default_panel_interval_ms() -> u64 {
    250
}

fn default_thought_max_chars() -> usize {
    80
}

fn default_energy_alert_threshold() -> f64 {
    40.0
}

fn default_momentum_alert_threshold() -> f64 {
    -0.2
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        platform::config_dir().join("config.toml")
    }
}
