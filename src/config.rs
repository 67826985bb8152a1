use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::fs;

use crate::core::RhythmMode;
use crate::nodes::classifier::DEFAULT_WINDOW_SIZE;

/// Settings for a monitoring session, loaded from JSON.
///
/// Missing fields take their defaults, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Cadence of generate/classify steps
    pub sample_interval_ms: u64,

    /// Classifier history length
    pub window_size: usize,

    /// Initial rhythm to simulate; unknown names fall back to normal
    pub mode: String,

    /// Initial motion level, clamped to [0, 1] when applied
    pub motion_level: f64,

    /// Fixed seed for reproducible runs
    pub seed: Option<u64>,

    /// Event channel depth between the session and its consumer
    pub channel_capacity: usize,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: 100,
            window_size: DEFAULT_WINDOW_SIZE,
            mode: RhythmMode::Normal.as_str().to_string(),
            motion_level: 0.0,
            seed: None,
            channel_capacity: 100,
        }
    }
}

impl MonitorConfig {
    pub fn from_json(config: Value) -> Result<Self> {
        let config: MonitorConfig =
            serde_json::from_value(config).context("Failed to parse monitor config")?;
        config.validate()?;
        Ok(config)
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let value: Value = serde_json::from_str(&content).context("Failed to parse config JSON")?;
        Self::from_json(value)
    }

    pub fn validate(&self) -> Result<()> {
        if self.sample_interval_ms == 0 {
            return Err(anyhow!("sample_interval_ms must be greater than zero"));
        }
        if self.window_size == 0 {
            return Err(anyhow!("window_size must be greater than zero"));
        }
        if self.channel_capacity == 0 {
            return Err(anyhow!("channel_capacity must be greater than zero"));
        }
        Ok(())
    }

    pub fn rhythm_mode(&self) -> RhythmMode {
        RhythmMode::from(self.mode.as_str())
    }

    pub fn sample_interval_secs(&self) -> f64 {
        self.sample_interval_ms as f64 / 1000.0
    }
}
