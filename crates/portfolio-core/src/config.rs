//! Runtime configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::PortfolioResult;

/// Default log filter.
pub const DEFAULT_LOG_FILTER: &str = "portfolio=info,portfolio_core=info";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    /// Directory holding the preferences database
    pub data_dir: PathBuf,
    /// Project catalog file replacing the built-in one
    pub catalog_path: Option<PathBuf>,
    /// Delay between a submission and the form reset
    pub reset_delay_ms: u64,
    /// Length of the simulated send
    pub send_delay_ms: u64,
    /// How often the app drains the scheduler
    pub tick_interval_ms: u64,
    /// Write JSONL logs here when set
    pub log_dir: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            catalog_path: None,
            reset_delay_ms: 3_000,
            send_delay_ms: 0,
            tick_interval_ms: 100,
            log_dir: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl PortfolioConfig {
    /// Read a JSON config file. Missing keys keep their defaults.
    pub fn load(path: impl AsRef<std::path::Path>) -> PortfolioResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir.join("preferences.redb")
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }

    pub fn send_delay(&self) -> Duration {
        Duration::from_millis(self.send_delay_ms)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }
}

/// `<platform data dir>/portfolio`, or `./portfolio` when there is none.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("portfolio")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = PortfolioConfig::default();
        assert_eq!(config.reset_delay(), Duration::from_secs(3));
        assert_eq!(config.send_delay(), Duration::ZERO);
        assert!(config.preferences_path().ends_with("preferences.redb"));
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: PortfolioConfig = serde_json::from_str(r#"{"reset_delay_ms": 500}"#).unwrap();
        assert_eq!(config.reset_delay_ms, 500);
        assert_eq!(config.tick_interval_ms, 100);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.json");
        std::fs::write(&path, r#"{"send_delay_ms": 250, "log_dir": "/tmp/logs"}"#).unwrap();
        let config = PortfolioConfig::load(&path).unwrap();
        assert_eq!(config.send_delay(), Duration::from_millis(250));
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/logs")));
    }

    #[test]
    fn tick_interval_never_zero() {
        let config = PortfolioConfig {
            tick_interval_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.tick_interval(), Duration::from_millis(1));
    }
}
