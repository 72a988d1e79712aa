use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use self::lookup::LookupConfig;
use self::ui::UiConfig;

pub mod lookup;
pub mod ui;

fn default_log_format() -> String {
    "text".to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub lookup: LookupConfig,
    pub ui: UiConfig,

    /// `text` or `json`
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lookup: LookupConfig::default(),
            ui: UiConfig::default(),
            log_format: default_log_format(),
        }
    }
}

impl Config {
    /// Build from process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn new() -> Self {
        let log_format = env::var("WORDUP_LOG_FORMAT").unwrap_or_else(|_| default_log_format());

        Config {
            lookup: LookupConfig::new(),
            ui: UiConfig::new(),
            log_format,
        }
    }

    /// Load a JSON profile. Missing fields fall back to defaults.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        tracing::info!("Loading config profile from {}", path.display());
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file {}", path.display()))?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse config JSON")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn partial_profile_keeps_defaults() {
        let config = Config::from_json(r#"{ "lookup": { "api_key": "secret" } }"#).unwrap();

        assert_eq!(config.lookup.api_key, "secret");
        assert_eq!(config.lookup.api_url, "http://localhost:3000/words");
        assert_eq!(config.ui.drawer_breakpoint, 768);
        assert_eq!(config.ui.viewport_width, 1024);
        assert_eq!(config.log_format, "text");
    }

    #[test]
    fn empty_profile_is_default() {
        let config = Config::from_json("{}").unwrap();
        assert!(config.lookup.api_key.is_empty());
        assert_eq!(config.ui.drawer_breakpoint, UiConfig::default().drawer_breakpoint);
    }

    #[test]
    fn malformed_profile_is_an_error() {
        assert!(Config::from_json("{ lookup: ").is_err());
    }

    #[test]
    fn missing_profile_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = Config::from_file(&path).unwrap_err();
        assert!(err.to_string().starts_with("Failed to open config file"));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn profile_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "ui": {{ "viewport_width": 640 }}, "log_format": "json" }}"#).unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.ui.viewport_width, 640);
        assert_eq!(config.log_format, "json");
        assert_eq!(config.lookup.api_url, "http://localhost:3000/words");
    }

    #[test]
    fn unreadable_profile_reports_parse_context() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config file"));
    }
}
