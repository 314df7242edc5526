use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;
use crate::export::DEFAULT_EXPORT_FILE;
use crate::sources::MasterSource;

/// Configuration for the bookmark manager
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path or http(s) URL of the master bookmark list
    #[serde(default = "default_master_source")]
    pub master_source: String,

    /// Directory holding the local storage slots
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Timeout for fetching the master list
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// File name used when exporting without an explicit path
    #[serde(default = "default_export_file")]
    pub export_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            master_source: default_master_source(),
            data_dir: default_data_dir(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            export_file: default_export_file(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::open(path).map_err(io_error)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents).map_err(io_error)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn master_source(&self) -> MasterSource {
        MasterSource::parse(&self.master_source)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

/// Default value for master_source
fn default_master_source() -> String {
    "bookmarks.json".to_string()
}

/// Default data directory, falling back to the working directory
fn default_data_dir() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join("quick-links"),
        None => PathBuf::from(".quick-links"),
    }
}

fn default_fetch_timeout_secs() -> u64 {
    10
}

fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config.master_source, "bookmarks.json");
        assert_eq!(config.fetch_timeout(), Duration::from_secs(10));
        assert_eq!(config.export_file, "my-bookmarks.json");
        assert!(
            config.data_dir.ends_with("quick-links") || config.data_dir.ends_with(".quick-links")
        );
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_json(
            r#"{
                "master_source": "https://example.com/links.json",
                "data_dir": "/tmp/ql",
                "fetch_timeout_secs": 3
            }"#,
        )
        .unwrap();
        assert!(matches!(config.master_source(), MasterSource::Http(_)));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/ql"));
        assert_eq!(config.fetch_timeout_secs, 3);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"export_file": "links.json"}"#).unwrap();
        assert_eq!(AppConfig::from_file(&path).unwrap().export_file, "links.json");

        let missing = AppConfig::from_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io { .. }));
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            AppConfig::from_json("{\"fetch_timeout_secs\": \"soon\"}"),
            Err(ConfigError::Parse(_))
        ));
    }
}
