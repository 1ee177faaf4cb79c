use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use scholaris_model::UserId;

/// Console configuration, persisted as JSON in the platform config dir.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the Remote Directory Service
    pub server_url: String,
    /// Operator identity recorded on every mutation (created-by/updated-by).
    /// Stands in for a session-derived identity until real authentication
    /// lands upstream.
    pub operator_id: UserId,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:5194".to_string(),
            operator_id: UserId(1),
        }
    }
}

impl Config {
    /// Load from the default location, then apply environment overrides
    /// (`SCHOLARIS_SERVER_URL`, `SCHOLARIS_OPERATOR_ID`).
    pub fn load() -> Self {
        let mut config = Self::default_path()
            .and_then(|path| Self::load_from(&path))
            .unwrap_or_default();

        if let Ok(url) = std::env::var("SCHOLARIS_SERVER_URL") {
            config.server_url = url;
        }
        if let Ok(raw) = std::env::var("SCHOLARIS_OPERATOR_ID") {
            match raw.parse::<i64>() {
                Ok(id) => config.operator_id = UserId(id),
                Err(_) => {
                    warn!("Ignoring unparsable SCHOLARIS_OPERATOR_ID: {raw}");
                }
            }
        }

        config
    }

    /// Load from an explicit path; `None` when missing or unreadable.
    pub fn load_from(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Persist to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        match Self::default_path() {
            Some(path) => self.save_to(&path),
            None => Ok(()),
        }
    }

    fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("scholaris").join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_service() {
        let config = Config::default();
        assert_eq!(config.server_url, "http://localhost:5194");
        assert_eq!(config.operator_id, UserId(1));
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            server_url: "https://directory.example.org".to_string(),
            operator_id: UserId(42),
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.server_url, config.server_url);
        assert_eq!(loaded.operator_id, config.operator_id);
    }

    #[test]
    fn unreadable_file_yields_none() {
        assert!(Config::load_from(Path::new("/nonexistent/config.json"))
            .is_none());
    }
}
