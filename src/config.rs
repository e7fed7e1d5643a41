//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Favorite category ids, shown first in the sidebar
    pub favorites: Option<Vec<String>>,
    /// Category selected when the app was last closed
    pub last_category: Option<String>,
    /// Directory where saved QR codes are written (defaults to the current
    /// directory)
    pub output_dir: Option<String>,
    /// Pixel width of saved QR images
    pub qr_width: Option<u32>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "qrgen", "qrgen-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Output directory for saved QR codes
    pub fn output_path(&self) -> PathBuf {
        self.output_dir
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.favorites.is_none());
        assert!(config.last_category.is_none());
        assert!(config.output_dir.is_none());
        assert!(config.qr_width.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            favorites: Some(vec!["wifi-auth".to_string()]),
            last_category: Some("payments-donations".to_string()),
            output_dir: Some("/tmp/qr".to_string()),
            qr_width: Some(600),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.favorites, Some(vec!["wifi-auth".to_string()]));
        assert_eq!(parsed.last_category, Some("payments-donations".to_string()));
        assert_eq!(parsed.output_dir, Some("/tmp/qr".to_string()));
        assert_eq!(parsed.qr_width, Some(600));
    }

    #[test]
    fn test_partial_serialization() {
        let config = TuiConfig {
            last_category: Some("wifi-auth".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.last_category, Some("wifi-auth".to_string()));
        assert!(parsed.favorites.is_none());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let json = "{}";
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert!(parsed.last_category.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"last_category": "wifi-auth", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.last_category, Some("wifi-auth".to_string()));
    }

    #[test]
    fn test_output_path_defaults_to_cwd() {
        let config = TuiConfig::default();
        assert_eq!(config.output_path(), PathBuf::from("."));

        let config = TuiConfig {
            output_dir: Some("/tmp/qr".to_string()),
            ..Default::default()
        };
        assert_eq!(config.output_path(), PathBuf::from("/tmp/qr"));
    }
}
