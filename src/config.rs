//! Configuration loading and management
//!
//! Handles parsing of the optional `declutter.toml` file in the data
//! directory.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Access gate configuration
    #[serde(default)]
    pub gate: GateConfig,

    /// Share configuration
    #[serde(default)]
    pub share: ShareConfig,
}

/// Access gate configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateConfig {
    /// Webhook URL the sign-in form posts to
    #[serde(default = "default_webhook_url")]
    pub webhook_url: String,
}

fn default_webhook_url() -> String {
    "https://hook.eu2.make.com/5scjpeeghsig6zyptpjkv4ljo3966rod".to_string()
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            webhook_url: default_webhook_url(),
        }
    }
}

/// Share configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Hand the summary to the platform opener; when false the summary
    /// is printed for manual copy instead
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Page URL included in the shared summary (omitted when empty)
    #[serde(default)]
    pub page_url: String,
}

fn default_true() -> bool {
    true
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            page_url: String::new(),
        }
    }
}

impl Config {
    /// Load configuration from a `declutter.toml` file
    pub fn load(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the data directory, or return defaults
    pub fn load_from_dir(data_dir: &Path) -> Self {
        let config_path = data_dir.join(crate::storage::CONFIG_FILE);
        if config_path.exists() {
            Self::load(&config_path).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> crate::error::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> crate::error::Result<()> {
        let url = self.gate.webhook_url.trim();
        if url.is_empty() {
            return Err(crate::error::Error::InvalidConfig(
                "gate.webhook_url cannot be empty".to_string(),
            ));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(crate::error::Error::InvalidConfig(format!(
                "gate.webhook_url must be an http(s) URL, got '{url}'"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_are_expected() {
        let cfg = Config::default();
        assert!(cfg.gate.webhook_url.starts_with("https://hook.eu2.make.com/"));
        assert!(cfg.share.enabled);
        assert!(cfg.share.page_url.is_empty());
    }

    #[test]
    fn load_parses_overrides() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("declutter.toml");
        let content = r#"
[gate]
webhook_url = "http://127.0.0.1:9999/hook"

[share]
enabled = false
page_url = "https://example.com/checklist"
"#;
        fs::write(&path, content.trim()).expect("write config");

        let cfg = Config::load(&path).expect("load config");
        assert_eq!(cfg.gate.webhook_url, "http://127.0.0.1:9999/hook");
        assert!(!cfg.share.enabled);
        assert_eq!(cfg.share.page_url, "https://example.com/checklist");
    }

    #[test]
    fn invalid_webhook_url_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("declutter.toml");
        fs::write(&path, "[gate]\nwebhook_url = \"ftp://nope\"").expect("write config");

        let err = Config::load(&path).expect_err("invalid config");
        match err {
            crate::error::Error::InvalidConfig(_) => {}
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn load_from_dir_defaults_when_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = Config::load_from_dir(dir.path());
        assert!(cfg.share.enabled);
    }

    #[test]
    fn load_from_dir_reads_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join("declutter.toml"),
            "[share]\nenabled = false",
        )
        .expect("write config");

        let cfg = Config::load_from_dir(dir.path());
        assert!(!cfg.share.enabled);
    }

    #[test]
    fn save_writes_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.toml");
        let cfg = Config::default();
        cfg.save(&path).expect("save config");

        let written = fs::read_to_string(&path).expect("read config");
        assert!(written.contains("webhook_url"));
    }
}
