use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Client configuration, loaded from YAML.
///
/// Only `base_url` is required; everything else has a sensible default.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the file server, e.g. "http://localhost:8080"
    pub base_url: String,

    /// Namespace prefix for persisted preference keys
    #[serde(default = "default_prefs_namespace")]
    pub prefs_namespace: String,

    /// Command used to open download URLs (e.g. "xdg-open")
    #[serde(default)]
    pub open_command: Option<String>,
}

fn default_prefs_namespace() -> String {
    "filetui".to_string()
}

impl Config {
    /// Default config location: `<config_dir>/filetui/config.yaml`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("filetui")
            .join("config.yaml")
    }

    /// Load configuration, merging an optional `--server` override.
    ///
    /// Resolution order:
    /// 1. Explicit `--config` path (must exist and parse)
    /// 2. The default path, if a file is present there
    /// 3. `--server` alone, with defaults for everything else
    pub fn load(explicit: Option<&Path>, server_override: Option<String>) -> Result<Self> {
        let path = match explicit {
            Some(p) => Some(p.to_path_buf()),
            None => {
                let default = Self::default_path();
                default.exists().then_some(default)
            }
        };

        let mut config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file {}", path.display()))?;
                serde_yaml::from_str::<Config>(&raw)
                    .with_context(|| format!("Failed to parse config file {}", path.display()))?
            }
            None => {
                let base_url = server_override.clone().context(
                    "No config file found. Create one (see --help) or pass --server <URL>",
                )?;
                Config {
                    base_url,
                    prefs_namespace: default_prefs_namespace(),
                    open_command: None,
                }
            }
        };

        if let Some(server) = server_override {
            config.base_url = server;
        }
        config.base_url = config.base_url.trim_end_matches('/').to_string();

        Ok(config)
    }
}
