use std::path::{Path, PathBuf};

use anyhow::Result;

use super::types::{
    DEFAULT_HOST, DEFAULT_PORT, LumenConfig, RawLumenConfig, ServerSection,
};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the default user path
    ///
    /// A missing file is not an error; everything falls back to defaults.
    pub fn load() -> Result<LumenConfig> {
        Self::load_from_path(&Self::user_config_path())
    }

    /// Load configuration from a specific file
    pub fn load_from_path(path: &Path) -> Result<LumenConfig> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            let raw: RawLumenConfig = toml::from_str(&contents)?;
            Ok(Self::finalize(raw))
        } else {
            Ok(LumenConfig::default())
        }
    }

    /// Default user config path
    pub fn user_config_path() -> PathBuf {
        lumen_paths::config_dir().join("config.toml")
    }

    /// Convert raw config to final config with defaults applied
    fn finalize(raw: RawLumenConfig) -> LumenConfig {
        LumenConfig {
            server: ServerSection {
                host: raw.server.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port: raw.server.port.unwrap_or(DEFAULT_PORT),
            },
            storage: raw.storage,
            content: raw.content,
            topics: raw.topics,
        }
    }
}
