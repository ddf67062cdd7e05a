use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration as stored in TOML files (optional fields so absent keys can
/// be told apart from keys set to the default)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawLumenConfig {
    #[serde(default)]
    pub server: RawServerSection,

    #[serde(default)]
    pub storage: StorageSection,

    #[serde(default)]
    pub content: ContentSection,

    /// Replaces the stock curriculum wholesale when present
    pub topics: Option<BTreeMap<String, u32>>,
}

/// Server section as stored in TOML
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawServerSection {
    /// Host for the lumen server
    pub host: Option<String>,

    /// Port for the lumen server
    pub port: Option<u16>,
}

/// Final configuration with defaults applied
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LumenConfig {
    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub storage: StorageSection,

    #[serde(default)]
    pub content: ContentSection,

    /// Replaces the stock curriculum wholesale when present
    pub topics: Option<BTreeMap<String, u32>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    /// Host for the lumen server
    pub host: String,

    /// Port for the lumen server
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageSection {
    /// Directory holding the progress snapshot
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContentSection {
    /// Directory holding the reference content files
    pub dir: Option<PathBuf>,
}

/// Default host for the lumen server
pub const DEFAULT_HOST: &str = "127.0.0.1";
/// Default port for the lumen server
pub const DEFAULT_PORT: u16 = 5000;
