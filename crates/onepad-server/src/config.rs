//! Configuration for the onepad services.
//! Parsed from an optional TOML file; the listen port always comes from argv.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::ServerError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    /// Address the listener binds to; the port from argv is appended.
    #[serde(default = "default_bind_host")]
    pub bind_host: String,

    /// Per-connection deadline in seconds covering handshake through
    /// result. Absent = block indefinitely, matching the original
    /// service behaviour.
    pub io_timeout_secs: Option<u64>,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind_host: default_bind_host(),
            io_timeout_secs: None,
        }
    }
}

fn default_bind_host() -> String {
    "0.0.0.0".into()
}

impl ServerConfig {
    /// Load config from file, or default if the file is missing.
    pub fn load_or_default(path: &Path) -> Result<Self, ServerError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: ServerConfig = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn io_timeout(&self) -> Option<Duration> {
        self.server.io_timeout_secs.map(Duration::from_secs)
    }
}
