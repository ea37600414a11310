//! API server configuration, loadable from TOML with environment overrides.

use serde::Deserialize;

/// Top-level API server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Listen address (e.g., "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// JSON catalog file. None serves the bundled sample catalog.
    #[serde(default)]
    pub catalog_path: Option<String>,
    /// Most garage sessions kept in memory before the least recently
    /// used one is evicted.
    #[serde(default = "default_max_garage_sessions")]
    pub max_garage_sessions: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_max_garage_sessions() -> usize {
    crate::garage::DEFAULT_MAX_SESSIONS
}

impl ApiConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load from `CARMATE_CONFIG` (if set), then apply environment overrides.
    pub fn load() -> anyhow::Result<Self> {
        let base = match std::env::var("CARMATE_CONFIG") {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };
        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `CARMATE_CATALOG`, `CARMATE_HOST`, and `PORT` overrides.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        if let Some(path) = lookup("CARMATE_CATALOG") {
            self.catalog_path = Some(path);
        }
        if let Some(host) = lookup("CARMATE_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.port = port
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid PORT '{port}': {e}"))?;
        }
        Ok(self)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            catalog_path: None,
            max_garage_sessions: default_max_garage_sessions(),
        }
    }
}
