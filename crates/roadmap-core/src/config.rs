//! Configuration types for roadmap.
//!
//! [`Config::load`] layers, lowest to highest priority: the embedded defaults,
//! `~/.config/roadmap/config.toml` (or an explicit path), then `ROADMAP_*`
//! environment variables (`ROADMAP_SERVER__PORT=9000`). [`Config::defaults`]
//! returns the embedded defaults without touching the filesystem or the
//! environment (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

/// Public roadmap v2 endpoint. Supplied as the serde default for
/// `[feed].url`, not through the embedded TOML.
pub const DEFAULT_FEED_URL: &str = "https://www.microsoft.com/releasecommunications/api/v2/m365";

const DEFAULT_CONFIG: &str = r#"
[feed]
timeout_secs = 30

[server]
host = "127.0.0.1"
port = 8000

[search]
default_limit = 10
"#;

const ENV_PREFIX: &str = "ROADMAP";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// `[feed]` section: where the roadmap snapshot comes from.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_feed_url")]
    pub url: String,
    /// Per-request timeout for the upstream fetch.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_feed_url() -> String { DEFAULT_FEED_URL.to_string() }
fn default_timeout_secs() -> u64 { 30 }

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: default_feed_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// `[server]` section: bind address for the HTTP transport.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8000 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// `[search]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Used when a request omits `limit`. Clamped like any caller value.
    #[serde(default = "default_limit")]
    pub default_limit: i64,
}

fn default_limit() -> i64 { crate::filter::DEFAULT_LIMIT }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load defaults, then the config file (`path` or the per-user default,
    /// optional either way), then `ROADMAP_*` environment overrides.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let file = path.map(Path::to_path_buf).unwrap_or_else(config_path);
        tracing::debug!(path = %file.display(), "loading config");

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(file.as_path()).required(path.is_some()))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// `host:port` for the HTTP transport.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("roadmap")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
