//! Layered configuration for the interop catalog.
//!
//! Sources are merged with [figment], later layers overriding earlier ones:
//!
//! 1. Built-in defaults ([`Config::default`])
//! 2. `config.toml` in the platform config directory, if it exists
//! 3. A file passed explicitly by the caller (TOML, YAML or JSON, chosen by
//!    extension)
//! 4. Environment variables prefixed `INTEROP_`, with `__` separating nested
//!    keys (`INTEROP_ROTATION__INTERVAL_MS=5000`)

pub mod error;

use crate::error::{ErrorKind, Result};
use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use interop_catalog::DirectionPolicy;
use interop_catalog::models::{DEFAULT_BADGE_URL, DEFAULT_REGISTRY_URL};
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::instrument;

const ENV_PREFIX: &str = "INTEROP_";
const USER_CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory of library markdown files
    pub content_dir: PathBuf,
    pub rotation: RotationConfig,
    /// Base URL crate names are appended to for registry links
    pub registry_url: String,
    /// Base URL crate names are appended to for version badges
    pub badge_url: String,
    /// Treatment of records that do not pair exactly one language with Rust
    pub direction: DirectionPolicy,
    /// Default `tracing` filter when `RUST_LOG` is unset
    pub log_level: String,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            rotation: RotationConfig::default(),
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            badge_url: DEFAULT_BADGE_URL.to_string(),
            direction: DirectionPolicy::default(),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    /// Milliseconds each highlight stays on display
    pub interval_ms: u64,
}
impl Default for RotationConfig {
    fn default() -> Self {
        Self { interval_ms: 3000 }
    }
}
impl RotationConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Config {
    /// Loads and validates configuration from every layer.
    #[instrument(skip_all)]
    pub fn load(explicit: Option<impl AsRef<Path>>) -> Result<Self> {
        let mut files = Vec::new();
        if let Some(user) = Self::user_config_path().filter(|p| p.is_file()) {
            tracing::debug!(path = %user.display(), "Found user config file");
            files.push(user);
        }
        if let Some(path) = explicit {
            let path = path.as_ref();
            if !path.is_file() {
                exn::bail!(ErrorKind::NotFound(path.to_path_buf()));
            }
            files.push(path.to_path_buf());
        }
        let config: Self = Self::figment(files.as_slice()).extract().or_raise(|| ErrorKind::Load)?;
        config.validate()?;
        Ok(config)
    }

    /// Default location of the per-user config file.
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("rs", "", "interop").map(|dirs| dirs.config_dir().join(USER_CONFIG_FILE))
    }

    /// The merged provider stack over `files` in order, without validation.
    pub fn figment(files: &[impl AsRef<Path>]) -> Figment {
        let figment = Figment::from(Serialized::defaults(Self::default()));
        files
            .iter()
            .fold(figment, |figment, path| merge_file(figment, path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.rotation.interval_ms == 0 {
            exn::bail!(ErrorKind::Invalid("rotation.interval_ms"));
        }
        if self.registry_url.trim().is_empty() {
            exn::bail!(ErrorKind::Invalid("registry_url"));
        }
        Ok(())
    }
}

fn merge_file(figment: Figment, path: &Path) -> Figment {
    match path.extension().and_then(OsStr::to_str) {
        Some("yaml" | "yml") => figment.merge(Yaml::file(path)),
        Some("json") => figment.merge(Json::file(path)),
        _ => figment.merge(Toml::file(path)),
    }
}
