use crate::algorithm::Algorithm;
use crate::checksum::{DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE};
use crate::error::FixityError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Host init-param key carrying the plugin version tag.
pub const PLUGIN_VERSION_INIT_PARAM: &str = "PLUGIN_VERSION_INIT_PARAM";
/// Host init-param key selecting the digest algorithm.
pub const ALGORITHM_INIT_PARAM: &str = "ALGORITHM_INIT_PARAM";
/// Host init-param key overriding the read chunk size in bytes.
pub const CHUNK_SIZE_INIT_PARAM: &str = "CHUNK_SIZE_INIT_PARAM";

fn default_algorithm() -> String {
    Algorithm::default().name().to_string()
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

/// Checker configuration loaded from `~/.config/fixity/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixityConfig {
    /// Digest algorithm name, e.g. "SHA-512". Fixed for the life of a checker.
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    /// Version tag reported in the agent identity. Falls back to the crate version.
    #[serde(default)]
    pub plugin_version: Option<String>,
    /// Read chunk size in bytes, at most 64 MiB.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

impl Default for FixityConfig {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
            plugin_version: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl FixityConfig {
    /// Build from the string map a repository host passes at plugin init.
    /// Missing keys keep their defaults; unknown keys are ignored.
    pub fn from_init_params(params: &HashMap<String, String>) -> Result<Self, FixityError> {
        let mut cfg = FixityConfig::default();
        if let Some(v) = params.get(PLUGIN_VERSION_INIT_PARAM) {
            let v = v.trim();
            if !v.is_empty() {
                cfg.plugin_version = Some(v.to_string());
            }
        }
        if let Some(a) = params.get(ALGORITHM_INIT_PARAM) {
            if !a.trim().is_empty() {
                cfg.algorithm = a.trim().to_string();
            }
        }
        if let Some(c) = params.get(CHUNK_SIZE_INIT_PARAM) {
            cfg.chunk_size = c.trim().parse().map_err(|_| {
                FixityError::InvalidConfig(format!("{} is not a byte count: {:?}", CHUNK_SIZE_INIT_PARAM, c))
            })?;
        }
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check the algorithm is available and the chunk size is usable.
    pub fn validate(&self) -> Result<Algorithm, FixityError> {
        if self.chunk_size == 0 {
            return Err(FixityError::InvalidConfig(
                "chunk_size must be at least 1 byte".to_string(),
            ));
        }
        if self.chunk_size > MAX_CHUNK_SIZE {
            return Err(FixityError::InvalidConfig(format!(
                "chunk_size {} exceeds maximum of {} bytes",
                self.chunk_size, MAX_CHUNK_SIZE
            )));
        }
        Algorithm::from_name(&self.algorithm)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fixity")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FixityConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FixityConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FixityConfig = toml::from_str(&data)?;
    cfg.validate()?;
    Ok(cfg)
}
