//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level quizbank configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizbankConfig {
    /// Bank file, bank directory, or JSON snapshot to load.
    #[serde(default = "default_catalog")]
    pub catalog: String,
    /// Number of questions `sample` draws when no count is given.
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
    /// Fixed seed for `sample`; a fresh one is drawn when unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_catalog() -> String {
    "./question-banks".to_string()
}
fn default_sample_size() -> usize {
    5
}

impl Default for QuizbankConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            sample_size: default_sample_size(),
            seed: None,
        }
    }
}

impl QuizbankConfig {
    pub fn catalog_path(&self) -> PathBuf {
        PathBuf::from(&self.catalog)
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are not expanded again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + end];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `quizbank.toml` in the current directory
/// 2. `~/.config/quizbank/config.toml`
///
/// `QUIZBANK_CATALOG` overrides the catalog location.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizbankConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizbank.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("using config {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<QuizbankConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizbankConfig::default(),
    };

    if let Ok(catalog) = std::env::var("QUIZBANK_CATALOG") {
        config.catalog = catalog;
    }
    config.catalog = resolve_env_vars(&config.catalog);

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizbank"))
}
