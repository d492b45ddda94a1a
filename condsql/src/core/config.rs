use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::condition::ParseLimits;
use crate::utils::path::expand_path;

use super::cli::CliConfig;
use super::constants::{APP_DOT_FOLDER, CONFIG_FILE_NAME, DEFAULT_TRIM, DEFAULT_WHERE_KEYWORD};

// =============================================================================
// Resolved Configuration
// =============================================================================

/// How compiled fragments are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Prefix with `WHERE`, printing nothing for an unconstrained tree
    pub where_keyword: bool,
    /// Strip the padding spaces around the fragment
    pub trim: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            where_keyword: DEFAULT_WHERE_KEYWORD,
            trim: DEFAULT_TRIM,
        }
    }
}

/// Fully resolved application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub limits: ParseLimits,
    pub output: OutputConfig,
}

// =============================================================================
// File Configuration
// =============================================================================

/// Limits section (from JSON config file)
#[derive(Debug, Default, Clone, Deserialize)]
pub struct LimitsFileConfig {
    pub max_bytes: Option<usize>,
    pub max_depth: Option<usize>,
}

/// Output section (from JSON config file)
#[derive(Debug, Default, Clone, Deserialize)]
pub struct OutputFileConfig {
    pub where_keyword: Option<bool>,
    pub trim: Option<bool>,
}

/// File-based configuration (JSON)
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub limits: Option<LimitsFileConfig>,
    pub output: Option<OutputFileConfig>,
    #[serde(flatten)]
    pub extra: serde_json::Value,
}

impl FileConfig {
    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "Loading config file");
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        tracing::trace!(config = ?config, "Parsed config file");
        Ok(config)
    }

    /// Top-level keys this crate does not recognise
    fn unknown_fields(&self) -> Vec<&str> {
        match &self.extra {
            serde_json::Value::Object(map) => map.keys().map(|k| k.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    fn warn_unknown_fields(&self) {
        let unknown = self.unknown_fields();
        if !unknown.is_empty() {
            tracing::warn!(
                fields = %unknown.join(", "),
                "Unknown fields in config file (possible typos)"
            );
        }
    }

    /// Merge another FileConfig into this one (other takes precedence)
    fn merge(&mut self, other: FileConfig) {
        if let Some(limits) = other.limits {
            let current = self.limits.get_or_insert_with(LimitsFileConfig::default);
            if limits.max_bytes.is_some() {
                tracing::trace!(max_bytes = ?limits.max_bytes, "Merging limits.max_bytes");
                current.max_bytes = limits.max_bytes;
            }
            if limits.max_depth.is_some() {
                tracing::trace!(max_depth = ?limits.max_depth, "Merging limits.max_depth");
                current.max_depth = limits.max_depth;
            }
        }

        if let Some(output) = other.output {
            let current = self.output.get_or_insert_with(OutputFileConfig::default);
            if output.where_keyword.is_some() {
                tracing::trace!(where_keyword = ?output.where_keyword, "Merging output.where_keyword");
                current.where_keyword = output.where_keyword;
            }
            if output.trim.is_some() {
                tracing::trace!(trim = ?output.trim, "Merging output.trim");
                current.trim = output.trim;
            }
        }
    }
}

impl AppConfig {
    /// Load configuration from all sources
    ///
    /// Priority (lowest to highest):
    /// 1. Defaults
    /// 2. Profile directory config (~/.condsql/condsql.json)
    /// 3. Local directory config OR CLI-specified config path
    /// 4. CLI arguments (which include env var fallbacks via clap)
    pub fn load(cli: &CliConfig) -> Result<Self> {
        Self::load_with_profile(cli, get_profile_config_path().as_deref())
    }

    fn load_with_profile(cli: &CliConfig, profile_path: Option<&Path>) -> Result<Self> {
        tracing::debug!("Loading application configuration");
        tracing::trace!(cli = ?cli, "CLI config");

        let mut file_config = FileConfig::default();
        let mut found_configs: Vec<String> = Vec::new();

        // 1. Profile dir - skip if not exists
        if let Some(profile_path) = profile_path
            && profile_path.exists()
        {
            let profile_config = FileConfig::load_from_file(profile_path)?;
            profile_config.warn_unknown_fields();
            file_config.merge(profile_config);
            found_configs.push(profile_path.display().to_string());
        }

        // 2. CLI-specified path OR local directory
        let overlay_path = if let Some(ref path) = cli.config {
            let expanded = expand_path(&path.to_string_lossy());
            if !expanded.exists() {
                anyhow::bail!("Config file not found: {}", expanded.display());
            }
            Some(expanded)
        } else {
            let local = PathBuf::from(CONFIG_FILE_NAME);
            if local.exists() { Some(local) } else { None }
        };

        if let Some(path) = overlay_path {
            let overlay_config = FileConfig::load_from_file(&path)?;
            overlay_config.warn_unknown_fields();
            file_config.merge(overlay_config);
            found_configs.push(path.display().to_string());
        }

        tracing::debug!(configs = ?found_configs, "Config files loaded");

        // 3. Layer configs: defaults -> file config -> CLI/env overrides
        let file_limits = file_config.limits.unwrap_or_default();
        let file_output = file_config.output.unwrap_or_default();
        let defaults = AppConfig::default();

        let limits = ParseLimits {
            max_bytes: cli
                .max_bytes
                .or(file_limits.max_bytes)
                .unwrap_or(defaults.limits.max_bytes),
            max_depth: cli
                .max_depth
                .or(file_limits.max_depth)
                .unwrap_or(defaults.limits.max_depth),
        };

        // Output flags: file config sets the default, CLI flags only switch on
        let where_keyword = cli.where_keyword
            || file_output
                .where_keyword
                .unwrap_or(defaults.output.where_keyword);
        let trim = !cli.no_trim && file_output.trim.unwrap_or(defaults.output.trim);

        let config = Self {
            limits,
            output: OutputConfig {
                where_keyword,
                trim,
            },
        };
        tracing::debug!(config = ?config, "Configuration resolved");
        Ok(config)
    }
}

fn get_profile_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(APP_DOT_FOLDER).join(CONFIG_FILE_NAME))
}
