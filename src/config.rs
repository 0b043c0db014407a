//! Configuration file for logicmedic.
//!
//! An optional YAML file sets defaults the CLI would otherwise need flags for.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::analysis::get_analyzer;
use crate::detect::{AnalysisOptions, Rule};

/// File names searched for in the working directory, then the user config dir.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &["logicmedic.yaml", ".logicmedic.yaml"];

/// Output formats the CLI can render.
pub const FORMATS: &[&str] = &["pretty", "text", "json"];

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Language used when it cannot be inferred from a file extension.
    #[serde(default)]
    pub default_language: Option<String>,
    /// "pretty" (default), "text" or "json"
    #[serde(default)]
    pub format: Option<String>,
    /// Rule ids whose findings are dropped (e.g. "print_output").
    #[serde(default)]
    pub skip_rules: Vec<String>,
    /// Glob patterns for paths to exclude from directory scans (e.g. "**/venv/**")
    #[serde(default)]
    pub excluded_paths: Vec<String>,
}

impl Config {
    /// Parse a config from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Returns the output format (defaults to "pretty").
    pub fn get_format(&self) -> &str {
        self.format.as_deref().unwrap_or("pretty")
    }

    /// Check if a path should be excluded based on excluded_paths patterns.
    pub fn is_path_excluded(&self, path: &Path) -> bool {
        if self.excluded_paths.is_empty() {
            return false;
        }

        let path_str = path.to_string_lossy();

        for pattern in &self.excluded_paths {
            if let Ok(glob) = globset::Glob::new(pattern) {
                let matcher = glob.compile_matcher();
                if matcher.is_match(&*path_str) {
                    return true;
                }
            }
        }
        false
    }

    /// Detection options derived from this config.
    ///
    /// Unknown rule ids are ignored here; [`validate`] rejects them.
    pub fn analysis_options(&self) -> AnalysisOptions {
        let skip_rules: HashSet<Rule> = self
            .skip_rules
            .iter()
            .filter_map(|id| Rule::parse(id))
            .collect();
        AnalysisOptions { skip_rules }
    }
}

/// Find a config file: the working directory first, then the user config dir.
pub fn discover(cwd: &Path) -> Option<PathBuf> {
    for name in DEFAULT_CONFIG_NAMES {
        let path = cwd.join(name);
        if path.is_file() {
            return Some(path);
        }
    }

    let dirs = directories::ProjectDirs::from("", "", "logicmedic")?;
    let path = dirs.config_dir().join(DEFAULT_CONFIG_NAMES[0]);
    path.is_file().then_some(path)
}

/// Load the explicit config path, or the discovered one, or defaults.
pub fn load(explicit: Option<&Path>) -> anyhow::Result<Config> {
    let path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => discover(&std::env::current_dir()?),
    };

    let config = match path {
        Some(p) => {
            tracing::debug!(path = %p.display(), "loading config");
            Config::parse_file(&p)
                .map_err(|e| anyhow::anyhow!("cannot read config {}: {}", p.display(), e))?
        }
        None => Config::default(),
    };

    validate(&config)?;
    Ok(config)
}

/// Validate a config for correctness.
pub fn validate(config: &Config) -> anyhow::Result<()> {
    if let Some(lang) = &config.default_language {
        if get_analyzer(lang).is_none() {
            anyhow::bail!("invalid default_language {:?}, must be 'python' or 'java'", lang);
        }
    }

    if let Some(format) = &config.format {
        if !FORMATS.contains(&format.as_str()) {
            anyhow::bail!(
                "invalid format {:?}, must be one of: {}",
                format,
                FORMATS.join(", ")
            );
        }
    }

    for id in &config.skip_rules {
        if Rule::parse(id).is_none() {
            anyhow::bail!("unknown rule {:?} in skip_rules", id);
        }
    }

    for pattern in &config.excluded_paths {
        globset::Glob::new(pattern)
            .map_err(|e| anyhow::anyhow!("invalid excluded_paths pattern {:?}: {}", pattern, e))?;
    }

    Ok(())
}
