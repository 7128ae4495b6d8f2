use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::MatchOrder;

pub const CONFIG_FILE_NAME: &str = ".glossrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_root")]
    pub root: String,
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_call_names")]
    pub call_names: Vec<String>,
    /// Extra English → Korean phrases, merged over the built-in dictionary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dictionary: Option<String>,
    #[serde(default)]
    pub match_order: MatchOrder,
}

fn default_root() -> String {
    "./".to_string()
}

fn default_includes() -> Vec<String> {
    [
        "src/main",
        "src/preload",
        "src/shared",
        "src/utils",
        "src/native-modules",
    ]
    .map(String::from)
    .to_vec()
}

fn default_extensions() -> Vec<String> {
    vec!["ts".to_string()]
}

fn default_call_names() -> Vec<String> {
    ["debugLog", "console.log", "console.error", "console.warn"]
        .map(String::from)
        .to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: default_root(),
            includes: default_includes(),
            ignores: Vec::new(),
            extensions: default_extensions(),
            call_names: default_call_names(),
            dictionary: None,
            match_order: MatchOrder::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern is invalid or if `extensions` or
    /// `callNames` is empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Patterns without wildcards are literal directory paths.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        if self.extensions.iter().all(|e| e.trim().is_empty()) {
            bail!("'extensions' must list at least one file extension");
        }

        if self.call_names.iter().all(|c| c.trim().is_empty()) {
            bail!("'callNames' must list at least one diagnostic call");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, or None when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }

    /// Directory that relative paths in the config are resolved against.
    pub fn base_dir(&self, fallback: &Path) -> PathBuf {
        self.path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| fallback.to_path_buf())
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
