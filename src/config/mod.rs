use serde::Deserialize;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

fn default_verbose() -> bool {
    false
}

/// Optional settings file, overridden by command-line arguments
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Polygon source used when none is given on the command line
    #[serde(default)]
    pub polygons: Option<PathBuf>,
    /// Command source; stdin when absent
    #[serde(default)]
    pub commands: Option<PathBuf>,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl FileConfig {
    /// Read an explicitly requested config file; any failure is an error
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// First usable config file from the search paths, if any
    pub fn load() -> Option<Self> {
        Self::load_from(&get_config_paths())
    }

    pub fn load_from(paths: &[PathBuf]) -> Option<Self> {
        for path in paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => {
                        tracing::debug!(path = %path.display(), "loaded config file");
                        return Some(config);
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "failed to parse config file");
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("polyquery.toml"));
    paths.push(PathBuf::from(".polyquery.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("polyquery").join("config.toml"));
        paths.push(config_dir.join("polyquery.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".polyquery.toml"));
    }

    paths
}
