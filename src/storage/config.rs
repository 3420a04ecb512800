//! Configuration handling for template setup
//!
//! Settings live in an optional `template-setup.toml` at the project root.
//! Every key has a default, so a template without the file behaves exactly
//! like one with an empty file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::TEMPLATE_SCHEME;

/// File name of the optional settings file
pub const CONFIG_FILE: &str = "template-setup.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse configuration {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

/// Project-level setup configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Package manifest path, relative to the project root
    pub package_manifest: PathBuf,

    /// App manifest path, relative to the project root
    pub app_manifest: PathBuf,

    /// `scheme` value that marks an unconfigured template
    pub template_scheme: String,

    /// Guidance printed after a successful setup
    pub next_steps: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            package_manifest: PathBuf::from("package.json"),
            app_manifest: PathBuf::from("app.json"),
            template_scheme: TEMPLATE_SCHEME.to_string(),
            next_steps: vec![
                "Review app.json to verify configuration".to_string(),
                "Run: npx expo prebuild (watermelon db requires development build)".to_string(),
                "Run: npm run ios / npm run android".to_string(),
            ],
        }
    }
}

impl Config {
    /// Returns the settings file path for a project root
    pub fn path_for(project_root: &Path) -> PathBuf {
        project_root.join(CONFIG_FILE)
    }

    /// Loads configuration for a project, falling back to defaults
    pub fn for_project(project_root: &Path) -> Result<Self, ConfigError> {
        let path = Self::path_for(project_root);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path,
            message: e.to_string(),
        })
    }
}
