//! Project root handling
//!
//! Resolves manifest paths against the project root and hands out the
//! manifest stores.

use std::path::PathBuf;

use super::{AppManifest, Config, ConfigError, ManifestError, PackageManifest};
use crate::domain::TemplateGuard;

/// A project checkout being set up
pub struct Project {
    root: PathBuf,
    config: Config,
}

impl Project {
    /// Opens the project at `root`, loading `template-setup.toml` if present
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let root = root.into();
        let config = Config::for_project(&root)?;
        Ok(Self { root, config })
    }

    /// Creates a project with explicit configuration
    #[cfg(test)]
    pub(crate) fn with_config(root: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn package_manifest_path(&self) -> PathBuf {
        self.root.join(&self.config.package_manifest)
    }

    pub fn app_manifest_path(&self) -> PathBuf {
        self.root.join(&self.config.app_manifest)
    }

    pub fn guard(&self) -> TemplateGuard {
        TemplateGuard::new(self.config.template_scheme.as_str())
    }

    /// Loads the package manifest (required)
    pub fn package_manifest(&self) -> Result<PackageManifest, ManifestError> {
        PackageManifest::load(self.package_manifest_path())
    }

    /// Returns the app manifest store (the file itself is optional)
    pub fn app_manifest(&self) -> AppManifest {
        AppManifest::new(self.app_manifest_path())
    }
}
