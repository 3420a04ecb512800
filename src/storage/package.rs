//! Package manifest (`package.json`)
//!
//! Holds the template guard (`scheme`) and the `postinstall` hook that runs
//! setup. Removing both is what makes setup a one-shot operation.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};

use super::document::{self, ManifestError};
use crate::domain::{ProjectIdentity, TemplateGuard};

/// Which guard fields were deleted from the package manifest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GuardRemoval {
    pub removed_scheme: bool,
    pub removed_postinstall: bool,
}

/// A loaded package manifest
#[derive(Debug, Clone)]
pub struct PackageManifest {
    path: PathBuf,
    fields: Map<String, Value>,
}

impl PackageManifest {
    /// Loads the manifest, failing if it does not exist
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ManifestError> {
        let path = path.into();
        let fields = document::read_object(&path)?;
        Ok(Self { path, fields })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The guard marker, if it is a string
    pub fn scheme(&self) -> Option<&str> {
        self.fields.get("scheme").and_then(Value::as_str)
    }

    pub fn needs_setup(&self, guard: &TemplateGuard) -> bool {
        guard.needs_setup(self.scheme())
    }

    /// Builds the project identity from `name`
    pub fn identity(&self) -> Result<ProjectIdentity, ManifestError> {
        match self.fields.get("name") {
            Some(Value::String(name)) => Ok(ProjectIdentity::new(name.as_str())),
            Some(_) => Err(self.invalid_name("expected a string")),
            None => Err(self.invalid_name("missing")),
        }
    }

    fn invalid_name(&self, reason: &'static str) -> ManifestError {
        ManifestError::InvalidField {
            path: self.path.clone(),
            field: "name",
            reason,
        }
    }

    /// Deletes `scheme` and `scripts.postinstall` from the in-memory document
    pub fn strip_guard(&mut self) -> GuardRemoval {
        let removed_scheme = self.fields.shift_remove("scheme").is_some();

        let removed_postinstall = match self.fields.get_mut("scripts") {
            Some(Value::Object(scripts)) => scripts.shift_remove("postinstall").is_some(),
            _ => false,
        };

        GuardRemoval {
            removed_scheme,
            removed_postinstall,
        }
    }

    /// Writes the manifest back to its path
    pub fn save(&self) -> Result<(), ManifestError> {
        document::write(&self.path, &Value::Object(self.fields.clone()))
    }

    /// Re-reads the manifest from disk, strips the guard and saves it
    pub fn remove_guard(path: &Path) -> Result<GuardRemoval, ManifestError> {
        let mut manifest = Self::load(path)?;
        let removal = manifest.strip_guard();
        manifest.save()?;
        Ok(removal)
    }
}
