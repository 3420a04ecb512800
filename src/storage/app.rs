//! App manifest (`app.json`)
//!
//! Only fields that already exist under `expo` are overwritten; the updater
//! never adds keys. A missing app manifest is not an error.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use super::document::{self, ManifestError};
use crate::domain::ProjectIdentity;

/// Outcome of updating the app manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AppUpdate {
    /// The file was rewritten; lists the `expo` fields that were overwritten
    Updated { fields: Vec<&'static str> },
    /// The file does not exist
    Skipped,
}

/// Store for the app manifest
pub struct AppManifest {
    path: PathBuf,
}

impl AppManifest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Writes the project identity into the existing `expo` fields
    pub fn update(&self, identity: &ProjectIdentity) -> Result<AppUpdate, ManifestError> {
        if !self.exists() {
            return Ok(AppUpdate::Skipped);
        }

        let mut doc = document::read(&self.path)?;
        let fields = apply_identity(&mut doc, identity);
        document::write(&self.path, &doc)?;

        Ok(AppUpdate::Updated { fields })
    }
}

/// Overwrites `expo.name`, `expo.slug` and `expo.scheme` where present
pub fn apply_identity(doc: &mut Value, identity: &ProjectIdentity) -> Vec<&'static str> {
    let Some(expo) = doc.get_mut("expo").and_then(Value::as_object_mut) else {
        return Vec::new();
    };

    let replacements = [
        ("name", identity.name.as_str()),
        ("slug", identity.slug.as_str()),
        ("scheme", identity.slug.as_str()),
    ];

    let mut updated = Vec::new();
    for (key, value) in replacements {
        match expo.get_mut(key) {
            Some(slot) if is_set(slot) => {
                *slot = Value::String(value.to_string());
                updated.push(key);
            }
            _ => {}
        }
    }

    updated
}

/// A placeholder counts as set when it is truthy: `null`, `false`, `0` and
/// `""` are treated like a missing key
fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
