//! Slug derivation for project names
//!
//! A slug is the project name lowercased, with every character outside
//! `[a-z0-9-]` replaced by a single `-`. Runs of separators are kept as-is,
//! so `"My App!"` becomes `"my-app-"`.

use serde::Serialize;
use std::fmt;

/// Lowercase, URL-safe identifier derived from a project name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Derives a slug from a project name
    pub fn from_name(name: &str) -> Self {
        let slug = name
            .to_lowercase()
            .chars()
            .map(|c| if is_slug_char(c) { c } else { '-' })
            .collect();

        Self(slug)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_slug_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
