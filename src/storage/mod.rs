//! # Storage Layer
//!
//! File access for the manifests a template project carries.
//!
//! ## Files
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Package manifest | JSON | `package.json` (required) |
//! | App manifest | JSON | `app.json` (optional) |
//! | Settings | TOML | `template-setup.toml` (optional) |
//!
//! Manifests are read and written whole. Unrelated keys survive untouched
//! and keep their original order; output is 2-space indented JSON with a
//! trailing newline. Each write replaces the file via temp file + rename.
//!
//! ## Key Types
//!
//! - [`Project`] - Project root plus resolved settings
//! - [`PackageManifest`] - Guard inspection and removal
//! - [`AppManifest`] - Identity update of `expo` fields
//! - [`ManifestError`] - Failure taxonomy for manifest I/O

mod document;
mod package;
mod app;
mod config;
mod project;

pub use document::ManifestError;
pub use package::{GuardRemoval, PackageManifest};
pub use app::{apply_identity, AppManifest, AppUpdate};
pub use config::{Config, ConfigError, CONFIG_FILE};
pub use project::Project;
