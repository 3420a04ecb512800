//! template-setup - one-shot personalization of an app template
//!
//! A freshly cloned template carries placeholder values in `app.json` and a
//! guard (`"scheme": "template-scheme"`) plus a `postinstall` hook in
//! `package.json`. Running setup replaces the placeholders with the real
//! project name and slug, then removes the guard and the hook.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{ProjectIdentity, Slug, TemplateGuard};
