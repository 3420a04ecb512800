//! # Command-Line Interface
//!
//! `template-setup` personalizes a project cloned from the app template:
//! it writes the project name and slug into `app.json`, then removes the
//! `scheme` guard and the `postinstall` hook from `package.json` so it
//! never runs again.
//!
//! ## Exit Codes
//!
//! - `0` - setup completed, or the project was already configured
//! - `1` - a required file was missing, unreadable, malformed or unwritable
//!
//! ## Output Formats
//!
//! - `text` (default) - Human-readable progress
//! - `json` - A single report object on stdout
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! template-setup --verbose
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute setup.

mod app;
mod output;
mod configure;

pub use app::{execute, run, Cli};
pub use configure::SetupReport;
pub use output::{Output, OutputFormat};
