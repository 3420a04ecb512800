//! Main CLI application structure

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use super::configure::{self, SetupReport};
use super::output::{Output, OutputFormat};
use crate::storage::Project;

#[derive(Parser)]
#[command(name = "template-setup")]
#[command(author, version, about = "Personalize a freshly cloned app template")]
pub struct Cli {
    /// Project root containing package.json
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    execute(&cli).map(|_| ())
}

/// Runs setup with already-parsed arguments
pub fn execute(cli: &Cli) -> Result<SetupReport> {
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("template-setup starting");
    output.verbose_ctx("init", &format!("Project root: {}", cli.root.display()));

    let project = Project::open(&cli.root)
        .with_context(|| format!("Failed to open project at {}", cli.root.display()))?;

    let report = configure::run(&project, &output)?;

    if output.is_json() {
        output.data(&report);
    }

    output.verbose("Setup finished");
    Ok(report)
}
