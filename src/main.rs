//! template-setup - personalizes a freshly cloned app template

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = template_setup::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
