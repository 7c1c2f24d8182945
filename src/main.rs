// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use anhinga::{app, cli::Args, config::Config, logging};
use anhinga_shared_kernel::AnhingaError;
use clap::Parser;

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            exit_code(&err)
        }
    }
}

fn try_main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);
    let config = Config::try_from(args)?;
    tracing::debug!(?config, "configuration");
    app::run(&config)?;
    Ok(())
}

/// 2 for unusable arguments, 1 for everything else.
fn exit_code(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<AnhingaError>().map(AnhingaError::root) {
        Some(AnhingaError::Presentation(_)) => ExitCode::from(2),
        Some(root) if root.is_unsupported_format() => ExitCode::from(2),
        _ => ExitCode::FAILURE,
    }
}
