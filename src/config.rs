// src/config.rs
use std::path::PathBuf;

use anhinga_domain::OutputFormat;
use anhinga_infra::DocumentInput;
use anhinga_shared_kernel::{AnhingaError, PresentationError, PresentationResult};

use crate::cli::Args;

/// Fallback consulted when neither `--region` nor `AWS_REGION` is set.
pub const DEFAULT_REGION_ENV: &str = "AWS_DEFAULT_REGION";

/// Validated run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Empty when no region was given anywhere; priced as non-baseline.
    pub region: String,
    pub format: OutputFormat,
    pub input: DocumentInput,
    pub pricing: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub verbosity: u8,
}

impl TryFrom<Args> for Config {
    type Error = AnhingaError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let format: OutputFormat = args.format.parse()?;
        let region = resolve_region(args.region, std::env::var(DEFAULT_REGION_ENV).ok())?;
        let output = args.output.map(validate_output).transpose()?;

        Ok(Self {
            region,
            format,
            input: DocumentInput::from_arg(args.input.as_deref()),
            pricing: args.pricing,
            output,
            verbosity: args.verbose,
        })
    }
}

/// The explicit value wins; the fallback only fills an absent one.
fn resolve_region(explicit: Option<String>, fallback: Option<String>) -> PresentationResult<String> {
    match explicit {
        Some(region) => {
            let trimmed = region.trim();
            if trimmed.is_empty() {
                return Err(invalid("--region", &region, "must not be empty"));
            }
            Ok(trimmed.to_string())
        }
        None => Ok(fallback.map(|r| r.trim().to_string()).unwrap_or_default()),
    }
}

fn validate_output(path: PathBuf) -> PresentationResult<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(invalid("--output", "", "must not be empty"));
    }
    if path.is_dir() {
        return Err(invalid("--output", &path.display().to_string(), "is a directory"));
    }
    Ok(path)
}

fn invalid(flag: &str, value: &str, reason: &str) -> PresentationError {
    PresentationError::InvalidValue { flag: flag.to_string(), value: value.to_string(), reason: reason.to_string() }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn config(argv: &[&str]) -> Result<Config, AnhingaError> {
        let args = Args::parse_from(std::iter::once("anhinga").chain(argv.iter().copied()));
        Config::try_from(args)
    }

    #[test]
    fn builds_from_explicit_flags() {
        let config = config(&["-r", "eu-west-1", "-f", "JSON", "-i", "vols.json", "-o", "out.json", "-v"])
            .expect("config builds");
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.input, DocumentInput::Path(PathBuf::from("vols.json")));
        assert_eq!(config.output, Some(PathBuf::from("out.json")));
        assert_eq!(config.verbosity, 1);
    }

    #[test]
    fn unknown_format_is_unsupported() {
        let err = config(&["-r", "us-east-1", "-f", "xml"]).unwrap_err();
        assert!(err.is_unsupported_format());
    }

    #[test]
    fn blank_region_is_rejected() {
        let err = config(&["--region", "  "]).unwrap_err();
        match err {
            AnhingaError::Presentation(PresentationError::InvalidValue { flag, .. }) => assert_eq!(flag, "--region"),
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn directory_output_is_rejected() {
        let dir = std::env::temp_dir();
        let err = config(&["-r", "us-east-1", "-o", dir.to_str().expect("utf8 temp dir")]).unwrap_err();
        assert!(err.to_string().contains("--output"));
    }

    #[test]
    fn region_fallback_applies_only_when_absent() {
        assert_eq!(resolve_region(Some("ap-south-1".into()), Some("us-west-2".into())).unwrap(), "ap-south-1");
        assert_eq!(resolve_region(None, Some(" us-west-2 ".into())).unwrap(), "us-west-2");
        assert_eq!(resolve_region(None, None).unwrap(), "");
    }

    #[test]
    fn dash_input_reads_stdin() {
        let config = config(&["-r", "us-east-1", "-i", "-"]).expect("config builds");
        assert_eq!(config.input, DocumentInput::Stdin);
    }
}
