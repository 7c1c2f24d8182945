use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum AnhingaError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<AnhingaError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

impl AnhingaError {
    /// Strips any [`AnhingaError::Context`] layers and returns the innermost error.
    pub fn root(&self) -> &Self {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }

    pub fn is_unsupported_format(&self) -> bool {
        matches!(self.root(), Self::Domain(DomainError::UnsupportedFormat { .. }))
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self.root(),
            Self::Domain(DomainError::InvalidVolume { .. } | DomainError::InvalidPricing { .. })
        )
    }

    pub fn is_write(&self) -> bool {
        matches!(self.root(), Self::Infrastructure(InfrastructureError::Write { .. }))
    }
}

pub type Result<T> = std::result::Result<T, AnhingaError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid volume {field}: {reason}")]
    InvalidVolume { field: String, reason: String },

    #[error("Invalid pricing table: {reason}")]
    InvalidPricing { reason: String },

    #[error("Unsupported format: {format} (expected one of table, csv, json)")]
    UnsupportedFormat { format: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to write report: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open output '{path}': {source}")]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read '{path}': {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} input: {details}")]
    SerializationError { format: String, details: String },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::Write { source: err }
    }
}

impl From<std::io::Error> for AnhingaError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        // A failing sink surfaces through serde_json as an I/O error.
        if err.is_io() {
            return Self::Write { source: err.into() };
        }
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AnhingaError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for InfrastructureError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for AnhingaError {
    fn from(err: serde_yaml::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<AnhingaError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| AnhingaError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AnhingaError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
