//! Parsing of JSON/YAML input documents (volume lists, pricing tables).

use std::path::Path;

use anhinga_shared_kernel::{InfraResult, InfrastructureError};
use serde::de::DeserializeOwned;

/// Document syntax, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    Json,
    Yaml,
}

impl Syntax {
    /// `.yaml`/`.yml` select YAML; anything else (including stdin) is JSON.
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

pub fn parse<T: DeserializeOwned>(text: &str, syntax: Syntax) -> InfraResult<T> {
    match syntax {
        Syntax::Json => serde_json::from_str(text).map_err(|err| InfrastructureError::SerializationError {
            format: syntax.name().to_string(),
            details: err.to_string(),
        }),
        Syntax::Yaml => parse_yaml(text),
    }
}

#[cfg(feature = "yaml")]
fn parse_yaml<T: DeserializeOwned>(text: &str) -> InfraResult<T> {
    serde_yaml::from_str(text).map_err(InfrastructureError::from)
}

#[cfg(not(feature = "yaml"))]
fn parse_yaml<T: DeserializeOwned>(_text: &str) -> InfraResult<T> {
    Err(InfrastructureError::SerializationError {
        format: Syntax::Yaml.name().to_string(),
        details: "YAML support is not enabled in this build".to_string(),
    })
}
