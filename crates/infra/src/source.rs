//! Volume acquisition from an already-fetched document.
//!
//! Three document shapes are understood:
//!
//! - a bare array of `{volumeId, volumeType, size, state}` objects,
//! - a rendered JSON report (`{"volumes": [...], "totalCost": ..}`); costs
//!   in it are ignored and recomputed,
//! - a provider dump as printed by `aws ec2 describe-volumes`
//!   (`{"Volumes": [{"VolumeId": .., "VolumeType": .., "Size": .., "State": ..}]}`).

use std::path::{Path, PathBuf};

use anhinga_ports::{VolumeDto, VolumeSource};
use anhinga_shared_kernel::{InfraResult, InfrastructureError, Result};
use serde::Deserialize;

use crate::{
    document::{self, Syntax},
    persistence::FileReader,
};

/// Where the input document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentInput {
    Path(PathBuf),
    Stdin,
}

impl DocumentInput {
    /// `-` means standard input.
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            Some(path) if path != Path::new("-") => Self::Path(path.to_path_buf()),
            _ => Self::Stdin,
        }
    }

    fn syntax(&self) -> Syntax {
        match self {
            Self::Path(path) => Syntax::for_path(path),
            Self::Stdin => Syntax::Json,
        }
    }

    fn read(&self) -> InfraResult<String> {
        match self {
            Self::Path(path) => FileReader::read_to_string(path),
            Self::Stdin => FileReader::read_stdin(),
        }
    }
}

/// [`VolumeSource`] backed by a JSON or YAML document.
#[derive(Debug, Clone)]
pub struct DocumentVolumeSource {
    input: DocumentInput,
}

impl DocumentVolumeSource {
    pub fn new(input: DocumentInput) -> Self {
        Self { input }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::new(DocumentInput::Path(path.into()))
    }

    pub fn stdin() -> Self {
        Self::new(DocumentInput::Stdin)
    }

    pub fn input(&self) -> &DocumentInput {
        &self.input
    }
}

impl VolumeSource for DocumentVolumeSource {
    fn fetch(&self) -> Result<Vec<VolumeDto>> {
        let text = self.input.read()?;
        let volumes = parse_volumes(&text, self.input.syntax())?;
        tracing::debug!(input = ?self.input, volumes = volumes.len(), "loaded volume document");
        Ok(volumes)
    }
}

/// Parses any of the accepted document shapes into DTOs, keeping order.
pub fn parse_volumes(text: &str, syntax: Syntax) -> InfraResult<Vec<VolumeDto>> {
    let doc: VolumeDocument = document::parse(text, syntax).map_err(|err| match err {
        InfrastructureError::SerializationError { format, .. } => InfrastructureError::SerializationError {
            format,
            details: "expected a list of volumes, a report with \"volumes\", or a describe-volumes dump \
                      with \"Volumes\""
                .to_string(),
        },
        other => other,
    })?;
    Ok(doc.into_volumes())
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum VolumeDocument {
    List(Vec<VolumeDto>),
    Report {
        volumes: Vec<VolumeDto>,
    },
    ProviderDump {
        #[serde(rename = "Volumes")]
        volumes: Vec<ProviderVolume>,
    },
}

impl VolumeDocument {
    fn into_volumes(self) -> Vec<VolumeDto> {
        match self {
            Self::List(volumes) | Self::Report { volumes } => volumes,
            Self::ProviderDump { volumes } => volumes.into_iter().map(VolumeDto::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ProviderVolume {
    volume_id: String,
    volume_type: String,
    size: i64,
    state: String,
}

impl From<ProviderVolume> for VolumeDto {
    fn from(v: ProviderVolume) -> Self {
        Self { volume_id: v.volume_id, volume_type: v.volume_type, size: v.size, state: v.state }
    }
}
