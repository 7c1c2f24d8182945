use std::{collections::HashSet, fmt, str::FromStr};

use anhinga_shared_kernel::{
    DomainError, DomainResult,
    value_objects::{SizeGiB, VolumeId},
};
use serde::{Deserialize, Serialize};

/// Block-storage performance tier.
///
/// Tags outside the known set are kept verbatim in [`VolumeKind::Other`] so
/// they still render as acquired; pricing falls back to the default rate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VolumeKind {
    Gp2,
    Gp3,
    Io1,
    Io2,
    St1,
    Sc1,
    Standard,
    Other(String),
}

impl VolumeKind {
    /// Every known tier, in catalogue order.
    pub const KNOWN: [Self; 7] =
        [Self::Gp2, Self::Gp3, Self::Io1, Self::Io2, Self::St1, Self::Sc1, Self::Standard];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Gp2 => "gp2",
            Self::Gp3 => "gp3",
            Self::Io1 => "io1",
            Self::Io2 => "io2",
            Self::St1 => "st1",
            Self::Sc1 => "sc1",
            Self::Standard => "standard",
            Self::Other(tag) => tag,
        }
    }

    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for VolumeKind {
    fn from(tag: &str) -> Self {
        match tag {
            "gp2" => Self::Gp2,
            "gp3" => Self::Gp3,
            "io1" => Self::Io1,
            "io2" => Self::Io2,
            "st1" => Self::St1,
            "sc1" => Self::Sc1,
            "standard" => Self::Standard,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for VolumeKind {
    fn from(tag: String) -> Self {
        match Self::from(tag.as_str()) {
            Self::Other(_) => Self::Other(tag),
            known => known,
        }
    }
}

impl From<VolumeKind> for String {
    fn from(kind: VolumeKind) -> Self {
        match kind {
            VolumeKind::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for VolumeKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for VolumeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A volume as handed over by the acquisition side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeRecord {
    pub id: VolumeId,
    pub kind: VolumeKind,
    pub size: SizeGiB,
    pub state: String,
}

impl VolumeRecord {
    pub fn new(id: VolumeId, kind: impl Into<VolumeKind>, size: SizeGiB, state: impl Into<String>) -> Self {
        Self { id, kind: kind.into(), size, state: state.into() }
    }

    /// Builds a record from unchecked external values.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidVolume`] when the id is blank or the
    /// size is negative.
    pub fn try_from_raw(id: &str, kind: &str, size: i64, state: &str) -> DomainResult<Self> {
        let id = VolumeId::new(id)?;
        let size = u64::try_from(size).map_err(|_| DomainError::InvalidVolume {
            field: "size".to_string(),
            reason: format!("{id}: size must be non-negative, got {size}"),
        })?;
        Ok(Self::new(id, kind, SizeGiB::new(size), state))
    }
}

/// Rejects a record set in which the same volume id appears twice.
///
/// # Errors
/// Returns [`DomainError::InvalidVolume`] naming the first duplicated id.
pub fn ensure_unique_ids(records: &[VolumeRecord]) -> DomainResult<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id.as_str()) {
            return Err(DomainError::InvalidVolume {
                field: "volumeId".to_string(),
                reason: format!("duplicate id {}", record.id),
            });
        }
    }
    Ok(())
}
