// crates/ports/src/volume_source.rs
use anhinga_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// Volume as delivered by an acquisition adapter, before validation.
///
/// `size` is signed because external data may carry values the domain
/// rejects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeDto {
    pub volume_id: String,
    pub volume_type: String,
    pub size: i64,
    pub state: String,
}

/// Port for acquiring the volumes a report covers.
pub trait VolumeSource: Send + Sync {
    /// Returns every volume, in the order the source delivers them.
    fn fetch(&self) -> Result<Vec<VolumeDto>>;
}
