use anhinga_shared_kernel::value_objects::{MonthlyCost, SizeGiB, VolumeId};
use serde::{Deserialize, Serialize};

use super::volume::{VolumeKind, VolumeRecord};

/// A volume together with its estimated (unrounded) monthly cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedVolume {
    pub record: VolumeRecord,
    pub monthly_cost: MonthlyCost,
}

impl PricedVolume {
    pub fn new(record: VolumeRecord, monthly_cost: MonthlyCost) -> Self {
        Self { record, monthly_cost }
    }

    #[inline]
    pub fn id(&self) -> &VolumeId {
        &self.record.id
    }

    #[inline]
    pub fn kind(&self) -> &VolumeKind {
        &self.record.kind
    }

    #[inline]
    pub fn size(&self) -> SizeGiB {
        self.record.size
    }

    #[inline]
    pub fn state(&self) -> &str {
        &self.record.state
    }
}
