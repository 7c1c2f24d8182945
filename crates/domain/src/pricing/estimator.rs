use anhinga_shared_kernel::{DomainResult, value_objects::MonthlyCost};
use serde::{Deserialize, Serialize};

use super::{rates::KindRates, region::RegionRates};
use crate::model::{PricedVolume, VolumeRecord};

/// Rate table plus regional multipliers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PricingModel {
    #[serde(default)]
    pub kinds: KindRates,
    #[serde(default)]
    pub regions: RegionRates,
}

impl PricingModel {
    pub fn new(kinds: KindRates, regions: RegionRates) -> Self {
        Self { kinds, regions }
    }

    /// # Errors
    /// Returns [`anhinga_shared_kernel::DomainError::InvalidPricing`] when any
    /// rate or multiplier is unusable.
    pub fn validate(&self) -> DomainResult<()> {
        self.kinds.validate()?;
        self.regions.validate()
    }

    /// `size * rate(kind) * multiplier(region)`, unrounded.
    pub fn estimate_cost(&self, volume: &VolumeRecord, region: &str) -> MonthlyCost {
        let rate = self.kinds.get(&volume.kind).unwrap_or_else(|| {
            tracing::debug!(
                volume = %volume.id,
                kind = %volume.kind,
                default_rate = self.kinds.default,
                "unrecognized volume kind, using default rate"
            );
            self.kinds.default
        });
        let base = volume.size.as_f64() * rate;
        MonthlyCost::new(base * self.regions.multiplier(region))
    }

    pub fn price(&self, volume: VolumeRecord, region: &str) -> PricedVolume {
        let cost = self.estimate_cost(&volume, region);
        PricedVolume::new(volume, cost)
    }

    /// Prices every record, preserving input order.
    pub fn price_all<I>(&self, volumes: I, region: &str) -> Vec<PricedVolume>
    where
        I: IntoIterator<Item = VolumeRecord>,
    {
        volumes.into_iter().map(|v| self.price(v, region)).collect()
    }
}
