//! Cost estimation.
//!
//! Rates and regional multipliers are plain data ([`KindRates`],
//! [`RegionRates`]) combined in a [`PricingModel`]. The built-in table is
//! illustrative, not real-world pricing; callers may load their own.

pub mod estimator;
pub mod rates;
pub mod region;

pub use estimator::PricingModel;
pub use rates::KindRates;
pub use region::RegionRates;

use anhinga_shared_kernel::value_objects::MonthlyCost;

use crate::model::{PricedVolume, VolumeRecord};

/// Estimates one volume's monthly cost with the built-in pricing model.
pub fn estimate_cost(volume: &VolumeRecord, region: &str) -> MonthlyCost {
    PricingModel::default().estimate_cost(volume, region)
}

/// Sum of unrounded costs; `0.0` for an empty slice.
///
/// Costs are added in ascending order, so the result is bit-identical for any
/// permutation of `volumes`.
pub fn total_cost(volumes: &[PricedVolume]) -> MonthlyCost {
    let mut costs: Vec<MonthlyCost> = volumes.iter().map(|v| v.monthly_cost).collect();
    costs.sort_by(|a, b| a.value().total_cmp(&b.value()));
    costs.into_iter().sum()
}
