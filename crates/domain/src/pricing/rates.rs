use std::collections::BTreeMap;

use anhinga_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

use crate::model::VolumeKind;

/// Price per GiB-month for unrecognized kinds.
pub const DEFAULT_RATE: f64 = 0.10;

/// Price per GiB-month keyed by volume-kind tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KindRates {
    pub rates: BTreeMap<String, f64>,
    #[serde(default = "default_rate")]
    pub default: f64,
}

const fn default_rate() -> f64 {
    DEFAULT_RATE
}

impl Default for KindRates {
    fn default() -> Self {
        let rates = [
            (VolumeKind::Gp2, 0.10),
            (VolumeKind::Gp3, 0.08),
            (VolumeKind::Io1, 0.125),
            (VolumeKind::Io2, 0.125),
            (VolumeKind::St1, 0.045),
            (VolumeKind::Sc1, 0.025),
            (VolumeKind::Standard, 0.05),
        ]
        .into_iter()
        .map(|(kind, rate)| (String::from(kind), rate))
        .collect();
        Self { rates, default: DEFAULT_RATE }
    }
}

impl KindRates {
    /// Rate for `kind`, or `None` when the table has no entry for it.
    pub fn get(&self, kind: &VolumeKind) -> Option<f64> {
        self.rates.get(kind.as_str()).copied()
    }

    /// Rate for `kind`, falling back to the default rate.
    pub fn rate_for(&self, kind: &VolumeKind) -> f64 {
        self.get(kind).unwrap_or(self.default)
    }

    /// # Errors
    /// Returns [`DomainError::InvalidPricing`] for a negative or non-finite rate.
    pub fn validate(&self) -> DomainResult<()> {
        let entries = self.rates.iter().map(|(k, v)| (k.as_str(), *v));
        for (key, rate) in entries.chain(std::iter::once(("default", self.default))) {
            if !rate.is_finite() || rate < 0.0 {
                return Err(DomainError::InvalidPricing {
                    reason: format!("rate for '{key}' must be a non-negative number, got {rate}"),
                });
            }
        }
        Ok(())
    }
}
