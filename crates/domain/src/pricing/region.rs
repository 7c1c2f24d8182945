use std::collections::BTreeMap;

use anhinga_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

pub const BASELINE_REGION: &str = "us-east-1";
pub const DEFAULT_UPLIFT: f64 = 1.1;

/// Regional price multipliers.
///
/// The baseline region is always 1.0. Regions listed in `overrides` use their
/// own multiplier; every other region, including an unspecified (empty) one,
/// gets `uplift`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegionRates {
    #[serde(default = "default_baseline")]
    pub baseline: String,
    #[serde(default = "default_uplift")]
    pub uplift: f64,
    #[serde(default)]
    pub overrides: BTreeMap<String, f64>,
}

fn default_baseline() -> String {
    BASELINE_REGION.to_string()
}

const fn default_uplift() -> f64 {
    DEFAULT_UPLIFT
}

impl Default for RegionRates {
    fn default() -> Self {
        Self { baseline: default_baseline(), uplift: DEFAULT_UPLIFT, overrides: BTreeMap::new() }
    }
}

impl RegionRates {
    pub fn is_baseline(&self, region: &str) -> bool {
        region == self.baseline
    }

    pub fn multiplier(&self, region: &str) -> f64 {
        if self.is_baseline(region) {
            return 1.0;
        }
        self.overrides.get(region).copied().unwrap_or(self.uplift)
    }

    /// # Errors
    /// Returns [`DomainError::InvalidPricing`] when the baseline is blank, the
    /// uplift is not above 1.0, or an override is negative or non-finite.
    pub fn validate(&self) -> DomainResult<()> {
        if self.baseline.trim().is_empty() {
            return Err(DomainError::InvalidPricing { reason: "baseline region must not be empty".into() });
        }
        if !self.uplift.is_finite() || self.uplift <= 1.0 {
            return Err(DomainError::InvalidPricing {
                reason: format!("uplift must be greater than 1.0, got {}", self.uplift),
            });
        }
        if let Some((region, m)) = self.overrides.iter().find(|(_, m)| !m.is_finite() || **m < 0.0) {
            return Err(DomainError::InvalidPricing {
                reason: format!("multiplier for '{region}' must be a non-negative number, got {m}"),
            });
        }
        Ok(())
    }
}
