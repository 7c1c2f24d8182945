//! # Domain
//!
//! Volume model, the cost estimator and the report that renderers consume.
//!
//! - [`model`]: volume records as acquired and as priced
//! - [`pricing`]: rate table, regional multiplier and cost estimation
//! - [`report`]: ordered priced volumes plus the authoritative total
//! - [`options`]: output format selection

#![allow(clippy::multiple_crate_versions)]

pub mod model;
pub mod options;
pub mod pricing;
pub mod report;

pub use model::{PricedVolume, VolumeKind, VolumeRecord};
pub use options::OutputFormat;
pub use pricing::{KindRates, PricingModel, RegionRates, estimate_cost, total_cost};
pub use report::{COLUMNS, Report, ReportRow, TOTAL_LABEL};

pub use anhinga_shared_kernel::value_objects::{MonthlyCost, SizeGiB, VolumeId};
