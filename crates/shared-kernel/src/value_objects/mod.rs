// crates/shared-kernel/src/value_objects/mod.rs
pub mod cost;
pub mod size;
pub mod volume_id;

pub use cost::MonthlyCost;
pub use size::SizeGiB;
pub use volume_id::VolumeId;
