pub mod priced;
pub mod volume;

pub use priced::PricedVolume;
pub use volume::{VolumeKind, VolumeRecord, ensure_unique_ids};
