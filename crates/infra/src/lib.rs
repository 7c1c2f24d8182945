// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod document;
pub mod output;
pub mod persistence;
pub mod pricing_file;
pub mod source;

pub use output::{OutputWriter, render, render_named};
pub use pricing_file::load_pricing;
pub use source::{DocumentInput, DocumentVolumeSource};
