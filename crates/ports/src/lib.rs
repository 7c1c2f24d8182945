//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`volume_source`]: acquisition of raw volume records
//!
//! Keeping acquisition behind a trait lets the use case run against a
//! provider dump, a fixture or a stub without knowing which.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod volume_source;

pub use volume_source::{VolumeDto, VolumeSource};
