//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: acquire volumes, validate them, price them and
//!   assemble the report
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod orchestrator;

pub use orchestrator::GenerateReport;
