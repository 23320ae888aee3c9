//! Builders to construct the engine from configuration.

pub mod hospital_builder;

pub use hospital_builder::{build_hospital, build_hospital_with_journal};
