//! Configuration models for the hospital engine.

pub mod hospital;

pub use hospital::HospitalConfig;
