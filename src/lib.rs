//! # Ward Scheduler
//!
//! A concurrent hospital admission and bed allocation engine.
//!
//! Patients check in to a priority-ordered waiting line (emergencies first,
//! FIFO within a category) and are admitted into a capacity-bounded bed
//! pool by a free-running admission coordinator. A discharge coordinator
//! independently releases beds over time. Separately, per-patient tasks
//! acquire slots in two counting-resource ward pools (ICU and general),
//! each with its own capacity, a bounded wait, and guaranteed release.
//!
//! ## Guarantees
//!
//! - **Ordering**: a pop always returns the highest-priority,
//!   earliest-arrived patient; full ties keep insertion order.
//! - **Capacity**: occupancy never exceeds the bed count; the line pop and
//!   the counter increment are one atomic step, so concurrent admission
//!   cycles cannot overshoot.
//! - **Isolation**: ICU saturation never blocks general-ward acquisition
//!   and vice versa.
//! - **Shutdown**: a cancellation token is checked at every suspension
//!   point; in-flight allocations release their slots before the engine
//!   reports shutdown complete.
//!
//! ## Example
//!
//! ```rust,ignore
//! use ward_scheduler::builders::build_hospital_with_journal;
//! use ward_scheduler::config::HospitalConfig;
//! use ward_scheduler::core::{TriageCategory, WardKind};
//!
//! let (hospital, journal) = build_hospital_with_journal(&HospitalConfig::default())?;
//! hospital.start();
//!
//! let patient = hospital.submit_patient(
//!     "Alice", TriageCategory::Emergency, 9, WardKind::Icu,
//! )?;
//! hospital.request_ward_slot(patient);
//!
//! // ... later
//! hospital.shutdown().await;
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core admission, occupancy, and allocation components.
pub mod core;
/// Configuration models for the engine.
pub mod config;
/// Builders to construct the engine from configuration.
pub mod builders;
/// Runtime lifecycle: facade, coordinators, allocation tasks.
pub mod runtime;
/// Shared utilities.
pub mod util;
