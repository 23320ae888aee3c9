//! Patient records and the intake entry point.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::events::EventLog;
use crate::core::waiting_line::PriorityWaitingLine;
use crate::core::HospitalError;
use crate::util::clock::now_ms;

/// Longest accepted display name; longer input is truncated at intake.
pub const MAX_NAME_LEN: usize = 64;

/// Triage category driving waiting-line priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriageCategory {
    /// Walk-in or scheduled arrival.
    Regular,
    /// Outranks every regular patient in the waiting line.
    Emergency,
}

impl TriageCategory {
    /// Numeric rank for ordering; higher admits first.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Regular => 0,
            Self::Emergency => 1,
        }
    }
}

/// Which specialized ward a patient needs a slot in.
///
/// Independent of [`TriageCategory`]: an emergency patient may still need a
/// general-ward slot and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WardKind {
    /// Intensive-care slot.
    Icu,
    /// General-ward slot.
    General,
}

/// A single admission request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    /// Unique, strictly increasing across the process lifetime.
    pub id: u64,
    /// Display name, at most [`MAX_NAME_LEN`] characters.
    pub name: String,
    /// Waiting-line priority class.
    pub category: TriageCategory,
    /// Ward slot this patient needs when one is allocated.
    pub ward: WardKind,
    /// Severity 1-10, informational only; does not affect ordering.
    pub severity: u8,
    /// Arrival stamp in milliseconds, the FIFO tie-breaker.
    pub arrived_at_ms: u128,
}

/// Front desk: assigns ids and arrival stamps, enqueues, records check-in.
pub struct Intake {
    next_id: AtomicU64,
    line: Arc<PriorityWaitingLine>,
    events: EventLog,
}

impl Intake {
    /// Create an intake feeding the given waiting line.
    #[must_use]
    pub fn new(line: Arc<PriorityWaitingLine>, events: EventLog) -> Self {
        Self {
            next_id: AtomicU64::new(1),
            line,
            events,
        }
    }

    /// Register a patient: assign id and arrival stamp, push to the waiting
    /// line, record a check-in event.
    ///
    /// # Errors
    ///
    /// Returns [`HospitalError::LineFull`] when the waiting line is at
    /// capacity; the patient is not enqueued and no event is recorded.
    pub fn submit(
        &self,
        name: &str,
        category: TriageCategory,
        severity: u8,
        ward: WardKind,
    ) -> Result<Patient, HospitalError> {
        let patient = Patient {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            name: bound_name(name),
            category,
            ward,
            severity: severity.clamp(1, 10),
            arrived_at_ms: now_ms(),
        };
        self.line.push(patient.clone())?;
        self.events.check_in(&patient);
        tracing::info!(
            id = patient.id,
            name = %patient.name,
            category = ?patient.category,
            "patient checked in"
        );
        Ok(patient)
    }
}

fn bound_name(name: &str) -> String {
    if name.chars().count() <= MAX_NAME_LEN {
        name.to_owned()
    } else {
        name.chars().take(MAX_NAME_LEN).collect()
    }
}
