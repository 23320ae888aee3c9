//! Priority-ordered waiting line for pending admissions.

use std::collections::VecDeque;

use parking_lot::Mutex;

use crate::core::patient::Patient;
use crate::core::HospitalError;

/// Thread-safe, bounded, priority-ordered collection of pending patients.
///
/// Ordering invariant: for any two entries A before B, either A's triage
/// category strictly outranks B's, or the categories are equal and A arrived
/// no later than B. Full ties keep insertion order (stable).
///
/// All operations serialize under one mutex and never block beyond that
/// short critical section.
pub struct PriorityWaitingLine {
    max_waiting: usize,
    entries: Mutex<VecDeque<Patient>>,
}

impl PriorityWaitingLine {
    /// Create a line holding at most `max_waiting` patients.
    #[must_use]
    pub fn new(max_waiting: usize) -> Self {
        Self {
            max_waiting,
            entries: Mutex::new(VecDeque::with_capacity(max_waiting.min(1024))),
        }
    }

    /// Insert a patient at the position that keeps the line ordered.
    ///
    /// Position scan is O(n); fine at waiting-room scale.
    ///
    /// # Errors
    ///
    /// Returns [`HospitalError::LineFull`] when the line is at capacity; the
    /// patient is not inserted.
    pub fn push(&self, patient: Patient) -> Result<(), HospitalError> {
        let mut entries = self.entries.lock();
        if entries.len() >= self.max_waiting {
            return Err(HospitalError::LineFull(entries.len()));
        }
        let at = entries
            .iter()
            .position(|existing| outranks(&patient, existing))
            .unwrap_or(entries.len());
        entries.insert(at, patient);
        Ok(())
    }

    /// Remove and return the highest-priority, earliest-arrived patient.
    /// Never blocks; `None` when the line is empty.
    #[must_use]
    pub fn pop(&self) -> Option<Patient> {
        self.entries.lock().pop_front()
    }

    /// Number of waiting patients at the moment of the call.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether the line has no entries at the moment of the call.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Maximum number of waiting patients.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.max_waiting
    }
}

/// True when `candidate` must sit before `existing` in the line.
/// Equal category and equal arrival compare false, so ties stay stable.
fn outranks(candidate: &Patient, existing: &Patient) -> bool {
    match candidate.category.rank().cmp(&existing.category.rank()) {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Less => false,
        std::cmp::Ordering::Equal => candidate.arrived_at_ms < existing.arrived_at_ms,
    }
}
