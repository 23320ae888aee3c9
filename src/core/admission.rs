//! Bed occupancy accounting and the atomic admission step.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::core::patient::Patient;
use crate::core::waiting_line::PriorityWaitingLine;

/// Point-in-time view of occupancy and queue length.
///
/// Each field is internally consistent (never negative, never past its
/// bound); the pair and the queue length are read under their own locks, so
/// the view is untorn per value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// Beds currently occupied.
    pub occupied: u32,
    /// Total bed capacity.
    pub total_beds: u32,
    /// Patients still in the waiting line.
    pub waiting: usize,
}

/// Outcome of a successful admission.
#[derive(Debug, Clone)]
pub struct Admission {
    /// The patient that moved from the line into a bed.
    pub patient: Patient,
    /// Occupancy immediately after the admission.
    pub occupied: u32,
}

/// Shared bed counter coupled to the waiting line.
///
/// The occupancy mutex is the exclusion domain for admission: the line pop
/// and the counter increment happen inside one critical section, so two
/// concurrent admission attempts can never both see capacity and overshoot.
///
/// Ward-slot occupancy ([`crate::core::ward::WardAllocator`]) is tracked in
/// a separate domain and is not reflected here.
pub struct BedPool {
    total_beds: u32,
    occupied: Mutex<u32>,
    line: Arc<PriorityWaitingLine>,
}

impl BedPool {
    /// Create a pool of `total_beds` sourced from the given waiting line.
    #[must_use]
    pub fn new(total_beds: u32, line: Arc<PriorityWaitingLine>) -> Self {
        Self {
            total_beds,
            occupied: Mutex::new(0),
            line,
        }
    }

    /// Attempt one admission: if a bed is free and the line is non-empty,
    /// pop the highest-priority patient and occupy a bed as a single step.
    ///
    /// Returns `None` (no state change) when the pool is full or the line is
    /// empty. Never blocks beyond the short critical section.
    #[must_use]
    pub fn try_admit(&self) -> Option<Admission> {
        let mut occupied = self.occupied.lock();
        if *occupied >= self.total_beds {
            return None;
        }
        // The line lock nests inside the occupancy lock, always in this
        // order, so pop-and-increment is one logical step.
        let patient = self.line.pop()?;
        *occupied += 1;
        tracing::debug!(
            id = patient.id,
            occupied = *occupied,
            total = self.total_beds,
            "admitted"
        );
        Some(Admission {
            patient,
            occupied: *occupied,
        })
    }

    /// Release one bed. Returns the occupancy after the decrement, or `None`
    /// when nothing was occupied (defined no-op, not an error).
    #[must_use]
    pub fn discharge(&self) -> Option<u32> {
        let mut occupied = self.occupied.lock();
        if *occupied == 0 {
            return None;
        }
        *occupied -= 1;
        tracing::debug!(occupied = *occupied, total = self.total_beds, "discharged");
        Some(*occupied)
    }

    /// Non-blocking read of occupancy and queue length.
    #[must_use]
    pub fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            occupied: *self.occupied.lock(),
            total_beds: self.total_beds,
            waiting: self.line.len(),
        }
    }

    /// Total bed capacity.
    #[must_use]
    pub const fn total_beds(&self) -> u32 {
        self.total_beds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::patient::{TriageCategory, WardKind};

    fn patient(id: u64, category: TriageCategory) -> Patient {
        Patient {
            id,
            name: format!("patient-{id}"),
            category,
            ward: WardKind::General,
            severity: 5,
            arrived_at_ms: u128::from(id),
        }
    }

    fn pool_with(total: u32, patients: u64) -> (BedPool, Arc<PriorityWaitingLine>) {
        let line = Arc::new(PriorityWaitingLine::new(1000));
        for id in 1..=patients {
            line.push(patient(id, TriageCategory::Regular)).unwrap();
        }
        (BedPool::new(total, Arc::clone(&line)), line)
    }

    #[test]
    fn admission_stops_at_capacity() {
        let (pool, line) = pool_with(5, 8);

        for _ in 0..5 {
            assert!(pool.try_admit().is_some());
        }
        assert!(pool.try_admit().is_none());
        assert_eq!(pool.snapshot().occupied, 5);
        assert_eq!(line.len(), 3);

        // A discharge frees exactly one slot.
        assert_eq!(pool.discharge(), Some(4));
        assert!(pool.try_admit().is_some());
        assert!(pool.try_admit().is_none());
    }

    #[test]
    fn admit_from_empty_line_is_noop() {
        let (pool, _line) = pool_with(5, 0);
        assert!(pool.try_admit().is_none());
        assert_eq!(pool.snapshot().occupied, 0);
    }

    #[test]
    fn discharge_at_zero_is_noop() {
        let (pool, _line) = pool_with(5, 0);
        assert_eq!(pool.discharge(), None);
        assert_eq!(pool.snapshot().occupied, 0);
    }

    #[test]
    fn admission_follows_line_order() {
        let line = Arc::new(PriorityWaitingLine::new(100));
        line.push(patient(1, TriageCategory::Regular)).unwrap();
        line.push(patient(2, TriageCategory::Emergency)).unwrap();
        let pool = BedPool::new(5, line);

        assert_eq!(pool.try_admit().unwrap().patient.id, 2);
        assert_eq!(pool.try_admit().unwrap().patient.id, 1);
    }

    #[test]
    fn concurrent_admissions_never_exceed_capacity() {
        let (pool, _line) = pool_with(5, 200);
        let pool = Arc::new(pool);

        let mut handles = Vec::new();
        for _ in 0..8 {
            let pool = Arc::clone(&pool);
            handles.push(std::thread::spawn(move || {
                let mut admitted = 0u32;
                for _ in 0..50 {
                    if pool.try_admit().is_some() {
                        admitted += 1;
                    }
                }
                admitted
            }));
        }
        let total: u32 = handles.into_iter().map(|h| h.join().unwrap()).sum();

        assert_eq!(total, 5);
        assert_eq!(pool.snapshot().occupied, 5);
    }

    #[test]
    fn concurrent_admit_and_discharge_stay_in_bounds() {
        let (pool, _line) = pool_with(3, 500);
        let pool = Arc::new(pool);

        let mut handles = Vec::new();
        for worker in 0..6 {
            let pool = Arc::clone(&pool);
            handles.push(std::thread::spawn(move || {
                for _ in 0..100 {
                    if worker % 2 == 0 {
                        let _ = pool.try_admit();
                    } else {
                        let _ = pool.discharge();
                    }
                    let snap = pool.snapshot();
                    assert!(snap.occupied <= snap.total_beds);
                }
            }));
        }
        for h in handles {
            h.join().unwrap();
        }
    }
}
