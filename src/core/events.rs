//! Event sink for admission, discharge, and allocation notifications.
//!
//! The core emits events fire-and-forget; sinks must stay fast and bounded
//! so the emitting task is never meaningfully delayed.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::core::patient::Patient;
use crate::util::clock::now_ms;

/// One recorded event.
#[derive(Debug, Clone)]
pub struct EventRecord {
    /// Event name (`Check-In`, `Admitted`, `Discharged`, `Requested`,
    /// `Allocated`, `Bed-Status`).
    pub event: String,
    /// Patient the event refers to, if any (discharges are anonymous).
    pub patient_id: Option<u64>,
    /// Extra context, e.g. `"3/5 beds occupied"` or `"severity=9"`.
    pub detail: Option<String>,
    /// Timestamp in milliseconds.
    pub at_ms: u128,
}

/// Receives state-transition notifications from the core.
pub trait EventSink: Send {
    /// Record a patient lifecycle event; `patient` is absent for anonymous
    /// transitions such as discharge.
    fn patient_event(&mut self, event: &str, patient: Option<&Patient>, detail: Option<&str>);

    /// Record current bed occupancy.
    fn bed_status(&mut self, occupied: u32, total: u32);
}

/// Bounded in-memory sink for tests and inspection.
///
/// Clones share the same ring buffer, so a test can keep one clone and hand
/// the other to the event log.
#[derive(Clone)]
pub struct InMemoryEventSink {
    records: Arc<Mutex<VecDeque<EventRecord>>>,
    max_records: usize,
}

impl InMemoryEventSink {
    /// Create a sink keeping at most `max_records` events; older entries
    /// are evicted first.
    #[must_use]
    pub fn new(max_records: usize) -> Self {
        Self {
            records: Arc::new(Mutex::new(VecDeque::with_capacity(max_records))),
            max_records,
        }
    }

    /// Snapshot of stored events, oldest first.
    #[must_use]
    pub fn records(&self) -> Vec<EventRecord> {
        self.records.lock().iter().cloned().collect()
    }

    /// Events with the given name, oldest first.
    #[must_use]
    pub fn named(&self, event: &str) -> Vec<EventRecord> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.event == event)
            .cloned()
            .collect()
    }

    fn record(&self, record: EventRecord) {
        let mut records = self.records.lock();
        if records.len() >= self.max_records {
            records.pop_front();
        }
        records.push_back(record);
    }
}

impl EventSink for InMemoryEventSink {
    fn patient_event(&mut self, event: &str, patient: Option<&Patient>, detail: Option<&str>) {
        self.record(EventRecord {
            event: event.to_owned(),
            patient_id: patient.map(|p| p.id),
            detail: detail.map(ToOwned::to_owned),
            at_ms: now_ms(),
        });
    }

    fn bed_status(&mut self, occupied: u32, total: u32) {
        self.record(EventRecord {
            event: "Bed-Status".to_owned(),
            patient_id: None,
            detail: Some(format!("{occupied}/{total} beds occupied")),
            at_ms: now_ms(),
        });
    }
}

/// Sink that forwards events to `tracing`.
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn patient_event(&mut self, event: &str, patient: Option<&Patient>, detail: Option<&str>) {
        match patient {
            Some(p) => tracing::info!(
                event,
                id = p.id,
                name = %p.name,
                category = ?p.category,
                detail,
                "patient event"
            ),
            None => tracing::info!(event, detail, "patient event"),
        }
    }

    fn bed_status(&mut self, occupied: u32, total: u32) {
        tracing::info!(occupied, total, "bed status");
    }
}

/// Running totals for operational visibility, read without locks.
#[derive(Debug, Default)]
struct EventTotals {
    checked_in: AtomicU64,
    admitted: AtomicU64,
    discharged: AtomicU64,
    allocated: AtomicU64,
}

/// Point-in-time copy of the event totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TotalsSnapshot {
    /// Patients that checked in.
    pub checked_in: u64,
    /// Admissions into the bed pool.
    pub admitted: u64,
    /// Discharges from the bed pool.
    pub discharged: u64,
    /// Ward slots allocated.
    pub allocated: u64,
}

/// Cloneable handle sharing one sink between tasks.
///
/// Typed emit methods keep the event vocabulary in one place and bump the
/// matching totals counter.
#[derive(Clone)]
pub struct EventLog {
    sink: Arc<Mutex<Box<dyn EventSink>>>,
    totals: Arc<EventTotals>,
}

impl EventLog {
    /// Wrap a sink for shared use.
    #[must_use]
    pub fn new(sink: Box<dyn EventSink>) -> Self {
        Self {
            sink: Arc::new(Mutex::new(sink)),
            totals: Arc::new(EventTotals::default()),
        }
    }

    /// Record a check-in.
    pub fn check_in(&self, patient: &Patient) {
        self.totals.checked_in.fetch_add(1, Ordering::Relaxed);
        self.sink.lock().patient_event("Check-In", Some(patient), None);
    }

    /// Record an admission.
    pub fn admitted(&self, patient: &Patient) {
        self.totals.admitted.fetch_add(1, Ordering::Relaxed);
        self.sink.lock().patient_event("Admitted", Some(patient), None);
    }

    /// Record an anonymous discharge.
    pub fn discharged(&self) {
        self.totals.discharged.fetch_add(1, Ordering::Relaxed);
        self.sink.lock().patient_event("Discharged", None, None);
    }

    /// Record a ward-slot request, before the wait begins.
    pub fn requested(&self, patient: &Patient) {
        self.sink.lock().patient_event("Requested", Some(patient), None);
    }

    /// Record a ward-slot allocation, including severity for visibility.
    pub fn allocated(&self, patient: &Patient) {
        self.totals.allocated.fetch_add(1, Ordering::Relaxed);
        let detail = format!("severity={}", patient.severity);
        self.sink
            .lock()
            .patient_event("Allocated", Some(patient), Some(detail.as_str()));
    }

    /// Record current bed occupancy.
    pub fn bed_status(&self, occupied: u32, total: u32) {
        self.sink.lock().bed_status(occupied, total);
    }

    /// Copy of the running totals.
    #[must_use]
    pub fn totals(&self) -> TotalsSnapshot {
        TotalsSnapshot {
            checked_in: self.totals.checked_in.load(Ordering::Relaxed),
            admitted: self.totals.admitted.load(Ordering::Relaxed),
            discharged: self.totals.discharged.load(Ordering::Relaxed),
            allocated: self.totals.allocated.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::patient::{TriageCategory, WardKind};

    fn patient(id: u64) -> Patient {
        Patient {
            id,
            name: format!("patient-{id}"),
            category: TriageCategory::Regular,
            ward: WardKind::General,
            severity: 7,
            arrived_at_ms: 0,
        }
    }

    #[test]
    fn ring_buffer_evicts_oldest() {
        let sink = InMemoryEventSink::new(2);
        let log = EventLog::new(Box::new(sink.clone()));

        log.check_in(&patient(1));
        log.check_in(&patient(2));
        log.check_in(&patient(3));

        let records = sink.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].patient_id, Some(2));
        assert_eq!(records[1].patient_id, Some(3));
    }

    #[test]
    fn totals_track_typed_events() {
        let sink = InMemoryEventSink::new(16);
        let log = EventLog::new(Box::new(sink));

        log.check_in(&patient(1));
        log.check_in(&patient(2));
        log.admitted(&patient(1));
        log.discharged();
        log.requested(&patient(2));
        log.allocated(&patient(2));

        let totals = log.totals();
        assert_eq!(totals.checked_in, 2);
        assert_eq!(totals.admitted, 1);
        assert_eq!(totals.discharged, 1);
        assert_eq!(totals.allocated, 1);
    }

    #[test]
    fn allocation_detail_carries_severity() {
        let sink = InMemoryEventSink::new(16);
        let log = EventLog::new(Box::new(sink.clone()));

        log.allocated(&patient(9));

        let allocated = sink.named("Allocated");
        assert_eq!(allocated.len(), 1);
        assert_eq!(allocated[0].detail.as_deref(), Some("severity=7"));
    }

    #[test]
    fn discharge_event_is_anonymous() {
        let sink = InMemoryEventSink::new(16);
        let log = EventLog::new(Box::new(sink.clone()));

        log.discharged();

        let records = sink.records();
        assert_eq!(records[0].event, "Discharged");
        assert_eq!(records[0].patient_id, None);
    }
}
