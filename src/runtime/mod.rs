//! Runtime lifecycle: the [`Hospital`] facade, coordinator tasks, and
//! per-patient allocation tasks.

mod allocation;
mod coordinators;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

use crate::config::HospitalConfig;
use crate::core::admission::{BedPool, StatusSnapshot};
use crate::core::events::{EventLog, TotalsSnapshot};
use crate::core::patient::{Intake, Patient, TriageCategory, WardKind};
use crate::core::waiting_line::PriorityWaitingLine;
use crate::core::ward::WardAllocator;
use crate::core::HospitalError;

/// Wires the waiting line, bed pool, ward allocator, and coordinators into
/// one engine with a shared cancellation token.
///
/// Long-running work is spawned onto the ambient tokio runtime; call
/// [`Hospital::start`] and [`Hospital::shutdown`] from within one.
pub struct Hospital {
    config: HospitalConfig,
    line: Arc<PriorityWaitingLine>,
    beds: Arc<BedPool>,
    wards: Arc<WardAllocator>,
    intake: Intake,
    events: EventLog,
    cancel: CancellationToken,
    tracker: TaskTracker,
    started: AtomicBool,
}

impl Hospital {
    /// Assemble the engine from configuration and an event log.
    ///
    /// Prefer [`crate::builders::build_hospital`], which validates the
    /// configuration first.
    #[must_use]
    pub fn new(config: HospitalConfig, events: EventLog) -> Self {
        let line = Arc::new(PriorityWaitingLine::new(config.max_waiting));
        let beds = Arc::new(BedPool::new(config.total_beds, Arc::clone(&line)));
        let wards = Arc::new(WardAllocator::new(config.icu_slots, config.general_slots));
        let intake = Intake::new(Arc::clone(&line), events.clone());
        Self {
            config,
            line,
            beds,
            wards,
            intake,
            events,
            cancel: CancellationToken::new(),
            tracker: TaskTracker::new(),
            started: AtomicBool::new(false),
        }
    }

    /// Spawn the admission, discharge, and status coordinator loops.
    /// Calling more than once is a no-op.
    pub fn start(&self) {
        if self.started.swap(true, Ordering::SeqCst) {
            return;
        }
        self.tracker.spawn(coordinators::admission_loop(
            Arc::clone(&self.beds),
            self.events.clone(),
            self.config.admit_interval(),
            self.cancel.clone(),
        ));
        self.tracker.spawn(coordinators::discharge_loop(
            Arc::clone(&self.beds),
            self.events.clone(),
            self.config.discharge_interval(),
            self.cancel.clone(),
        ));
        self.tracker.spawn(coordinators::status_loop(
            Arc::clone(&self.beds),
            self.events.clone(),
            self.config.status_interval(),
            self.cancel.clone(),
        ));
        tracing::info!(
            total_beds = self.config.total_beds,
            icu_slots = self.config.icu_slots,
            general_slots = self.config.general_slots,
            "hospital started"
        );
    }

    /// Register a patient with the waiting line.
    ///
    /// # Errors
    ///
    /// [`HospitalError::LineFull`] when the waiting line is at capacity;
    /// [`HospitalError::Shutdown`] once shutdown has begun.
    pub fn submit_patient(
        &self,
        name: &str,
        category: TriageCategory,
        severity: u8,
        ward: WardKind,
    ) -> Result<Patient, HospitalError> {
        if self.cancel.is_cancelled() {
            return Err(HospitalError::Shutdown);
        }
        self.intake.submit(name, category, severity, ward)
    }

    /// Spawn a short-lived task that acquires, holds, and releases one ward
    /// slot for `patient`. The slot is released on every exit path,
    /// including cancellation mid-hold.
    pub fn request_ward_slot(&self, patient: Patient) -> JoinHandle<Result<(), HospitalError>> {
        self.tracker.spawn(allocation::allocate_ward_slot(
            Arc::clone(&self.wards),
            self.events.clone(),
            patient,
            self.config.ward_hold(),
            self.config.ward_wait_timeout(),
            self.cancel.clone(),
        ))
    }

    /// Non-blocking, untorn view of occupancy and queue length.
    #[must_use]
    pub fn snapshot(&self) -> StatusSnapshot {
        self.beds.snapshot()
    }

    /// Running event totals.
    #[must_use]
    pub fn totals(&self) -> TotalsSnapshot {
        self.events.totals()
    }

    /// The ward allocator, for direct slot queries.
    #[must_use]
    pub fn wards(&self) -> &WardAllocator {
        &self.wards
    }

    /// Number of patients currently waiting.
    #[must_use]
    pub fn waiting(&self) -> usize {
        self.line.len()
    }

    /// Token observed by every long-running task; external collaborators may
    /// trigger shutdown through it.
    #[must_use]
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Cooperative shutdown: cancel every task, then wait for each to run
    /// its release step. Completion is bounded by the pacing intervals and
    /// the remaining ward holds; no slot stays held afterwards.
    pub async fn shutdown(&self) {
        tracing::info!("shutting down");
        self.cancel.cancel();
        self.tracker.close();
        self.tracker.wait().await;
        tracing::info!("shutdown complete");
    }
}
