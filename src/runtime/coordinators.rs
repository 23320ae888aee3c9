//! Long-running coordinator loops for admission, discharge, and status.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::core::admission::BedPool;
use crate::core::events::EventLog;

/// Repeatedly attempt one atomic admission per cycle.
///
/// Never waits for capacity; a full pool or empty line is a no-op cycle.
/// Terminates promptly once `cancel` fires.
pub(crate) async fn admission_loop(
    beds: Arc<BedPool>,
    events: EventLog,
    interval: Duration,
    cancel: CancellationToken,
) {
    loop {
        if let Some(admission) = beds.try_admit() {
            events.admitted(&admission.patient);
            events.bed_status(admission.occupied, beds.total_beds());
        }
        tokio::select! {
            () = cancel.cancelled() => break,
            () = tokio::time::sleep(interval) => {}
        }
    }
    tracing::debug!("admission coordinator stopped");
}

/// Release one bed per cycle while any are occupied.
///
/// Discharges are anonymous; the engine does not map them to admitted
/// patients. Zero occupancy is a silent no-op cycle.
pub(crate) async fn discharge_loop(
    beds: Arc<BedPool>,
    events: EventLog,
    interval: Duration,
    cancel: CancellationToken,
) {
    loop {
        if let Some(occupied) = beds.discharge() {
            events.discharged();
            events.bed_status(occupied, beds.total_beds());
        }
        tokio::select! {
            () = cancel.cancelled() => break,
            () = tokio::time::sleep(interval) => {}
        }
    }
    tracing::debug!("discharge coordinator stopped");
}

/// Periodically report occupancy and queue length.
pub(crate) async fn status_loop(
    beds: Arc<BedPool>,
    events: EventLog,
    interval: Duration,
    cancel: CancellationToken,
) {
    loop {
        tokio::select! {
            () = cancel.cancelled() => break,
            () = tokio::time::sleep(interval) => {}
        }
        let snap = beds.snapshot();
        tracing::info!(
            occupied = snap.occupied,
            total = snap.total_beds,
            waiting = snap.waiting,
            "status"
        );
        events.bed_status(snap.occupied, snap.total_beds);
    }
    tracing::debug!("status reporter stopped");
}
