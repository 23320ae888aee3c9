//! Per-patient ward allocation tasks.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::core::events::EventLog;
use crate::core::patient::Patient;
use crate::core::ward::WardAllocator;
use crate::core::HospitalError;

/// Request, hold, and release one ward slot for `patient`.
///
/// The permit is released on every exit path: normal completion, timeout
/// (nothing was held), and cancellation mid-hold (the permit drops before
/// the task returns). A cancellation that arrives while still waiting for a
/// slot aborts the wait without consuming anything.
pub(crate) async fn allocate_ward_slot(
    wards: Arc<WardAllocator>,
    events: EventLog,
    patient: Patient,
    hold: Duration,
    max_wait: Duration,
    cancel: CancellationToken,
) -> Result<(), HospitalError> {
    events.requested(&patient);
    tracing::debug!(id = patient.id, ward = ?patient.ward, "ward slot requested");

    let permit = tokio::select! {
        () = cancel.cancelled() => return Err(HospitalError::Shutdown),
        result = wards.allocate(patient.ward, max_wait) => result?,
    };
    events.allocated(&patient);
    tracing::debug!(
        id = patient.id,
        ward = ?patient.ward,
        severity = patient.severity,
        "ward slot allocated"
    );

    // Simulated occupancy; cut short by shutdown, slot returned either way.
    tokio::select! {
        () = cancel.cancelled() => {}
        () = tokio::time::sleep(hold) => {}
    }
    drop(permit);
    Ok(())
}
