//! Builder wiring the hospital engine from configuration.

use crate::config::HospitalConfig;
use crate::core::events::{EventLog, EventSink, InMemoryEventSink};
use crate::core::HospitalError;
use crate::runtime::Hospital;

/// Build a [`Hospital`] from validated configuration and an event sink.
///
/// # Errors
///
/// Returns [`HospitalError::InvalidConfig`] when validation fails.
pub fn build_hospital(
    cfg: &HospitalConfig,
    sink: Box<dyn EventSink>,
) -> Result<Hospital, HospitalError> {
    cfg.validate().map_err(HospitalError::InvalidConfig)?;
    Ok(Hospital::new(cfg.clone(), EventLog::new(sink)))
}

/// Build a [`Hospital`] with an in-memory journal sized from the config,
/// returning the sink handle for inspection.
///
/// # Errors
///
/// Returns [`HospitalError::InvalidConfig`] when validation fails.
pub fn build_hospital_with_journal(
    cfg: &HospitalConfig,
) -> Result<(Hospital, InMemoryEventSink), HospitalError> {
    let sink = InMemoryEventSink::new(cfg.max_events);
    let hospital = build_hospital(cfg, Box::new(sink.clone()))?;
    Ok((hospital, sink))
}
