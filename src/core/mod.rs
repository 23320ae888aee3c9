//! Core admission, occupancy, and allocation components.

pub mod admission;
pub mod error;
pub mod events;
pub mod patient;
pub mod waiting_line;
pub mod ward;

pub use admission::{Admission, BedPool, StatusSnapshot};
pub use error::{AppResult, HospitalError};
pub use events::{EventLog, EventRecord, EventSink, InMemoryEventSink, TotalsSnapshot, TracingEventSink};
pub use patient::{Intake, Patient, TriageCategory, WardKind, MAX_NAME_LEN};
pub use waiting_line::PriorityWaitingLine;
pub use ward::{WardAllocator, WardPermit};
