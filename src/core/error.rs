//! Error types for admission and allocation operations.

use thiserror::Error;

/// Errors produced by the admission engine and ward allocator.
#[derive(Debug, Error)]
pub enum HospitalError {
    /// Waiting line is at capacity; the patient was not enqueued.
    #[error("waiting line full: {0} patients already waiting")]
    LineFull(usize),
    /// No ward slot became free within the bounded wait.
    #[error("ward allocation timed out after {waited_ms} ms")]
    AllocationTimeout {
        /// How long the caller waited before giving up.
        waited_ms: u64,
    },
    /// The scheduler is shutting down; no new work is accepted.
    #[error("scheduler shut down")]
    Shutdown,
    /// Configuration validation failed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
