//! Counting-resource pools for the two specialized wards.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use crate::core::patient::WardKind;
use crate::core::HospitalError;

/// Exclusive hold on one ward slot.
///
/// The slot returns to its pool when the permit is dropped, on every exit
/// path including task cancellation.
#[derive(Debug)]
pub struct WardPermit {
    ward: WardKind,
    _permit: OwnedSemaphorePermit,
}

impl WardPermit {
    /// Which ward this slot belongs to.
    #[must_use]
    pub const fn ward(&self) -> WardKind {
        self.ward
    }
}

/// Two independent counting resources bounding concurrent ward occupancy.
///
/// ICU saturation never blocks a general-ward acquisition and vice versa;
/// the two pools share nothing. Waiters within one ward are served
/// first-available-wins, with no FIFO guarantee.
///
/// Ward occupancy is deliberately not reflected in the overall bed counter
/// ([`crate::core::admission::BedPool`]); the two capacity domains are
/// independent.
pub struct WardAllocator {
    icu: Arc<Semaphore>,
    general: Arc<Semaphore>,
    icu_slots: usize,
    general_slots: usize,
}

impl WardAllocator {
    /// Create pools with the given per-ward slot counts.
    #[must_use]
    pub fn new(icu_slots: usize, general_slots: usize) -> Self {
        Self {
            icu: Arc::new(Semaphore::new(icu_slots)),
            general: Arc::new(Semaphore::new(general_slots)),
            icu_slots,
            general_slots,
        }
    }

    /// Acquire one slot in the given ward, waiting at most `max_wait`.
    ///
    /// # Errors
    ///
    /// [`HospitalError::AllocationTimeout`] when no slot frees up within
    /// `max_wait` (nothing is consumed); [`HospitalError::Shutdown`] when
    /// the pool has been closed.
    pub async fn allocate(
        &self,
        ward: WardKind,
        max_wait: Duration,
    ) -> Result<WardPermit, HospitalError> {
        let pool = Arc::clone(self.pool(ward));
        match tokio::time::timeout(max_wait, pool.acquire_owned()).await {
            Ok(Ok(permit)) => Ok(WardPermit {
                ward,
                _permit: permit,
            }),
            Ok(Err(_closed)) => Err(HospitalError::Shutdown),
            Err(_elapsed) => {
                let waited_ms = u64::try_from(max_wait.as_millis()).unwrap_or(u64::MAX);
                tracing::warn!(?ward, waited_ms, "ward wait expired");
                Err(HospitalError::AllocationTimeout { waited_ms })
            }
        }
    }

    /// Free slots in the given ward at the moment of the call.
    #[must_use]
    pub fn available(&self, ward: WardKind) -> usize {
        self.pool(ward).available_permits()
    }

    /// Configured slot count for the given ward.
    #[must_use]
    pub const fn capacity(&self, ward: WardKind) -> usize {
        match ward {
            WardKind::Icu => self.icu_slots,
            WardKind::General => self.general_slots,
        }
    }

    const fn pool(&self, ward: WardKind) -> &Arc<Semaphore> {
        match ward {
            WardKind::Icu => &self.icu,
            WardKind::General => &self.general,
        }
    }
}
