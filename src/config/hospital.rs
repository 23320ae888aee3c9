//! Hospital configuration structures.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Capacities and pacing intervals for the engine.
///
/// The overall bed count and the per-ward slot counts are separate capacity
/// domains; both are spelled out here so the split is explicit rather than
/// buried in constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HospitalConfig {
    /// Total beds in the shared pool.
    pub total_beds: u32,
    /// ICU slots in the ward allocator.
    pub icu_slots: usize,
    /// General-ward slots in the ward allocator.
    pub general_slots: usize,
    /// Maximum patients in the waiting line before intake is rejected.
    pub max_waiting: usize,
    /// Delay between admission attempts, milliseconds.
    pub admit_interval_ms: u64,
    /// Delay between discharge attempts, milliseconds.
    pub discharge_interval_ms: u64,
    /// Delay between status reports, milliseconds.
    pub status_interval_ms: u64,
    /// Simulated ward occupancy per allocation, milliseconds.
    pub ward_hold_ms: u64,
    /// Longest a ward allocation may wait for a free slot, milliseconds.
    pub ward_wait_timeout_ms: u64,
    /// Bound on the in-memory event journal.
    pub max_events: usize,
}

impl Default for HospitalConfig {
    fn default() -> Self {
        Self {
            total_beds: 5,
            icu_slots: 5,
            general_slots: 10,
            max_waiting: 100,
            admit_interval_ms: 1_000,
            discharge_interval_ms: 5_000,
            status_interval_ms: 4_000,
            ward_hold_ms: 1_000,
            ward_wait_timeout_ms: 30_000,
            max_events: 1_024,
        }
    }
}

impl HospitalConfig {
    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.total_beds == 0 {
            return Err("total_beds must be greater than 0".into());
        }
        if self.icu_slots == 0 {
            return Err("icu_slots must be greater than 0".into());
        }
        if self.general_slots == 0 {
            return Err("general_slots must be greater than 0".into());
        }
        if self.max_waiting == 0 {
            return Err("max_waiting must be greater than 0".into());
        }
        if self.admit_interval_ms == 0 || self.discharge_interval_ms == 0 {
            return Err("pacing intervals must be greater than 0".into());
        }
        if self.ward_wait_timeout_ms == 0 {
            return Err("ward_wait_timeout_ms must be greater than 0".into());
        }
        if self.max_events == 0 {
            return Err("max_events must be greater than 0".into());
        }
        Ok(())
    }

    /// Parse configuration from a JSON string and validate.
    ///
    /// # Errors
    ///
    /// Returns a parse or validation failure description.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Delay between admission attempts.
    #[must_use]
    pub const fn admit_interval(&self) -> Duration {
        Duration::from_millis(self.admit_interval_ms)
    }

    /// Delay between discharge attempts.
    #[must_use]
    pub const fn discharge_interval(&self) -> Duration {
        Duration::from_millis(self.discharge_interval_ms)
    }

    /// Delay between status reports.
    #[must_use]
    pub const fn status_interval(&self) -> Duration {
        Duration::from_millis(self.status_interval_ms)
    }

    /// Simulated ward occupancy per allocation.
    #[must_use]
    pub const fn ward_hold(&self) -> Duration {
        Duration::from_millis(self.ward_hold_ms)
    }

    /// Bounded wait for a ward slot.
    #[must_use]
    pub const fn ward_wait_timeout(&self) -> Duration {
        Duration::from_millis(self.ward_wait_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(HospitalConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_beds_rejected() {
        let cfg = HospitalConfig {
            total_beds: 0,
            ..HospitalConfig::default()
        };
        assert!(cfg.validate().unwrap_err().contains("total_beds"));
    }

    #[test]
    fn zero_timeout_rejected() {
        let cfg = HospitalConfig {
            ward_wait_timeout_ms: 0,
            ..HospitalConfig::default()
        };
        assert!(cfg.validate().unwrap_err().contains("ward_wait_timeout_ms"));
    }

    #[test]
    fn json_round_trip() {
        let json = r#"{
            "total_beds": 5,
            "icu_slots": 5,
            "general_slots": 10,
            "max_waiting": 100,
            "admit_interval_ms": 1000,
            "discharge_interval_ms": 5000,
            "status_interval_ms": 4000,
            "ward_hold_ms": 1000,
            "ward_wait_timeout_ms": 30000,
            "max_events": 1024
        }"#;
        let cfg = HospitalConfig::from_json_str(json).unwrap();
        assert_eq!(cfg.total_beds, 5);
        assert_eq!(cfg.general_slots, 10);
        assert_eq!(cfg.discharge_interval(), Duration::from_secs(5));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let err = HospitalConfig::from_json_str("{not json").unwrap_err();
        assert!(err.contains("parse error"));
    }
}
