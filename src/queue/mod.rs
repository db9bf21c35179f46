//! Appointment triage queue.
//!
//! Pipeline for one query: the store fetches joined records, `filter`
//! narrows them, `partition` buckets and ranks them, and `statistics`
//! summarises today's workload from an unfiltered fetch. `facade` wires
//! the steps together behind [`QueueService`].

pub mod catalog;
pub mod facade;
pub mod filter;
pub mod partition;
pub mod statistics;
pub mod store;

#[cfg(test)]
pub(crate) mod fixtures;

pub use catalog::{ensure_known_specialization, list_specializations};
pub use facade::{QueueService, QueueSnapshot};
pub use filter::{evaluate, parse_filter};
pub use partition::{partition, BucketSummary, QueueEntry, QueueResult};
pub use statistics::{aggregate, DailyStatistics};
pub use store::{AppointmentStore, SpecializationCatalogStore};

use thiserror::Error;

use crate::db::DatabaseError;
use crate::models::AppointmentRecord;

#[derive(Error, Debug)]
pub enum QueueError {
    #[error("Appointment store unavailable: {0}")]
    StoreUnavailable(#[from] DatabaseError),

    #[error("Invalid record {appointment_code}: urgency level {urgency_level} is outside 1-10")]
    InvalidRecord {
        appointment_code: String,
        urgency_level: i64,
    },

    #[error("Unknown specialization: {0}")]
    UnknownSpecialization(String),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),
}

impl QueueError {
    pub(crate) fn invalid_record(record: &AppointmentRecord) -> Self {
        QueueError::InvalidRecord {
            appointment_code: record.appointment_code.clone(),
            urgency_level: record.urgency_level,
        }
    }
}

/// Rejects the first record whose urgency score has no triage bucket.
pub fn validate_records(records: &[AppointmentRecord]) -> Result<(), QueueError> {
    match records.iter().find(|r| r.bucket().is_none()) {
        Some(bad) => {
            tracing::warn!(
                appointment_code = %bad.appointment_code,
                urgency_level = bad.urgency_level,
                "Rejecting record with out-of-range urgency"
            );
            Err(QueueError::invalid_record(bad))
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::record;
    use super::*;

    #[test]
    fn validate_accepts_full_range() {
        let records: Vec<_> = (1..=10)
            .map(|u| record(&format!("A{u}"), u, "2024-01-01", "Cardiology"))
            .collect();
        assert!(validate_records(&records).is_ok());
    }

    #[test]
    fn validate_names_offending_record() {
        let records = vec![
            record("OK", 5, "2024-01-01", "Cardiology"),
            record("ZERO", 0, "2024-01-01", "Cardiology"),
            record("ELEVEN", 11, "2024-01-01", "Cardiology"),
        ];
        match validate_records(&records) {
            Err(QueueError::InvalidRecord {
                appointment_code,
                urgency_level,
            }) => {
                assert_eq!(appointment_code, "ZERO");
                assert_eq!(urgency_level, 0);
            }
            other => panic!("expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn empty_set_is_valid() {
        assert!(validate_records(&[]).is_ok());
    }
}
