use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::AppointmentRecord;

/// Today's workload, independent of any queue filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStatistics {
    pub today: NaiveDate,
    pub today_total: u32,
    pub today_high_priority: u32,
    /// Specializations with at least one appointment today.
    pub specialization_distribution: BTreeMap<String, u32>,
    /// Number of keys in `specialization_distribution`.
    pub active_specializations: u32,
}

impl DailyStatistics {
    pub fn empty(today: NaiveDate) -> Self {
        Self {
            today,
            today_total: 0,
            today_high_priority: 0,
            specialization_distribution: BTreeMap::new(),
            active_specializations: 0,
        }
    }
}

/// Counts the records scheduled on `today`. Records on other dates are
/// ignored, so callers may pass a wider set than today's.
pub fn aggregate(all_records: &[AppointmentRecord], today: NaiveDate) -> DailyStatistics {
    let mut stats = DailyStatistics::empty(today);

    for record in all_records.iter().filter(|r| r.is_on(today)) {
        stats.today_total += 1;
        if record.is_high_priority() {
            stats.today_high_priority += 1;
        }
        *stats
            .specialization_distribution
            .entry(record.specialization.clone())
            .or_insert(0) += 1;
    }
    stats.active_specializations = stats.specialization_distribution.len() as u32;

    stats
}
