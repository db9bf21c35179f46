use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::enums::{AppointmentStatus, ConsultationMode, TriageBucket};

/// One scheduled visit, already joined with patient, doctor,
/// specialization and prediction data.
///
/// `urgency_level` is kept exactly as the store returned it; range
/// checking happens in [`AppointmentRecord::bucket`] callers, never by
/// clamping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentRecord {
    pub appointment_code: String,
    pub patient_name: String,
    pub age: u32,
    pub gender: String,
    pub phone: String,
    pub symptom_text: String,
    pub predicted_disease: String,
    pub probability: f64,
    pub urgency_level: i64,
    pub urgency_reason: String,
    pub doctor_name: String,
    pub specialization: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub status: AppointmentStatus,
    pub mode: ConsultationMode,
}

impl AppointmentRecord {
    /// Triage bucket for this record, `None` when the urgency score is
    /// outside 1..=10.
    pub fn bucket(&self) -> Option<TriageBucket> {
        TriageBucket::for_level(self.urgency_level)
    }

    pub fn is_high_priority(&self) -> bool {
        self.bucket() == Some(TriageBucket::High)
    }

    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.appointment_date == date
    }
}
