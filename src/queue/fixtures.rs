//! Test builders and an in-memory store.

use std::cell::Cell;

use chrono::{NaiveDate, NaiveTime};

use super::store::{AppointmentStore, SpecializationCatalogStore};
use crate::db::DatabaseError;
use crate::models::*;

pub(crate) fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub(crate) fn record(code: &str, urgency: i64, day: &str, specialization: &str) -> AppointmentRecord {
    AppointmentRecord {
        appointment_code: code.into(),
        patient_name: format!("Patient {code}"),
        age: 37,
        gender: "M".into(),
        phone: "555-0199".into(),
        symptom_text: "Persistent cough and fever".into(),
        predicted_disease: "Bronchitis".into(),
        probability: 72.0,
        urgency_level: urgency,
        urgency_reason: "Respiratory symptoms".into(),
        doctor_name: "Rivera".into(),
        specialization: specialization.into(),
        appointment_date: date(day),
        appointment_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        status: AppointmentStatus::Pending,
        mode: ConsultationMode::Online,
    }
}

/// Store double. `pushdown` controls whether it applies the date and
/// specialization arguments itself; `fail` makes every call error.
pub(crate) struct MemoryStore {
    pub records: Vec<AppointmentRecord>,
    pub specializations: Vec<String>,
    pub pushdown: bool,
    pub fail: bool,
    pub fetches: Cell<u32>,
}

impl MemoryStore {
    pub fn new(records: Vec<AppointmentRecord>) -> Self {
        let mut specializations: Vec<String> =
            records.iter().map(|r| r.specialization.clone()).collect();
        specializations.sort();
        specializations.dedup();
        Self {
            records,
            specializations,
            pushdown: true,
            fail: false,
            fetches: Cell::new(0),
        }
    }

    pub fn without_pushdown(mut self) -> Self {
        self.pushdown = false;
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn with_specialization(mut self, name: &str) -> Self {
        self.specializations.push(name.into());
        self
    }

    fn unavailable() -> DatabaseError {
        DatabaseError::Sqlite(rusqlite::Error::InvalidPath("unreachable.db".into()))
    }
}

impl AppointmentStore for MemoryStore {
    fn fetch_appointments(
        &self,
        date: Option<NaiveDate>,
        specialization: Option<&str>,
    ) -> Result<Vec<AppointmentRecord>, DatabaseError> {
        self.fetches.set(self.fetches.get() + 1);
        if self.fail {
            return Err(Self::unavailable());
        }
        if !self.pushdown {
            return Ok(self.records.clone());
        }
        Ok(self
            .records
            .iter()
            .filter(|r| date.map_or(true, |d| r.appointment_date == d))
            .filter(|r| specialization.map_or(true, |s| r.specialization == s))
            .cloned()
            .collect())
    }
}

impl SpecializationCatalogStore for MemoryStore {
    fn fetch_specializations(&self) -> Result<Vec<String>, DatabaseError> {
        if self.fail {
            return Err(Self::unavailable());
        }
        Ok(self.specializations.clone())
    }
}
