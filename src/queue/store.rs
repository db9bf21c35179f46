use chrono::NaiveDate;

use crate::db::DatabaseError;
use crate::models::AppointmentRecord;

/// Source of joined appointment records.
///
/// Implementations may apply `date` and `specialization` themselves;
/// callers re-apply the full filter either way, so pushdown only ever
/// narrows the transfer, never the meaning.
pub trait AppointmentStore {
    fn fetch_appointments(
        &self,
        date: Option<NaiveDate>,
        specialization: Option<&str>,
    ) -> Result<Vec<AppointmentRecord>, DatabaseError>;
}

/// Source of every specialization the practice knows about.
pub trait SpecializationCatalogStore {
    fn fetch_specializations(&self) -> Result<Vec<String>, DatabaseError>;
}

impl<T: AppointmentStore + ?Sized> AppointmentStore for &T {
    fn fetch_appointments(
        &self,
        date: Option<NaiveDate>,
        specialization: Option<&str>,
    ) -> Result<Vec<AppointmentRecord>, DatabaseError> {
        (**self).fetch_appointments(date, specialization)
    }
}

impl<T: SpecializationCatalogStore + ?Sized> SpecializationCatalogStore for &T {
    fn fetch_specializations(&self) -> Result<Vec<String>, DatabaseError> {
        (**self).fetch_specializations()
    }
}
