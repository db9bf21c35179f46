use chrono::NaiveDate;

use super::QueueError;
use crate::models::{
    normalize_specialization, AppointmentRecord, DatePreset, FilterSpec, RawFilter, TriageBucket,
};

/// Turns untyped selector values into a [`FilterSpec`].
///
/// Dates accept `YYYY-MM-DD` or a preset label resolved against `today`.
/// Urgency accepts `High`, `Medium`, `Low` or a full selector label such
/// as `"High (8-10)"`. For both date and urgency, `"All"` (any case) or
/// blank means no restriction.
pub fn parse_filter(raw: &RawFilter, today: NaiveDate) -> Result<FilterSpec, QueueError> {
    let date = match raw.date.as_deref() {
        None => None,
        Some(value) => match DatePreset::from_label(value) {
            Some(preset) => preset.resolve(today),
            None => Some(
                NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
                    QueueError::InvalidFilter(format!("unrecognised date: {value}"))
                })?,
            ),
        },
    };

    let urgency_band = match raw.urgency.as_deref().map(str::trim) {
        None => None,
        Some(value) if value.is_empty() || value.eq_ignore_ascii_case("all") => None,
        Some(value) => Some(TriageBucket::from_selector(value).ok_or_else(|| {
            QueueError::InvalidFilter(format!("unrecognised urgency band: {value}"))
        })?),
    };

    let specialization = raw.specialization.clone().and_then(normalize_specialization);

    Ok(FilterSpec {
        date,
        urgency_band,
        specialization,
    })
}

/// True when `record` satisfies every predicate present in `spec`.
pub fn matches(record: &AppointmentRecord, spec: &FilterSpec) -> bool {
    if let Some(date) = spec.date {
        if record.appointment_date != date {
            return false;
        }
    }
    if let Some(band) = spec.urgency_band {
        if !band.contains(record.urgency_level) {
            return false;
        }
    }
    if let Some(ref specialization) = spec.specialization {
        if record.specialization != *specialization {
            return false;
        }
    }
    true
}

/// Keeps the records matching `spec`, in their original relative order.
/// No match is an empty vector, not an error.
pub fn evaluate(mut records: Vec<AppointmentRecord>, spec: &FilterSpec) -> Vec<AppointmentRecord> {
    if !spec.is_unrestricted() {
        records.retain(|r| matches(r, spec));
    }
    records
}
