use chrono::{Duration, NaiveDate};
use serde::Deserialize;

use super::enums::TriageBucket;

/// Caller-supplied queue filter. Absent fields impose no constraint.
///
/// Built in code or through `parse_filter`; never deserialized directly,
/// so the specialization always passes `normalize_specialization`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub date: Option<NaiveDate>,
    pub urgency_band: Option<TriageBucket>,
    pub specialization: Option<String>,
}

impl FilterSpec {
    /// Filter that keeps every record.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    pub fn on_date(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    pub fn with_urgency_band(mut self, band: TriageBucket) -> Self {
        self.urgency_band = Some(band);
        self
    }

    /// Sets the specialization filter. Empty or whitespace-only names
    /// clear it instead.
    pub fn with_specialization(mut self, specialization: impl Into<String>) -> Self {
        self.specialization = normalize_specialization(specialization.into());
        self
    }

    pub fn is_unrestricted(&self) -> bool {
        self.date.is_none() && self.urgency_band.is_none() && self.specialization.is_none()
    }
}

/// Date selector choices offered to staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePreset {
    Today,
    Tomorrow,
    AllDates,
}

impl DatePreset {
    /// Matches selector labels such as `"Today"` or `"All Dates"`,
    /// ignoring ASCII case.
    pub fn from_label(label: &str) -> Option<DatePreset> {
        let label = label.trim();
        if label.eq_ignore_ascii_case("today") {
            Some(Self::Today)
        } else if label.eq_ignore_ascii_case("tomorrow") {
            Some(Self::Tomorrow)
        } else if label.eq_ignore_ascii_case("all")
            || label.eq_ignore_ascii_case("all dates")
            || label.is_empty()
        {
            Some(Self::AllDates)
        } else {
            None
        }
    }

    pub fn resolve(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Today => Some(today),
            Self::Tomorrow => Some(today + Duration::days(1)),
            Self::AllDates => None,
        }
    }
}

/// Untyped filter values as they arrive from a query string or form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawFilter {
    pub date: Option<String>,
    pub urgency: Option<String>,
    pub specialization: Option<String>,
}

/// Maps a raw specialization value to a filter. Blank means "no filter";
/// anything else is kept verbatim for exact, case-sensitive matching.
pub fn normalize_specialization(raw: String) -> Option<String> {
    if raw.trim().is_empty() || raw == "All" {
        None
    } else {
        Some(raw)
    }
}
