use crate::db::DatabaseError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// The stored string doubles as the serde name.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = DatabaseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(DatabaseError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(AppointmentStatus {
    Confirmed => "Confirmed",
    Pending => "Pending",
    Completed => "Completed",
    Cancelled => "Cancelled",
    NoShow => "No-Show",
});

impl AppointmentStatus {
    /// Statuses that belong on the live queue.
    pub const QUEUED: [AppointmentStatus; 2] = [Self::Confirmed, Self::Pending];

    pub fn is_queued(&self) -> bool {
        Self::QUEUED.contains(self)
    }
}

str_enum!(ConsultationMode {
    InPerson => "In-Person",
    Online => "Online",
});

str_enum!(TriageBucket {
    High => "High",
    Medium => "Medium",
    Low => "Low",
});

/// Lowest and highest valid urgency scores.
pub const MIN_URGENCY: i64 = 1;
pub const MAX_URGENCY: i64 = 10;

impl TriageBucket {
    /// Buckets in queue order.
    pub const ALL: [TriageBucket; 3] = [Self::High, Self::Medium, Self::Low];

    /// Inclusive urgency range covered by this bucket.
    pub fn range(&self) -> std::ops::RangeInclusive<i64> {
        match self {
            Self::High => 8..=MAX_URGENCY,
            Self::Medium => 4..=7,
            Self::Low => MIN_URGENCY..=3,
        }
    }

    pub fn contains(&self, urgency_level: i64) -> bool {
        self.range().contains(&urgency_level)
    }

    /// Bucket for an urgency score, `None` outside 1..=10.
    pub fn for_level(urgency_level: i64) -> Option<TriageBucket> {
        Self::ALL.into_iter().find(|b| b.contains(urgency_level))
    }

    /// Option text of the urgency selector.
    pub fn selector_label(&self) -> &'static str {
        match self {
            Self::High => "High (8-10)",
            Self::Medium => "Medium (4-7)",
            Self::Low => "Low (1-3)",
        }
    }

    /// Accepts a bare band name or a full selector label, ignoring ASCII case.
    pub fn from_selector(value: &str) -> Option<TriageBucket> {
        let value = value.trim();
        Self::ALL.into_iter().find(|b| {
            value.eq_ignore_ascii_case(b.as_str()) || value.eq_ignore_ascii_case(b.selector_label())
        })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "HIGH PRIORITY (Urgency 8-10)",
            Self::Medium => "MEDIUM PRIORITY (Urgency 4-7)",
            Self::Low => "LOW PRIORITY (Urgency 1-3)",
        }
    }

    pub fn guidance(&self) -> &'static str {
        match self {
            Self::High => "Requires immediate attention",
            Self::Medium => "Requires attention within 24-48 hours",
            Self::Low => "Non-urgent, routine care",
        }
    }
}
