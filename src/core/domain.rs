//! Domain models for appointment records and calendar view models.
//!
//! This module provides the core data structures that represent raw
//! appointment records as delivered by the practice data source, and the
//! derived, render-ready projections consumed by the calendar grid.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Strongly-typed identifier for an appointment record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AppointmentId(pub i64);

impl AppointmentId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Appointment lifecycle status as reported by the data source.
///
/// The feed models status as an open string, so unknown values are
/// preserved in [`AppointmentStatus::Other`] rather than rejected. Matching
/// on input is case-insensitive; `no-show` also accepts the `no_show` and
/// `noshow` spellings seen in older feeds.
///
/// # Examples
///
/// ```
/// use clinic_rust::core::domain::AppointmentStatus;
///
/// assert_eq!(AppointmentStatus::from("Scheduled"), AppointmentStatus::Scheduled);
/// assert_eq!(AppointmentStatus::from("NO_SHOW"), AppointmentStatus::NoShow);
/// assert_eq!(
///     AppointmentStatus::from("walk-in"),
///     AppointmentStatus::Other("walk-in".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
    NoShow,
    Requested,
    /// Unrecognized status, passed through as-is.
    Other(String),
}

impl AppointmentStatus {
    /// Style triple for rendering this status on the calendar grid.
    ///
    /// Unknown statuses fall back to the `scheduled` triple so every
    /// record stays visible on the grid.
    pub fn style(&self) -> StatusStyle {
        match self {
            AppointmentStatus::Completed => StatusStyle {
                color: "#dcfce7",
                border_color: "#22c55e",
                text_color: "#166534",
            },
            AppointmentStatus::Cancelled => StatusStyle {
                color: "#fee2e2",
                border_color: "#ef4444",
                text_color: "#991b1b",
            },
            AppointmentStatus::NoShow => StatusStyle {
                color: "#f3f4f6",
                border_color: "#6b7280",
                text_color: "#1f2937",
            },
            AppointmentStatus::Requested => StatusStyle {
                color: "#fef9c3",
                border_color: "#eab308",
                text_color: "#854d0e",
            },
            AppointmentStatus::Scheduled | AppointmentStatus::Other(_) => StatusStyle {
                color: "#dbeafe",
                border_color: "#3b82f6",
                text_color: "#1e40af",
            },
        }
    }
}

impl From<&str> for AppointmentStatus {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "scheduled" => AppointmentStatus::Scheduled,
            "completed" => AppointmentStatus::Completed,
            "cancelled" => AppointmentStatus::Cancelled,
            "no-show" | "no_show" | "noshow" => AppointmentStatus::NoShow,
            "requested" => AppointmentStatus::Requested,
            _ => AppointmentStatus::Other(value.to_string()),
        }
    }
}

impl From<String> for AppointmentStatus {
    fn from(value: String) -> Self {
        AppointmentStatus::from(value.as_str())
    }
}

impl From<AppointmentStatus> for String {
    fn from(status: AppointmentStatus) -> Self {
        status.to_string()
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "scheduled"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
            AppointmentStatus::NoShow => write!(f, "no-show"),
            AppointmentStatus::Requested => write!(f, "requested"),
            AppointmentStatus::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Fixed style triple derived from an appointment status.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusStyle {
    pub color: &'static str,
    pub border_color: &'static str,
    pub text_color: &'static str,
}

/// An unprocessed appointment record as delivered by the data source.
///
/// `start_date_time` stays a string until formatting; parse failures are
/// reported per record rather than at deserialization time so that one bad
/// record cannot reject a whole feed.
///
/// # Examples
///
/// ```
/// use clinic_rust::core::domain::{AppointmentId, AppointmentStatus, RawAppointment};
///
/// let raw = RawAppointment {
///     id: AppointmentId(1),
///     start_date_time: "2025-08-20T09:00:00".to_string(),
///     duration_minutes: 30,
///     status: AppointmentStatus::Scheduled,
///     services: vec!["Checkup".to_string()],
///     doctor_name: Some("Rivera".to_string()),
///     doctor_specialization: None,
///     notes: None,
///     location: None,
///     fee: None,
///     billing_type: None,
/// };
///
/// assert_eq!(raw.services.first().map(String::as_str), Some("Checkup"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAppointment {
    pub id: AppointmentId,
    pub start_date_time: String,
    pub duration_minutes: u32,
    #[serde(default = "default_status")]
    pub status: AppointmentStatus,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub doctor_name: Option<String>,
    #[serde(default)]
    pub doctor_specialization: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub fee: Option<f64>,
    #[serde(default)]
    pub billing_type: Option<String>,
}

fn default_status() -> AppointmentStatus {
    AppointmentStatus::Scheduled
}

/// A derived, render-ready projection of a raw appointment.
///
/// Immutable once built. `end_time` is always `start_time` plus the raw
/// record's duration; the raw record itself is never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedAppointment {
    pub id: AppointmentId,
    /// `"<first service or 'Appointment'> - Dr. <doctor or 'Doctor'>"`
    pub title: String,
    /// Start instant at full precision, used for day bucketing.
    pub date: DateTime<Utc>,
    /// Zero-padded 24-hour `HH:MM`, for grid positioning.
    pub start_time: String,
    /// Zero-padded 24-hour `HH:MM`, `start + duration_minutes`.
    pub end_time: String,
    /// Human-readable 12-hour range, e.g. `"9:00 AM - 10:20 AM"`.
    pub time_display: String,
    pub color: &'static str,
    pub border_color: &'static str,
    pub text_color: &'static str,
    pub status: AppointmentStatus,
    pub description: String,
    pub duration_minutes: u32,
    pub services: Vec<String>,
    pub doctor_name: Option<String>,
    pub doctor_specialization: Option<String>,
    pub notes: Option<String>,
    pub location: Option<String>,
    pub fee: Option<f64>,
    pub billing_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parsing_is_case_insensitive() {
        assert_eq!(
            AppointmentStatus::from("SCHEDULED"),
            AppointmentStatus::Scheduled
        );
        assert_eq!(
            AppointmentStatus::from("Completed"),
            AppointmentStatus::Completed
        );
        assert_eq!(AppointmentStatus::from("no-show"), AppointmentStatus::NoShow);
        assert_eq!(AppointmentStatus::from("No_Show"), AppointmentStatus::NoShow);
    }

    #[test]
    fn unknown_status_passes_through() {
        let status = AppointmentStatus::from("Telehealth-Intake");
        assert_eq!(
            status,
            AppointmentStatus::Other("Telehealth-Intake".to_string())
        );
        assert_eq!(status.to_string(), "Telehealth-Intake");
    }

    #[test]
    fn unknown_status_uses_scheduled_style() {
        let unknown = AppointmentStatus::from("unknown_value");
        assert_eq!(unknown.style(), AppointmentStatus::Scheduled.style());
    }

    #[test]
    fn each_known_status_has_a_distinct_style() {
        let styles = [
            AppointmentStatus::Scheduled.style(),
            AppointmentStatus::Completed.style(),
            AppointmentStatus::Cancelled.style(),
            AppointmentStatus::NoShow.style(),
            AppointmentStatus::Requested.style(),
        ];
        for (i, a) in styles.iter().enumerate() {
            for b in styles.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn status_serde_round_trip() {
        let json = serde_json::to_string(&AppointmentStatus::NoShow).unwrap();
        assert_eq!(json, "\"no-show\"");

        let parsed: AppointmentStatus = serde_json::from_str("\"Requested\"").unwrap();
        assert_eq!(parsed, AppointmentStatus::Requested);

        let unknown: AppointmentStatus = serde_json::from_str("\"triage\"").unwrap();
        assert_eq!(unknown, AppointmentStatus::Other("triage".to_string()));
    }

    #[test]
    fn raw_appointment_deserializes_from_camel_case() {
        let json = r#"{
            "id": 7,
            "startDateTime": "2025-08-20T09:00:00",
            "durationMinutes": 45,
            "status": "requested",
            "services": ["Dental Cleaning"],
            "doctorName": "Okafor"
        }"#;

        let raw: RawAppointment = serde_json::from_str(json).unwrap();
        assert_eq!(raw.id, AppointmentId(7));
        assert_eq!(raw.duration_minutes, 45);
        assert_eq!(raw.status, AppointmentStatus::Requested);
        assert_eq!(raw.doctor_name.as_deref(), Some("Okafor"));
        assert_eq!(raw.notes, None);
    }
}
