use anyhow::{bail, Context, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::Path;

use crate::core::domain::{AppointmentId, RawAppointment};

/// Custom deserializer that accepts either string or integer appointment ids
fn deserialize_appointment_id<'de, D>(deserializer: D) -> Result<AppointmentId, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrInt {
        String(String),
        Int(i64),
    }

    match StringOrInt::deserialize(deserializer)? {
        StringOrInt::String(s) => s.parse::<i64>().map(AppointmentId).map_err(D::Error::custom),
        StringOrInt::Int(i) => Ok(AppointmentId(i)),
    }
}

/// Raw JSON structure for one appointment as it comes from the feed.
///
/// Mirrors [`RawAppointment`] but tolerates the id arriving as a string,
/// which some upstream exports do.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FeedAppointment {
    #[serde(deserialize_with = "deserialize_appointment_id")]
    id: AppointmentId,
    start_date_time: String,
    duration_minutes: u32,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    services: Vec<String>,
    #[serde(default)]
    doctor_name: Option<String>,
    #[serde(default)]
    doctor_specialization: Option<String>,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    fee: Option<f64>,
    #[serde(default)]
    billing_type: Option<String>,
}

impl From<FeedAppointment> for RawAppointment {
    fn from(feed: FeedAppointment) -> Self {
        RawAppointment {
            id: feed.id,
            start_date_time: feed.start_date_time,
            duration_minutes: feed.duration_minutes,
            status: feed.status.as_deref().unwrap_or("scheduled").into(),
            services: feed.services,
            doctor_name: feed.doctor_name,
            doctor_specialization: feed.doctor_specialization,
            notes: feed.notes,
            location: feed.location,
            fee: feed.fee,
            billing_type: feed.billing_type,
        }
    }
}

/// Parse an appointment feed file into RawAppointment structures
pub fn parse_appointment_feed(feed_path: &Path) -> Result<Vec<RawAppointment>> {
    let json_content = std::fs::read_to_string(feed_path)
        .with_context(|| format!("Failed to read feed file: {}", feed_path.display()))?;

    parse_appointment_feed_str(&json_content)
}

/// Parse an appointment feed from a JSON string.
///
/// The practice API wraps the list in an `appointments` object; ad-hoc
/// exports deliver a bare array. Both are accepted. Malformed records are
/// reported with the JSON path that failed.
pub fn parse_appointment_feed_str(json_str: &str) -> Result<Vec<RawAppointment>> {
    let document: Value =
        serde_json::from_str(json_str).context("Failed to parse appointment feed JSON")?;

    let list = match document {
        Value::Object(mut fields) => fields
            .remove("appointments")
            .context("Feed object is missing the \"appointments\" key")?,
        list @ Value::Array(_) => list,
        _ => bail!("Appointment feed must be a JSON object or array"),
    };

    let appointments: Vec<FeedAppointment> = serde_path_to_error::deserialize(list)
        .context("Failed to decode appointment records")?;

    Ok(appointments.into_iter().map(RawAppointment::from).collect())
}
