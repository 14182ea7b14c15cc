//! Appointment formatting for the week-grid calendar view.
//!
//! This is the core transform of the crate: raw appointment records from
//! the data source become display-ready, styled entries. The transform is a
//! pure, order-preserving map — one formatted record per raw record, no
//! reordering, no mutation of the input.

use std::collections::HashSet;

use log::warn;
use serde::Serialize;

use crate::core::domain::{FormattedAppointment, RawAppointment};
use crate::core::error::{CalendarError, CalendarResult};
use crate::time::{end_instant, format_24h, parse_start_instant, time_display};

/// Format a single raw appointment into a calendar entry.
///
/// Fails with [`CalendarError::StartTimeParse`] when `start_date_time` is
/// not a valid timestamp; a formatted record is never built from a garbage
/// date.
pub fn format_appointment(raw: &RawAppointment) -> CalendarResult<FormattedAppointment> {
    let start = parse_start_instant(&raw.start_date_time).map_err(|source| {
        CalendarError::StartTimeParse {
            id: raw.id,
            value: raw.start_date_time.clone(),
            source,
        }
    })?;
    let end = end_instant(start, raw.duration_minutes);

    let title = format!(
        "{} - Dr. {}",
        raw.services
            .first()
            .map(String::as_str)
            .unwrap_or("Appointment"),
        raw.doctor_name.as_deref().unwrap_or("Doctor")
    );

    let description = match raw.notes.as_deref() {
        Some(notes) if !notes.is_empty() => notes.to_string(),
        _ => format!("{} appointment", raw.services.join(", ")),
    };

    let style = raw.status.style();

    Ok(FormattedAppointment {
        id: raw.id,
        title,
        date: start,
        start_time: format_24h(start),
        end_time: format_24h(end),
        time_display: time_display(start, end),
        color: style.color,
        border_color: style.border_color,
        text_color: style.text_color,
        status: raw.status.clone(),
        description,
        duration_minutes: raw.duration_minutes,
        services: raw.services.clone(),
        doctor_name: raw.doctor_name.clone(),
        doctor_specialization: raw.doctor_specialization.clone(),
        notes: raw.notes.clone(),
        location: raw.location.clone(),
        fee: raw.fee,
        billing_type: raw.billing_type.clone(),
    })
}

/// Format a batch of raw appointments, preserving input order.
///
/// Strict: the first unparseable record halts the batch. Callers that
/// prefer to drop bad records use [`format_for_calendar_lossy`].
pub fn format_for_calendar(raw: &[RawAppointment]) -> CalendarResult<Vec<FormattedAppointment>> {
    raw.iter().map(format_appointment).collect()
}

/// Format a batch of raw appointments, skipping unparseable records.
///
/// Surviving records keep their relative input order. Each dropped record
/// is logged and its error returned alongside the formatted entries so the
/// caller can surface the failures.
pub fn format_for_calendar_lossy(
    raw: &[RawAppointment],
) -> (Vec<FormattedAppointment>, Vec<CalendarError>) {
    let mut entries = Vec::with_capacity(raw.len());
    let mut failures = Vec::new();

    for record in raw {
        match format_appointment(record) {
            Ok(formatted) => entries.push(formatted),
            Err(error) => {
                warn!("dropping appointment from calendar view: {}", error);
                failures.push(error);
            }
        }
    }

    (entries, failures)
}

/// Calendar view payload with entry counts and day metadata.
///
/// `unique_days` holds the sorted `YYYY-MM-DD` labels present in the
/// entries, which the grid uses for its day headers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarViewData {
    pub entries: Vec<FormattedAppointment>,
    pub total_count: usize,
    pub unique_days: Vec<String>,
}

/// Compute calendar view data with counts and day metadata.
/// This function takes formatted entries and computes everything needed
/// for the week-grid visualization.
pub fn compute_calendar_view_data(entries: Vec<FormattedAppointment>) -> CalendarViewData {
    if entries.is_empty() {
        return CalendarViewData {
            entries: vec![],
            total_count: 0,
            unique_days: vec![],
        };
    }

    let mut unique_days = HashSet::new();
    for entry in &entries {
        unique_days.insert(entry.date.format("%Y-%m-%d").to_string());
    }

    let mut sorted_days: Vec<String> = unique_days.into_iter().collect();
    sorted_days.sort();

    CalendarViewData {
        total_count: entries.len(),
        unique_days: sorted_days,
        entries,
    }
}
