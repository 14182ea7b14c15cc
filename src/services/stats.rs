//! Aggregate appointment statistics for the dashboard sidebar.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::domain::{AppointmentStatus, FormattedAppointment};
use crate::services::queries::{appointments_by_status, todays_appointments, upcoming_appointments};

/// Aggregate counters over a formatted appointment list.
///
/// The five status counters cover the named buckets only, so their sum can
/// be less than `total` when unknown statuses are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentStats {
    pub total: usize,
    pub scheduled: usize,
    pub completed: usize,
    pub cancelled: usize,
    pub requested: usize,
    pub no_show: usize,
    pub upcoming: usize,
    pub today: usize,
    pub today_scheduled: usize,
}

/// Compute aggregate statistics from formatted appointments.
pub fn compute_appointment_stats(
    appointments: &[FormattedAppointment],
    now: DateTime<Utc>,
) -> AppointmentStats {
    let buckets = appointments_by_status(appointments);
    let today = todays_appointments(appointments, now);
    let today_scheduled = today
        .iter()
        .filter(|a| a.status == AppointmentStatus::Scheduled)
        .count();

    AppointmentStats {
        total: appointments.len(),
        scheduled: buckets.scheduled.len(),
        completed: buckets.completed.len(),
        cancelled: buckets.cancelled.len(),
        requested: buckets.requested.len(),
        no_show: buckets.no_show.len(),
        upcoming: upcoming_appointments(appointments, now).len(),
        today: today.len(),
        today_scheduled,
    }
}
